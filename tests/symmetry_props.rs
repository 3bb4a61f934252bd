//! Property tests: evolution and catalog matching do not care how a pattern is placed.

use apgcat::catalog::{catalog, Family};
use apgcat::codec::{rle, wechsler};
use apgcat::core::cell_set::CellSet;
use apgcat::core::coord::Coord;
use apgcat::core::transform::{Transform, TRANSFORMATIONS};
use apgcat::life::evolve;
use apgcat::search::{find_any, matches_any};
use proptest::prelude::*;

fn arb_soup() -> impl Strategy<Value = CellSet> {
    prop::collection::vec((0i32..6, 0i32..6), 0..20)
        .prop_map(|pts| pts.into_iter().map(Coord::from).collect())
}

fn arb_transform() -> impl Strategy<Value = Transform> {
    (0usize..8).prop_map(|i| TRANSFORMATIONS[i])
}

fn arb_offset() -> impl Strategy<Value = Coord> {
    (-60i32..60, -60i32..60).prop_map(Coord::from)
}

proptest! {
    #[test]
    fn evolution_commutes_with_placement(
        soup in arb_soup(),
        t in arb_transform(),
        offset in arb_offset(),
        generations in 0usize..6,
    ) {
        let moved_then_run = evolve(&soup.transformed(t, offset), generations);
        let run_then_moved = evolve(&soup, generations).transformed(t, offset);
        prop_assert_eq!(moved_then_run, run_then_moved);
    }

    #[test]
    fn inverse_undoes_a_transform(soup in arb_soup(), t in arb_transform()) {
        let back = soup.transformed(t, Coord::ORIGIN).transformed(t.inverse(), Coord::ORIGIN);
        prop_assert_eq!(back, soup);
    }

    #[test]
    fn signatures_are_found_wherever_they_are_placed(
        rule_idx in 0usize..Family::ALL.len(),
        sig_idx in 0usize..16,
        t in arb_transform(),
        offset in arb_offset(),
    ) {
        let rule = &catalog().rules()[rule_idx];
        let sigs = rule.signatures();
        let sig = &sigs[sig_idx % sigs.len()];

        let subject = sig.wanted().transformed(t, offset);
        prop_assert!(matches_any(&subject, sigs));
        prop_assert!(rule.evaluate(rule.gate().unwrap_or_default(), &subject));

        let hit = find_any(&subject, std::slice::from_ref(sig));
        prop_assert!(hit.is_some());
    }

    #[test]
    fn a_live_forbidden_cell_defeats_the_signature(
        rule_idx in 0usize..Family::ALL.len(),
        sig_idx in 0usize..16,
        dead_idx in 0usize..64,
        t in arb_transform(),
        offset in arb_offset(),
    ) {
        let sigs = catalog().rules()[rule_idx].signatures();
        let sig = &sigs[sig_idx % sigs.len()];
        let dead = sig.unwanted().sorted();
        prop_assume!(!dead.is_empty());

        // For every exemplar, no other placement of its live cells fits around one extra
        // live cell taken from its own dead set.
        let mut subject = sig.wanted().clone();
        subject.insert(dead[dead_idx % dead.len()]);
        let subject = subject.transformed(t, offset);
        prop_assert!(!matches_any(&subject, std::slice::from_ref(sig)));
    }

    #[test]
    fn decoders_accept_any_text(text in ".{0,40}") {
        let _ = wechsler::decode(&text);
        let _ = rle::decode(&text);
    }

    #[test]
    fn rle_accepts_long_digit_runs(text in "([0-9]{0,14}[bo$!k]){0,4}") {
        let cells = rle::decode(&text);
        prop_assert!(cells.len() <= 4 * rle::MAX_RUN as usize);
    }

    #[test]
    fn rle_population_matches_live_runs(runs in prop::collection::vec(1u32..5, 1..8)) {
        let body: String = runs.iter().map(|n| format!("{n}ob")).collect::<String>() + "!";
        let cells = rle::decode(&body);
        prop_assert_eq!(cells.len() as u32, runs.iter().sum::<u32>());
    }
}
