use rustc_hash::FxHashMap;
use tracing::trace;

use crate::core::bounds::BoundingBox;
use crate::core::cell_set::CellSet;
use crate::life::rule::LifeRule;

/// One generation under `rule` on the unbounded plane.
///
/// Only cells next to a live cell can change, so we count neighbours by scattering from
/// every live cell and then apply the rule to each touched cell.
pub fn step_with(cells: &CellSet, rule: &LifeRule) -> CellSet {
    let mut counts: FxHashMap<_, u8> =
        FxHashMap::with_capacity_and_hasher(cells.len() * 8, Default::default());
    for &c in cells {
        for n in c.neighbors() {
            *counts.entry(n).or_insert(0) += 1;
        }
    }

    let mut next = CellSet::with_capacity(cells.len());

    // Isolated live cells are absent from `counts`.
    if rule.next_state(true, 0) {
        next.extend(cells.iter().copied().filter(|c| !counts.contains_key(c)));
    }

    for (c, n) in counts {
        if rule.next_state(cells.contains(c), n) {
            next.insert(c);
        }
    }
    next
}

/// One generation of B3/S23.
pub fn step(cells: &CellSet) -> CellSet {
    step_with(cells, &LifeRule::CONWAY)
}

/// `generations` steps of B3/S23. Zero generations returns a copy.
pub fn evolve(cells: &CellSet, generations: usize) -> CellSet {
    evolve_with(cells, generations, &LifeRule::CONWAY)
}

pub fn evolve_with(cells: &CellSet, generations: usize, rule: &LifeRule) -> CellSet {
    let mut cur = cells.clone();
    for _ in 0..generations {
        if cur.is_empty() {
            break;
        }
        cur = step_with(&cur, rule);
    }
    trace!(generations, population = cur.len(), "evolved");
    cur
}

/// Successive generations, starting with the initial state itself.
///
/// The iterator is infinite; callers bound it with `take`.
#[derive(Debug, Clone)]
pub struct Generations {
    next: Option<CellSet>,
    rule: LifeRule,
}

impl Generations {
    pub fn new(cells: &CellSet, rule: LifeRule) -> Self {
        Self {
            next: Some(cells.clone()),
            rule,
        }
    }
}

impl Iterator for Generations {
    type Item = CellSet;

    fn next(&mut self) -> Option<CellSet> {
        let cur = self.next.take()?;
        self.next = Some(step_with(&cur, &self.rule));
        Some(cur)
    }
}

pub fn generations(cells: &CellSet) -> Generations {
    Generations::new(cells, LifeRule::CONWAY)
}

/// Bounds of every cell alive in any of the first `generations` states (the initial state
/// counts as the first). `None` when that history has no live cell at all.
pub fn bounding_box(cells: &CellSet, generations: usize) -> Option<BoundingBox> {
    bounding_box_with(cells, generations, &LifeRule::CONWAY)
}

pub fn bounding_box_with(
    cells: &CellSet,
    generations: usize,
    rule: &LifeRule,
) -> Option<BoundingBox> {
    Generations::new(cells, *rule)
        .take(generations)
        .filter_map(|g| g.bounds())
        .reduce(BoundingBox::merge)
}
