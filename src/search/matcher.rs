use crate::core::cell_set::CellSet;
use crate::core::coord::Coord;
use crate::core::transform::{Transform, TRANSFORMATIONS};
use crate::search::signature::Signature;

/// Where a signature was found: the orientation applied to the subject and the subject
/// cell (in that orientation) the pivot landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub transform: Transform,
    pub anchor: Coord,
}

/// The first subject cell that can serve as the pivot of `sig` under translation only.
pub fn find_match(subject: &CellSet, sig: &Signature) -> Option<Coord> {
    let pivot = sig.pivot()?;

    subject.iter().copied().find(|&c| {
        let shift = c - pivot;
        sig.wanted().iter().all(|&w| subject.contains(w + shift))
            && !sig.unwanted().iter().any(|&u| subject.contains(u + shift))
    })
}

/// Does `subject` contain `sig` at some translation? An empty signature never matches.
pub fn matches(subject: &CellSet, sig: &Signature) -> bool {
    find_match(subject, sig).is_some()
}

/// Tries every orientation of `subject` against every signature.
pub fn find_any(subject: &CellSet, signatures: &[Signature]) -> Option<Match> {
    if subject.is_empty() || signatures.is_empty() {
        return None;
    }

    TRANSFORMATIONS.iter().find_map(|&t| {
        let oriented = subject.transformed(t, Coord::ORIGIN);
        signatures
            .iter()
            .find_map(|sig| find_match(&oriented, sig))
            .map(|anchor| Match {
                transform: t,
                anchor,
            })
    })
}

pub fn matches_any(subject: &CellSet, signatures: &[Signature]) -> bool {
    find_any(subject, signatures).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::rle;

    #[test]
    fn translation_only_match() {
        // L-tromino with its inner corner required dead
        let sig = Signature::from_rle("2o$o!", "$bo!");
        let subject = rle::decode("3b2o$3bo!");
        assert!(matches(&subject, &sig));
        assert_eq!(find_match(&subject, &sig), Some(Coord::new(3, 0)));

        let filled = rle::decode("3b2o$3b2o!");
        assert!(!matches(&filled, &sig));
    }

    #[test]
    fn forbidden_cell_blocks_every_orientation() {
        let sig = Signature::from_rle("2o$o!", "$bo!");
        // every tromino inside a block has its inner corner filled
        let block = rle::decode("2o$2o!");
        assert!(!matches_any(&block, &[sig.clone()]));
        assert!(matches_any(&rle::decode("2o$bo!"), &[sig]));
    }

    #[test]
    fn orientation_needs_find_any() {
        let sig = Signature::from_rle("2o$o!", "$bo!");
        // the same tromino rotated by 180 degrees
        let subject = rle::decode("bo$2o!");
        assert!(!matches(&subject, &sig));

        let m = find_any(&subject, &[sig]).unwrap();
        assert_ne!(m.transform, Transform::IDENTITY);
    }

    #[test]
    fn empty_cases() {
        let empty_sig = Signature::new(CellSet::new(), rle::decode("o!"));
        let subject = rle::decode("3o!");
        assert!(!matches(&subject, &empty_sig));
        assert!(!matches_any(&subject, &[empty_sig]));
        assert!(!matches_any(&CellSet::new(), &[Signature::from_rle("o!", "")]));
        assert!(!matches_any(&subject, &[]));
    }

    #[test]
    fn unwanted_cells_are_relative_to_the_wanted_pivot() {
        // pivot at (1, 0); the unwanted cell sits one left of it and one row down
        let sig = Signature::from_rle("b2o!", "$o!");
        assert!(matches(&rle::decode("b2o!"), &sig));
        assert!(!matches(&rle::decode("b2o$o!"), &sig));
        assert!(matches(&rle::decode("b2o$bo!"), &sig));
    }
}
