use crate::codec::rle;
use crate::core::cell_set::CellSet;
use crate::core::coord::Coord;

/// A sub-pattern to look for: cells that must be alive (`wanted`) and cells that must be
/// dead (`unwanted`), both drawn in the same frame.
///
/// Offsets are taken relative to the pivot of `wanted`, i.e. the first cell of its literal.
#[derive(Debug, Clone)]
pub struct Signature {
    wanted: CellSet,
    unwanted: CellSet,
}

impl Signature {
    pub fn new(wanted: CellSet, unwanted: CellSet) -> Self {
        Self { wanted, unwanted }
    }

    /// Both halves given as RLE bodies sharing one origin.
    pub fn from_rle(wanted: &str, unwanted: &str) -> Self {
        Self::new(rle::decode(wanted), rle::decode(unwanted))
    }

    #[inline]
    pub fn wanted(&self) -> &CellSet {
        &self.wanted
    }

    #[inline]
    pub fn unwanted(&self) -> &CellSet {
        &self.unwanted
    }

    #[inline]
    pub fn pivot(&self) -> Option<Coord> {
        self.wanted.pivot()
    }

    /// A signature whose live and dead cells overlap can never match.
    pub fn is_consistent(&self) -> bool {
        !self.wanted.iter().any(|&c| self.unwanted.contains(c))
    }
}
