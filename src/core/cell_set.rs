use std::collections::hash_set;

use rustc_hash::FxHashSet;

use crate::core::bounds::BoundingBox;
use crate::core::coord::Coord;
use crate::core::transform::Transform;

/// A finite set of live cells.
///
/// Besides the cells themselves we remember the *pivot*: the first cell that was ever
/// inserted. Decoders insert in scan order, so for a decoded signature the pivot is the
/// first cell of the literal, which is what the matcher anchors on. The pivot is not part
/// of equality.
#[derive(Debug, Clone, Default)]
pub struct CellSet {
    cells: FxHashSet<Coord>,
    pivot: Option<Coord>,
}

impl CellSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            cells: FxHashSet::with_capacity_and_hasher(n, Default::default()),
            pivot: None,
        }
    }

    /// Inserts a live cell. Returns `false` if it was already alive.
    pub fn insert(&mut self, c: Coord) -> bool {
        if self.pivot.is_none() {
            self.pivot = Some(c);
        }
        self.cells.insert(c)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.cells.contains(&c)
    }

    #[inline]
    pub fn pivot(&self) -> Option<Coord> {
        self.pivot
    }

    pub fn iter(&self) -> hash_set::Iter<'_, Coord> {
        self.cells.iter()
    }

    /// Cells in row-major order (y, then x). Handy for deterministic output.
    pub fn sorted(&self) -> Vec<Coord> {
        let mut v: Vec<Coord> = self.cells.iter().copied().collect();
        v.sort_unstable_by_key(|c| (c.y, c.x));
        v
    }

    pub fn bounds(&self) -> Option<BoundingBox> {
        BoundingBox::enclosing(self.cells.iter().copied())
    }

    /// Applies `t` and then shifts by `offset`.
    pub fn transformed(&self, t: Transform, offset: Coord) -> CellSet {
        CellSet {
            cells: self.cells.iter().map(|&c| t.apply(c) + offset).collect(),
            pivot: self.pivot.map(|p| t.apply(p) + offset),
        }
    }

    pub fn translated(&self, delta: Coord) -> CellSet {
        self.transformed(Transform::IDENTITY, delta)
    }

    /// Translated so the bounding box starts at the origin.
    pub fn normalized(&self) -> CellSet {
        match self.bounds() {
            Some(bb) => self.translated(-bb.min_corner()),
            None => CellSet::new(),
        }
    }

    /// Equal up to translation.
    pub fn same_shape(&self, other: &CellSet) -> bool {
        self.len() == other.len() && self.normalized() == other.normalized()
    }
}

impl PartialEq for CellSet {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Eq for CellSet {}

impl FromIterator<Coord> for CellSet {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        let mut set = CellSet::new();
        for c in iter {
            set.insert(c);
        }
        set
    }
}

impl Extend<Coord> for CellSet {
    fn extend<I: IntoIterator<Item = Coord>>(&mut self, iter: I) {
        for c in iter {
            self.insert(c);
        }
    }
}

impl<'a> IntoIterator for &'a CellSet {
    type Item = &'a Coord;
    type IntoIter = hash_set::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(cells: &[(i32, i32)]) -> CellSet {
        cells.iter().map(|&c| Coord::from(c)).collect()
    }

    #[test]
    fn pivot_is_first_insert_and_survives_duplicates() {
        let mut s = CellSet::new();
        assert_eq!(s.pivot(), None);
        s.insert(Coord::new(2, 1));
        s.insert(Coord::new(0, 0));
        assert!(!s.insert(Coord::new(2, 1)));
        assert_eq!(s.len(), 2);
        assert_eq!(s.pivot(), Some(Coord::new(2, 1)));
    }

    #[test]
    fn equality_ignores_pivot() {
        let a = set(&[(0, 0), (1, 0)]);
        let b = set(&[(1, 0), (0, 0)]);
        assert_ne!(a.pivot(), b.pivot());
        assert_eq!(a, b);
    }

    #[test]
    fn normalized_shape_comparison() {
        let a = set(&[(5, 5), (6, 5), (6, 6)]);
        let b = set(&[(-1, 0), (0, 0), (0, 1)]);
        assert!(a.same_shape(&b));
        assert!(!a.same_shape(&set(&[(0, 0), (1, 0), (2, 0)])));
        assert_eq!(a.normalized().bounds().unwrap().min_corner(), Coord::ORIGIN);
        assert!(CellSet::new().normalized().is_empty());
    }

    #[test]
    fn translation_moves_pivot() {
        let a = set(&[(1, 1), (2, 1)]);
        let t = a.translated(Coord::new(-1, 3));
        assert_eq!(t.pivot(), Some(Coord::new(0, 4)));
        assert!(t.contains(Coord::new(1, 4)));
    }
}
