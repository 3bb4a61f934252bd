use serde::Serialize;

use crate::core::coord::Coord;

/// Inclusive axis-aligned bounds of a non-empty set of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BoundingBox {
    pub xmin: i32,
    pub xmax: i32,
    pub ymin: i32,
    pub ymax: i32,
}

impl BoundingBox {
    /// The 1x1 box around a single cell.
    #[inline]
    pub fn at(c: Coord) -> Self {
        Self {
            xmin: c.x,
            xmax: c.x,
            ymin: c.y,
            ymax: c.y,
        }
    }

    /// Smallest box around `cells`, or `None` if there are none.
    pub fn enclosing(cells: impl IntoIterator<Item = Coord>) -> Option<Self> {
        let mut it = cells.into_iter();
        let first = it.next()?;
        let mut bb = Self::at(first);
        for c in it {
            bb.include(c);
        }
        Some(bb)
    }

    #[inline]
    pub fn include(&mut self, c: Coord) {
        self.xmin = self.xmin.min(c.x);
        self.xmax = self.xmax.max(c.x);
        self.ymin = self.ymin.min(c.y);
        self.ymax = self.ymax.max(c.y);
    }

    #[inline]
    pub fn merge(self, other: BoundingBox) -> BoundingBox {
        BoundingBox {
            xmin: self.xmin.min(other.xmin),
            xmax: self.xmax.max(other.xmax),
            ymin: self.ymin.min(other.ymin),
            ymax: self.ymax.max(other.ymax),
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.xmax.saturating_sub(self.xmin).saturating_add(1)
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.ymax.saturating_sub(self.ymin).saturating_add(1)
    }

    /// Top-left corner.
    #[inline]
    pub fn min_corner(&self) -> Coord {
        Coord::new(self.xmin, self.ymin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enclosing_and_merge() {
        let bb = BoundingBox::enclosing([Coord::new(1, 2), Coord::new(-3, 5), Coord::new(0, 0)])
            .unwrap();
        assert_eq!(
            bb,
            BoundingBox {
                xmin: -3,
                xmax: 1,
                ymin: 0,
                ymax: 5
            }
        );
        assert_eq!(bb.width(), 5);
        assert_eq!(bb.height(), 6);

        let merged = bb.merge(BoundingBox::at(Coord::new(4, -1)));
        assert_eq!(merged.xmax, 4);
        assert_eq!(merged.ymin, -1);
        assert!(BoundingBox::enclosing(std::iter::empty()).is_none());
    }
}
