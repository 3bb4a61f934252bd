use std::cell::RefCell;

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::catalog::{catalog, Family};
use crate::codec::{rle, wechsler};
use crate::core::cell_set::CellSet;
use crate::object::meta::Meta;
use crate::object::workable::Workable;

/// A catalogued object: its code, meta tag and live cells, plus the answers to every
/// catalog predicate asked so far.
///
/// Cells and tag are fixed at construction. The cache is private to this instance, so the
/// object is `Send` but not `Sync`; share it by handing out `&LifeObject` on one thread.
#[derive(Debug, Clone)]
pub struct LifeObject {
    code: String,
    meta: Meta,
    cells: CellSet,
    cache: RefCell<FxHashMap<Family, bool>>,
}

impl LifeObject {
    pub fn new(meta: Meta, cells: CellSet) -> Self {
        Self {
            code: meta.as_str().to_string(),
            meta,
            cells,
            cache: RefCell::new(FxHashMap::default()),
        }
    }

    /// Builds the object named by an apgcode.
    ///
    /// Still lifes, oscillators and spaceships (`xs`, `xp`, `xq`) are decoded from their
    /// Wechsler body. Every other code (`yl…`, `ov_…`, `zz_…`, `PATHOLOGICAL`) carries no
    /// cells; the whole code is kept as its tag.
    pub fn from_apgcode(code: &str) -> Self {
        let (meta, cells) = wechsler::decode(code);
        let mut obj = Self::new(Meta::new(meta), cells);
        obj.code = code.to_string();
        obj
    }

    /// An untagged object from an RLE body.
    pub fn from_rle(body: &str) -> Self {
        let mut obj = Self::new(Meta::default(), rle::decode(body));
        obj.code = body.to_string();
        obj
    }

    /// The code this object was built from.
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Families evaluated so far; mostly useful for diagnostics.
    pub fn cached_families(&self) -> Vec<Family> {
        let mut v: Vec<Family> = self.cache.borrow().keys().copied().collect();
        v.sort_unstable();
        v
    }
}

impl Workable for LifeObject {
    #[inline]
    fn meta(&self) -> &Meta {
        &self.meta
    }

    #[inline]
    fn cell_set(&self) -> &CellSet {
        &self.cells
    }

    fn is_family(&self, family: Family) -> bool {
        if let Some(&hit) = self.cache.borrow().get(&family) {
            return hit;
        }

        let hit = catalog()
            .rule(family)
            .evaluate(self.meta.as_str(), &self.cells);
        trace!(code = %self.code, %family, hit, "evaluated catalog rule");
        self.cache.borrow_mut().insert(family, hit);
        hit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apgcode_without_body() {
        let obj = LifeObject::from_apgcode("ov_p24");
        assert_eq!(obj.meta().as_str(), "ov_p24");
        assert!(obj.cell_set().is_empty());
        assert!(obj.oversized());
        assert_eq!(obj.period(), Some(24));

        let obj = LifeObject::from_apgcode("yl144_1_16_afb5f3db909e60548f086e22ee3353ac");
        assert!(obj.growing());
        assert!(obj.cell_set().is_empty());
    }

    #[test]
    fn cache_is_filled_lazily() {
        let obj = LifeObject::from_apgcode("xs4_33");
        assert!(obj.cached_families().is_empty());
        assert!(!obj.eater2_variant());
        assert_eq!(obj.cached_families(), vec![Family::Eater2Variant]);
        assert!(!obj.eater2_variant());
        assert_eq!(obj.cached_families().len(), 1);
    }

    #[test]
    fn code_is_kept() {
        assert_eq!(LifeObject::from_apgcode("xp2_7").code(), "xp2_7");
        assert_eq!(LifeObject::from_rle("3o!").code(), "3o!");
        assert!(LifeObject::from_rle("3o!").meta().is_empty());
    }
}
