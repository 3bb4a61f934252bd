use crate::catalog::Family;
use crate::core::bounds::BoundingBox;
use crate::core::cell_set::CellSet;
use crate::life::evolve;
use crate::object::meta::{Meta, ObjectClass};

/// What a listing or description layer may ask about an object.
///
/// Implementors provide the tag, the cells and (usually cached) catalog lookups; everything
/// else is derived.
pub trait Workable {
    fn meta(&self) -> &Meta;

    fn cell_set(&self) -> &CellSet;

    /// Whether the catalog rule for `family` fires on this object.
    fn is_family(&self, family: Family) -> bool;

    fn class(&self) -> ObjectClass {
        self.meta().class()
    }

    fn still_life(&self) -> bool {
        self.class() == ObjectClass::StillLife
    }

    fn oscillator(&self) -> bool {
        self.class() == ObjectClass::Oscillator
    }

    fn spaceship(&self) -> bool {
        self.class() == ObjectClass::Spaceship
    }

    fn growing(&self) -> bool {
        self.class() == ObjectClass::Growing
    }

    fn oversized(&self) -> bool {
        self.class() == ObjectClass::Oversized
    }

    fn period(&self) -> Option<u32> {
        self.meta().period()
    }

    /// Population as recorded in the tag (still lifes only).
    fn cell_count(&self) -> Option<u32> {
        self.meta().cell_count()
    }

    /// Every family whose rule fires, in catalog order.
    fn families(&self) -> Vec<Family> {
        Family::ALL
            .into_iter()
            .filter(|&f| self.is_family(f))
            .collect()
    }

    fn eater2_variant(&self) -> bool {
        self.is_family(Family::Eater2Variant)
    }

    fn eater2_precursor(&self) -> bool {
        self.is_family(Family::Eater2Precursor)
    }

    fn beacon_based(&self) -> bool {
        self.is_family(Family::BeaconBased)
    }

    fn candlefrobra_variant(&self) -> bool {
        self.is_family(Family::CandlefrobraVariant)
    }

    fn bipole_variant(&self) -> bool {
        self.is_family(Family::BipoleVariant)
    }

    fn test_tube_baby_variant(&self) -> bool {
        self.is_family(Family::TestTubeBabyVariant)
    }

    fn spark_coil_variant(&self) -> bool {
        self.is_family(Family::SparkCoilVariant)
    }

    /// The state `generations` steps ahead, for frame rendering.
    fn evolve(&self, generations: usize) -> CellSet {
        evolve::evolve(self.cell_set(), generations)
    }

    /// Bounds of the first `generations` states, for laying out frames.
    fn bounding_box(&self, generations: usize) -> Option<BoundingBox> {
        evolve::bounding_box(self.cell_set(), generations)
    }
}
