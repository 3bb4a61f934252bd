//! Exemplar tables for the signature catalog.
//!
//! Each entry is `(alive, dead)`: two RLE bodies drawn on the same origin. The first live
//! cell of `alive` is the anchor the matcher aligns with subject cells.

use crate::catalog::Family;

pub(crate) struct RuleLiteral {
    pub family: Family,
    /// Meta tag the subject must carry (or be untagged) for the rule to apply.
    pub gate: Option<&'static str>,
    pub exemplars: &'static [(&'static str, &'static str)],
}

const EATER2_VARIANTS: &[(&str, &str)] = &[
    // canonical
    ("$b2obo$b2ob2o2$b2obo$2bo!", "6o$o2bobo$o2bo$6o$o2bo$2obo!"),
    // smallest bounding box
    ("$b2obo$b2obo$5bo$b2obo$2bo!", "5o$o2bobo$o2bobo$5o$o2bo$2obo!"),
    // hedonismbot
    ("4bo$b2o2bo$b2obo$4bo$ob2o$bo!", "4o$o2b2o$o2bobo$4obo$bo2b2o$2b3o!"),
    // thinker
    ("4bo$b2o2bo$b2obo$4bo$b2obo$bo!", "4o$o2b2o$o2bobo$4obo$o2bobo$ob2o!"),
    // bored
    ("4bo$b2o2bo$b2obo$4bo$b2obo$2bo!", "4o$o2b2o$o2bobo$4obo$o2bobo$2obo!"),
    // jordan
    ("4bo$b2o2bo$b2obo$4bo$b2obo!", "4o$o2b2o$o2bobo$4obo$o2bobo$b2o!"),
    // triskelion
    ("4bo$b2o2bo$b2obo$4bo$b2o$3bo!", "4o$o2b2o$o2bobo$4obo$o2b2o$b2o!"),
    // boulders
    ("$b2obo$b2ob2o2$ob2o$2bo!", "6o$o2bobo$o2bo$6o$bo2bo$bob2o!"),
    // waiter
    ("$b2obo$b2obo$5bo$ob2o$2bo!", "5o$o2bobo$o2bobo$5o$bo2bo$bob2o!"),
];

const EATER2_PRECURSORS: &[(&str, &str)] = &[
    // canonical
    ("$4bo$4b2o2$b2obo$2bo!", "3b3o$3bobo$3bo$6o$o2bo$2obo!"),
    // smallest bounding box
    ("$4bo$4bo$5bo$b2obo$2bo!", "3b2o$3bobo$3bobo$5o$o2bo$2obo!"),
    // hedonismbot
    ("4bo$5bo$4bo$4bo$ob2o$bo!", "3bo$3b2o$3bobo$4obo$bo2b2o$2b3o!"),
    // thinker
    ("4bo$5bo$4bo$4bo$b2obo$bo!", "3bo$3b2o$3bobo$4obo$o2bobo$ob2o!"),
    // bored
    ("4bo$5bo$4bo$4bo$b2obo$2bo!", "3bo$3b2o$3bobo$4obo$o2bobo$2obo!"),
    // jordan
    ("4bo$5bo$4bo$4bo$b2obo!", "3bo$3b2o$3bobo$4obo$o2bobo$b2o!"),
    // triskelion
    ("4bo$5bo$4bo$4bo$b2o$3bo!", "3bo$3b2o$3bobo$4obo$o2b2o$b2o!"),
    // boulders
    ("$4bo$4b2o2$ob2o$2bo!", "3b3o$3bobo$3bo$6o$bo2bo$bob2o!"),
    // waiter
    ("$4bo$4bo$5bo$ob2o$2bo!", "3b2o$3bobo$3bobo$5o$bo2bo$bob2o!"),
];

// The oscillator tables below list the rotor of the named oscillator together with every
// cell within reach of it, once per phase, since an apgcode may show any phase.

const BEACON: &[(&str, &str)] = &[
    // both blocks full
    ("2o$2o$2b2o$2b2o!", "2bo$2b2o$2o$bo!"),
    // inner corners off
    ("2o$o$3bo$2b2o!", "2bo$b3o$3o$bo!"),
];

const BIPOLE: &[(&str, &str)] = &[
    ("bo$o$bobo$4bo$3bo!", "2b2o$b4o$obobo$4o$b2o!"),
    ("bo$obo2$2bobo$3bo!", "2b2o$bob2o$5o$2obo$b2o!"),
];

const SPARK_COIL: &[(&str, &str)] = &[
    ("o4bo$bo2bo$bo2bo$bo2bo$o4bo!", "b4o$ob2obo$ob2obo$ob2obo$b4o!"),
    ("o4bo$bo2bo$b4o$bo2bo$o4bo!", "b4o$ob2obo$o4bo$ob2obo$b4o!"),
];

const TEST_TUBE_BABY: &[(&str, &str)] = &[
    ("o4bo$bo2bo$bo2bo$bo2bo$2b2o!", "b4o$ob2obo$ob2obo$ob2obo$2o2b2o!"),
    ("o4bo$bo2bo$b4o$bo2bo$2b2o!", "b4o$ob2obo$o4bo$ob2obo$2o2b2o!"),
];

const CANDLEFROBRA: &[(&str, &str)] = &[
    ("$4bo$ob2o$bo$o!", "5o$4o$bo2bo$ob3o$b4o$3o!"),
    ("$3b2o$4o$b2o$o!", "5o$3o$4bo$o2b2o$b4o$3o!"),
    ("$bob2o$o$3bo$2o!", "5o$obo$b4o$3obo$2b3o$3o!"),
];

pub(crate) const RULES: &[RuleLiteral] = &[
    RuleLiteral {
        family: Family::Eater2Variant,
        gate: None,
        exemplars: EATER2_VARIANTS,
    },
    RuleLiteral {
        family: Family::Eater2Precursor,
        gate: None,
        exemplars: EATER2_PRECURSORS,
    },
    RuleLiteral {
        family: Family::BeaconBased,
        gate: Some("xp2"),
        exemplars: BEACON,
    },
    RuleLiteral {
        family: Family::CandlefrobraVariant,
        gate: Some("xp3"),
        exemplars: CANDLEFROBRA,
    },
    RuleLiteral {
        family: Family::BipoleVariant,
        gate: Some("xp2"),
        exemplars: BIPOLE,
    },
    RuleLiteral {
        family: Family::TestTubeBabyVariant,
        gate: Some("xp2"),
        exemplars: TEST_TUBE_BABY,
    },
    RuleLiteral {
        family: Family::SparkCoilVariant,
        gate: Some("xp2"),
        exemplars: SPARK_COIL,
    },
];
