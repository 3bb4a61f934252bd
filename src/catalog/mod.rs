//! Named recognisers for recurring sub-configurations.
//!
//! Each [`Family`] owns a [`CatalogRule`]: a list of signatures decoded once from the
//! literal tables in [`literals`], and an optional meta gate. The whole table lives in a
//! process-wide [`Catalog`] built on first use and never mutated afterwards.

mod literals;

use std::fmt;
use std::sync::LazyLock;

use serde::Serialize;
use tracing::debug;

use crate::core::cell_set::CellSet;
use crate::search::matcher::{find_any, Match};
use crate::search::signature::Signature;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    Eater2Variant,
    Eater2Precursor,
    BeaconBased,
    CandlefrobraVariant,
    BipoleVariant,
    TestTubeBabyVariant,
    SparkCoilVariant,
}

impl Family {
    pub const ALL: [Family; 7] = [
        Family::Eater2Variant,
        Family::Eater2Precursor,
        Family::BeaconBased,
        Family::CandlefrobraVariant,
        Family::BipoleVariant,
        Family::TestTubeBabyVariant,
        Family::SparkCoilVariant,
    ];

    /// Human label, e.g. "eater 2 variant".
    pub fn label(self) -> &'static str {
        use Family::*;
        match self {
            Eater2Variant => "eater 2 variant",
            Eater2Precursor => "eater 2 precursor",
            BeaconBased => "beacon-based oscillator",
            CandlefrobraVariant => "candlefrobra variant",
            BipoleVariant => "bipole variant",
            TestTubeBabyVariant => "test tube baby variant",
            SparkCoilVariant => "spark coil variant",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One named rule: signatures plus the meta tag it is restricted to.
#[derive(Debug, Clone)]
pub struct CatalogRule {
    family: Family,
    gate: Option<&'static str>,
    signatures: Vec<Signature>,
}

impl CatalogRule {
    #[inline]
    pub fn family(&self) -> Family {
        self.family
    }

    #[inline]
    pub fn gate(&self) -> Option<&'static str> {
        self.gate
    }

    #[inline]
    pub fn signatures(&self) -> &[Signature] {
        &self.signatures
    }

    /// An untagged subject is always admitted; a tagged one only if it carries the gate.
    pub fn admits(&self, meta: &str) -> bool {
        match self.gate {
            Some(gate) => meta.is_empty() || meta == gate,
            None => true,
        }
    }

    /// Where the rule fires on `cells`, if it does. Gated-out subjects are never searched.
    pub fn find(&self, meta: &str, cells: &CellSet) -> Option<Match> {
        if !self.admits(meta) {
            return None;
        }
        find_any(cells, &self.signatures)
    }

    pub fn evaluate(&self, meta: &str, cells: &CellSet) -> bool {
        self.find(meta, cells).is_some()
    }
}

/// All rules, in [`Family::ALL`] order.
#[derive(Debug)]
pub struct Catalog {
    rules: Vec<CatalogRule>,
}

impl Catalog {
    fn build() -> Self {
        let rules: Vec<CatalogRule> = literals::RULES
            .iter()
            .map(|lit| CatalogRule {
                family: lit.family,
                gate: lit.gate,
                signatures: lit
                    .exemplars
                    .iter()
                    .map(|&(alive, dead)| Signature::from_rle(alive, dead))
                    .collect(),
            })
            .collect();

        debug!(
            rules = rules.len(),
            signatures = rules.iter().map(|r| r.signatures.len()).sum::<usize>(),
            "built signature catalog"
        );
        Self { rules }
    }

    pub fn rules(&self) -> &[CatalogRule] {
        &self.rules
    }

    pub fn rule(&self, family: Family) -> &CatalogRule {
        // `RULES` is declared in `Family::ALL` order; see the `table_order` test.
        &self.rules[family as usize]
    }
}

static CATALOG: LazyLock<Catalog> = LazyLock::new(Catalog::build);

/// The process-wide catalog.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}
