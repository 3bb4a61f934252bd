//! Symmetry-invariant sub-pattern search.
//!
//! A [`signature::Signature`] is a set of cells that must be alive plus a set that must be
//! dead. [`matcher`] looks for it at every translation of a subject, and over the 8
//! orientations of the subject.

pub mod matcher;
pub mod signature;

pub use matcher::{find_any, matches, matches_any, Match};
pub use signature::Signature;
