//! Decoding, simulating and classifying small Game of Life objects named by apgcodes.
//!
//! Layers, bottom up: [`core`] geometry, [`codec`] decoders, [`life`] evolution, [`search`]
//! symmetry-invariant matching, [`catalog`] named signatures and [`object`] the
//! per-object predicates built on them.

pub mod catalog;
pub mod codec;
pub mod core;
pub mod error;
pub mod life;
pub mod object;
pub mod search;
