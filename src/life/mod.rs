//! The automaton itself: the rule ([`rule`]) and stepping a cell set through time
//! ([`evolve`]). Everything here works on the unbounded plane.

pub mod evolve;
pub mod rule;

pub use evolve::{bounding_box, evolve, generations, step};
pub use rule::LifeRule;
