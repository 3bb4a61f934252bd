//! Catalogued objects and the questions a presentation layer asks about them.

pub mod life_object;
pub mod meta;
pub mod workable;

pub use life_object::LifeObject;
pub use meta::{Meta, ObjectClass};
pub use workable::Workable;
