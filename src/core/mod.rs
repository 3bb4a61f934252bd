//! Geometry primitives shared by every other layer:
//!
//! - [`coord`]: integer cell coordinates and the Moore neighbourhood.
//! - [`cell_set`]: a finite set of live cells that remembers its first-inserted cell.
//! - [`bounds`]: inclusive bounding boxes.
//! - [`transform`]: the 8 rotations/reflections of the square.

pub mod bounds;
pub mod cell_set;
pub mod coord;
pub mod transform;
