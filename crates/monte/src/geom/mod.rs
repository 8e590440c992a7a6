//! 2D geometry for the box/circle experiments.
//!
//! - `Box2`: axis-aligned rectangle from two corner points.
//! - `Circle`: center plus radius, derived per trial from two sampled points.
//! - `half_distance`: half the Euclidean distance between two points.

mod types;

pub use types::{half_distance, Box2, Circle};

#[cfg(test)]
mod tests;
