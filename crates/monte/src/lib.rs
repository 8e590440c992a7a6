//! Monte-Carlo and combinatorial simulation experiments.
//!
//! Purpose
//! - A handful of small, independent estimators sharing one idiom: draw
//!   samples from a seeded source, accumulate a counter, report an empirical
//!   probability.
//! - The circle-escape estimator (`escape`) is the most structured piece:
//!   it has the only multi-entity data model (`geom`) and the one reusable
//!   sampling abstraction (`sample::PointSampler`). The remaining modules are
//!   variations of the same loop-and-accumulate shape.
//!
//! Modules
//! - `geom`: points, boxes, circles, and the containment predicate.
//! - `sample`: uniform/normal draw sources and the rectangular point sampler.
//! - `escape`: probability that a random chord's spanning circle escapes a box.
//! - `expelled`: deterministic expelled-number sequence rows.
//! - `tug`: stochastic tug-of-war game and offset sweep.
//! - `crossing`: 2D/3D grid single-cross estimators.

pub mod crossing;
pub mod error;
pub mod escape;
pub mod expelled;
pub mod geom;
pub mod sample;
pub mod tug;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::crossing::{
        cross_probability_2d, cross_probability_3d, sweep_2d, sweep_3d, CrossReport,
    };
    pub use crate::error::SimError;
    pub use crate::escape::{EscapeReport, EscapeSimulator};
    pub use crate::expelled::{expulsion_rows, next_row, row_of};
    pub use crate::geom::{half_distance, Box2, Circle};
    pub use crate::sample::{seeded, GaussianSource, PointSampler, ScriptedSource, UniformSource};
    pub use crate::tug::{play, TugReport, TugSweep, Winner};
    pub use nalgebra::Vector2 as Vec2;
}
