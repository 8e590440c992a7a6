//! Grid-crossing probability estimators in 2D and 3D.
//!
//! Model
//! - A segment of length `d` is dropped with a uniform origin inside the unit
//!   cell and a uniform angle (2D) or an isotropic direction from normalized
//!   standard-normal components (3D).
//! - A trial counts when the segment crosses exactly one grid line (2D) or
//!   exactly one cell face (3D); crossings are detected by comparing the
//!   floors of the endpoint coordinates per axis.
//! - The sweeps scan segment lengths and report the length with the highest
//!   single-cross frequency.

use crate::error::SimError;
use crate::sample::{GaussianSource, UniformSource};

/// Best length found by a sweep, with its estimated probability.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CrossReport {
    pub length: f64,
    pub probability: f64,
}

/// Probability that a random segment of `length` crosses exactly one grid
/// line of the unit grid.
pub fn cross_probability_2d<S: UniformSource>(
    length: f64,
    trials: u64,
    source: &mut S,
) -> Result<f64, SimError> {
    if trials == 0 {
        return Err(SimError::invalid("trial count must be at least 1"));
    }
    let mut crossings: u64 = 0;
    for _ in 0..trials {
        let x1 = source.uniform(0.0, 1.0);
        let y1 = source.uniform(0.0, 1.0);
        let angle = source.uniform(0.0, 2.0 * std::f64::consts::PI);
        let x2 = x1 + angle.cos() * length;
        let y2 = y1 + angle.sin() * length;
        let mut crossed = 0u32;
        if x1.floor() != x2.floor() {
            crossed += 1;
        }
        if y1.floor() != y2.floor() {
            crossed += 1;
        }
        if crossed == 1 {
            crossings += 1;
        }
    }
    Ok(crossings as f64 / trials as f64)
}

/// Sweep segment lengths from 1 to sqrt(2) in steps of 0.01.
///
/// Lengths below 1 can fall entirely inside a cell and lengths beyond the
/// cell diagonal always cross, so the interesting band is [1, sqrt(2)].
pub fn sweep_2d<S: UniformSource>(trials: u64, source: &mut S) -> Result<CrossReport, SimError> {
    let mut best = CrossReport {
        length: 0.0,
        probability: 0.0,
    };
    let mut d = 1.0;
    while d <= std::f64::consts::SQRT_2 {
        let p = cross_probability_2d(d, trials, source)?;
        if p > best.probability {
            best = CrossReport {
                length: d,
                probability: p,
            };
        }
        d += 0.01;
    }
    Ok(best)
}

/// Probability that a random segment of `length` in the unit-cube grid
/// crosses into an orthogonally adjacent cell (exactly one face crossed).
pub fn cross_probability_3d<S: UniformSource + GaussianSource>(
    length: f64,
    trials: u64,
    source: &mut S,
) -> Result<f64, SimError> {
    if trials == 0 {
        return Err(SimError::invalid("trial count must be at least 1"));
    }
    let mut crossings: u64 = 0;
    for _ in 0..trials {
        let x = source.uniform(0.0, 1.0);
        let y = source.uniform(0.0, 1.0);
        let z = source.uniform(0.0, 1.0);
        let mut dx = source.standard_normal();
        let mut dy = source.standard_normal();
        let mut dz = source.standard_normal();
        let norm = (dx * dx + dy * dy + dz * dz).sqrt();
        dx /= norm;
        dy /= norm;
        dz /= norm;
        let x2 = x + length * dx;
        let y2 = y + length * dy;
        let z2 = z + length * dz;
        let mut faces = 0u32;
        if x.floor() != x2.floor() {
            faces += 1;
        }
        if y.floor() != y2.floor() {
            faces += 1;
        }
        if z.floor() != z2.floor() {
            faces += 1;
        }
        if faces == 1 {
            crossings += 1;
        }
    }
    Ok(crossings as f64 / trials as f64)
}

/// Sweep segment lengths from 0 to 1 in steps of `step`.
pub fn sweep_3d<S: UniformSource + GaussianSource>(
    step: f64,
    trials: u64,
    source: &mut S,
) -> Result<CrossReport, SimError> {
    if !(step > 0.0) {
        return Err(SimError::invalid("sweep step must be positive"));
    }
    let mut best = CrossReport {
        length: 0.0,
        probability: 0.0,
    };
    let mut d = 0.0;
    while d <= 1.0 {
        let p = cross_probability_3d(d, trials, source)?;
        if p > best.probability {
            best = CrossReport {
                length: d,
                probability: p,
            };
        }
        d += step;
    }
    Ok(best)
}
