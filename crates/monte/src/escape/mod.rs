//! Circle-escape probability over a rectangular box.
//!
//! Model
//! - Each trial draws two independent uniform points in the box, forms the
//!   circle whose diameter is the segment between them, and records whether
//!   that circle escapes the box (is not fully contained).
//! - The estimate is `escaped / iterations`, a plain ratio without smoothing.
//!   The tracked event is escape, not containment; callers wanting the
//!   containment probability take the complement themselves.
//!
//! Determinism
//! - All randomness flows through the injected `UniformSource`; identical
//!   configuration and identical draw sequences give bit-identical counts.

use crate::error::SimError;
use crate::geom::{Box2, Circle};
use crate::sample::{PointSampler, UniformSource};
use std::fmt;

/// One full experiment: domain box plus trial count.
///
/// Instances are plain configuration and re-runnable; each `run` consumes its
/// own source and keeps no state behind.
#[derive(Clone, Copy, Debug)]
pub struct EscapeSimulator {
    domain: Box2,
    iterations: u64,
}

/// Aggregates of a finished run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EscapeReport {
    pub iterations: u64,
    pub escaped: u64,
}

impl EscapeReport {
    /// Empirical probability that the spanning circle escaped the box.
    #[inline]
    pub fn probability(&self) -> f64 {
        self.escaped as f64 / self.iterations as f64
    }
}

impl fmt::Display for EscapeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The probability after {} iterations is {:.10}",
            self.iterations,
            self.probability()
        )
    }
}

impl EscapeSimulator {
    /// Box corners as `(x1, y1)` lower-left and `(x2, y2)` upper-right.
    /// Corner ordering is the caller's responsibility, as with `Box2`.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64, iterations: u64) -> Self {
        Self {
            domain: Box2::new(x1, y1, x2, y2),
            iterations,
        }
    }

    pub fn from_box(domain: Box2, iterations: u64) -> Self {
        Self { domain, iterations }
    }

    /// Run all trials against `source`.
    ///
    /// Fails with `SimError::InvalidConfig` before any draw when the iteration
    /// count is zero: zero trials is a configuration mistake, not an empty run.
    pub fn run<S: UniformSource>(&self, source: S) -> Result<EscapeReport, SimError> {
        if self.iterations == 0 {
            return Err(SimError::invalid("iteration count must be at least 1"));
        }
        let mut sampler = PointSampler::new(self.domain, source);
        let mut escaped: u64 = 0;
        for _ in 0..self.iterations {
            let p1 = sampler.sample();
            let p2 = sampler.sample();
            let circle = Circle::spanning(p1, p2);
            if !self.domain.contains_circle(&circle) {
                escaped += 1;
            }
        }
        Ok(EscapeReport {
            iterations: self.iterations,
            escaped,
        })
    }
}
