//! Stochastic tug-of-war over a marker on a line.
//!
//! Robot 1 pulls the marker in +x, robot 2 in -x, alternating uniform [0, 1)
//! pulls until the marker passes ±0.5. The sweep searches the starting offset
//! that makes the match closest to even.

use crate::error::SimError;
use crate::sample::UniformSource;

/// Outcome of a single game. A game always terminates: each round moves the
/// marker by a net random amount and the boundary is absorbed with
/// probability 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winner {
    Robot1,
    Robot2,
}

/// Play one game from `start`. Robot 1 moves first.
pub fn play<S: UniformSource>(start: f64, source: &mut S) -> Winner {
    let mut marker = start;
    loop {
        marker += source.uniform(0.0, 1.0);
        if marker > 0.5 {
            return Winner::Robot1;
        }
        marker -= source.uniform(0.0, 1.0);
        if marker < -0.5 {
            return Winner::Robot2;
        }
    }
}

/// Sweep configuration: starting offsets `0, -decrement, ...` down to -1.0,
/// with `iterations` games played at each offset.
#[derive(Clone, Copy, Debug)]
pub struct TugSweep {
    pub decrement: f64,
    pub iterations: u64,
}

/// The offset whose robot-1 : robot-2 win ratio came closest to even.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TugReport {
    pub start: f64,
    pub ratio: f64,
}

impl TugSweep {
    pub fn run<S: UniformSource>(&self, source: &mut S) -> Result<TugReport, SimError> {
        if self.iterations == 0 {
            return Err(SimError::invalid("iteration count must be at least 1"));
        }
        if !(self.decrement > 0.0) {
            return Err(SimError::invalid("decrement must be positive"));
        }
        let mut best = TugReport {
            start: 0.0,
            ratio: f64::INFINITY,
        };
        let mut start = 0.0;
        while start >= -1.0 {
            let mut wins1 = 0u64;
            let mut wins2 = 0u64;
            for _ in 0..self.iterations {
                match play(start, source) {
                    Winner::Robot1 => wins1 += 1,
                    Winner::Robot2 => wins2 += 1,
                }
            }
            // Undefined ratio (no robot-2 wins) can never beat a finite one.
            let ratio = if wins2 > 0 {
                wins1 as f64 / wins2 as f64
            } else {
                f64::INFINITY
            };
            if (1.0 - ratio).abs() < (1.0 - best.ratio).abs() {
                best = TugReport { start, ratio };
            }
            start -= self.decrement;
        }
        Ok(best)
    }
}
