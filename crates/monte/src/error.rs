//! Shared simulator error type.

use std::fmt;

/// The one failure the simulators can report: a configuration rejected before
/// the first trial runs. Raised eagerly, never caught inside the library.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SimError {
    InvalidConfig { reason: String },
}

impl SimError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { reason } => write!(f, "invalid configuration: {reason}"),
        }
    }
}

impl std::error::Error for SimError {}
