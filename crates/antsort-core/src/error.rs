//! Error types for the antsort simulation.
//!
//! Two error kinds exist, both detected before any simulation state is
//! mutated: [`CapacityError`] when the grid cannot hold what was asked of
//! it, and [`InvalidParameterError`] for out-of-domain tunables. Fallible
//! entry points return the umbrella [`AcaError`].

use thiserror::Error;

/// The grid is too small for the requested objects or ants.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("cannot fit {requested} {what} on a grid of {available} cells")]
pub struct CapacityError {
    /// What overflowed (`"objects"` or `"ants"`).
    pub what: &'static str,
    /// How many were requested.
    pub requested: u64,
    /// Number of cells in the grid.
    pub available: u64,
}

/// A tunable or run parameter is outside its domain.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid parameter `{name}`: {reason}")]
pub struct InvalidParameterError {
    /// Parameter name, as spelled in the configuration.
    pub name: &'static str,
    /// Human-readable description of the violated constraint.
    pub reason: String,
}

impl InvalidParameterError {
    /// Build an error for parameter `name`.
    pub fn new(name: &'static str, reason: impl Into<String>) -> Self {
        Self {
            name,
            reason: reason.into(),
        }
    }
}

/// Any error surfaced by simulation construction or run entry.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AcaError {
    /// See [`CapacityError`].
    #[error(transparent)]
    Capacity(#[from] CapacityError),
    /// See [`InvalidParameterError`].
    #[error(transparent)]
    InvalidParameter(#[from] InvalidParameterError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_error_display() {
        let err = CapacityError {
            what: "objects",
            requested: 30,
            available: 25,
        };
        assert_eq!(
            err.to_string(),
            "cannot fit 30 objects on a grid of 25 cells"
        );
    }

    #[test]
    fn invalid_parameter_display() {
        let err = InvalidParameterError::new("k1", "must be finite and > 0, got 0");
        let msg = format!("{err}");
        assert!(msg.contains("`k1`"));
        assert!(msg.contains("got 0"));
    }

    #[test]
    fn umbrella_is_transparent() {
        let inner = InvalidParameterError::new("k2", "must lie in [0, 1]");
        let err: AcaError = inner.clone().into();
        assert_eq!(err.to_string(), inner.to_string());
        match err {
            AcaError::InvalidParameter(e) => assert_eq!(e.name, "k2"),
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }

    #[test]
    fn umbrella_exposes_source() {
        use std::error::Error;
        let err: AcaError = CapacityError {
            what: "ants",
            requested: 10,
            available: 4,
        }
        .into();
        // transparent forwards source() to the inner error, which has none.
        assert!(err.source().is_none());
        assert!(err.to_string().contains("10 ants"));
    }
}
