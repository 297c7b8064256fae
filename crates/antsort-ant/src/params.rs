//! Tunable parameters shared by every ant in a simulation.

use antsort_core::{Color, InvalidParameterError};
use antsort_grid::KernelView;

/// How the perceived fraction treats the ant's own cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FractionMode {
    /// Count every cell of the window, focal cell included, and divide by
    /// the window size.
    #[default]
    Inclusive,
    /// Count only the cells around the focal cell and divide by the window
    /// size minus one. A `1 × 1` window perceives `0.0`.
    ExcludeFocal,
}

/// Pickup/dropoff tunables.
///
/// Constructed through [`AntParams::new`], which rejects out-of-domain
/// values; the fields are read-only afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AntParams {
    k1: f64,
    k2: f64,
    mode: FractionMode,
}

impl AntParams {
    /// Validate and build.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `k1` is not finite or not strictly positive
    /// - `k2` is not finite or outside `[0, 1]`
    pub fn new(k1: f64, k2: f64) -> Result<Self, InvalidParameterError> {
        if !k1.is_finite() || k1 <= 0.0 {
            return Err(InvalidParameterError::new(
                "k1",
                format!("must be finite and > 0, got {k1}"),
            ));
        }
        if !k2.is_finite() || !(0.0..=1.0).contains(&k2) {
            return Err(InvalidParameterError::new(
                "k2",
                format!("must lie in [0, 1], got {k2}"),
            ));
        }
        Ok(Self {
            k1,
            k2,
            mode: FractionMode::Inclusive,
        })
    }

    /// Set the fraction mode (default: [`FractionMode::Inclusive`]).
    pub fn with_mode(mut self, mode: FractionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Pickup sensitivity.
    pub fn k1(&self) -> f64 {
        self.k1
    }

    /// Dropoff saturation threshold.
    pub fn k2(&self) -> f64 {
        self.k2
    }

    /// Active fraction mode.
    pub fn mode(&self) -> FractionMode {
        self.mode
    }

    /// Fraction of `view` holding `color`, under the active mode.
    pub fn perceived_fraction(&self, view: &KernelView<'_>, color: Color) -> f64 {
        match self.mode {
            FractionMode::Inclusive => view.perceived_fraction(color),
            FractionMode::ExcludeFocal => view.perceived_fraction_excluding_focal(color),
        }
    }

    /// Probability of picking up an object when a fraction `f` of the
    /// window shares its color: `(k1 / (k1 + f))²`.
    pub fn pickup_probability(&self, f: f64) -> f64 {
        let ratio = self.k1 / (self.k1 + f);
        ratio * ratio
    }

    /// Probability of dropping the load when a fraction `f` of the window
    /// shares its color: `2f` below `k2`, certain at or above it.
    pub fn dropoff_probability(&self, f: f64) -> f64 {
        if f < self.k2 {
            2.0 * f
        } else {
            1.0
        }
    }
}
