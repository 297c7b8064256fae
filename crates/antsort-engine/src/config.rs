//! Simulation configuration and validation.
//!
//! [`AcaConfig`] is the construction input for a [`Simulation`](crate::Simulation).
//! [`validate()`](AcaConfig::validate) checks every parameter and capacity
//! constraint without allocating the grid, so a rejected configuration
//! never produces partial state.

use antsort_ant::{AntParams, FractionMode};
use antsort_core::{AcaError, CapacityError, Color, InvalidParameterError};
use antsort_grid::Grid;

/// Complete configuration for constructing a simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct AcaConfig {
    /// Grid extent along `x`.
    pub width: usize,
    /// Grid extent along `y`.
    pub height: usize,
    /// Object count per color; `colors[i]` objects get color `i + 1`.
    pub colors: Vec<usize>,
    /// Number of ants.
    pub num_ants: usize,
    /// Kernel radius: each ant sees a `(2r+1) × (2r+1)` window, clipped at
    /// the grid edges.
    pub radius: u32,
    /// Pickup sensitivity; must be finite and > 0.
    pub k1: f64,
    /// Dropoff saturation threshold; must lie in `[0, 1]`.
    pub k2: f64,
    /// Whether the ant's own cell counts toward the perceived fraction.
    pub fraction_mode: FractionMode,
    /// RNG seed. Equal configs with equal seeds replay identically.
    pub seed: u64,
}

impl Default for AcaConfig {
    /// 200×200 grid, 100 red and 100 blue objects, 500 ants, radius 4,
    /// `k1 = k2 = 0.1`.
    fn default() -> Self {
        Self {
            width: 200,
            height: 200,
            colors: vec![100, 100],
            num_ants: 500,
            radius: 4,
            k1: 0.1,
            k2: 0.1,
            fraction_mode: FractionMode::Inclusive,
            seed: 0,
        }
    }
}

impl AcaConfig {
    /// Validate all parameters, then all capacity constraints.
    ///
    /// Parameter errors take precedence: a config that is both
    /// out-of-domain and over capacity reports the parameter error.
    pub fn validate(&self) -> Result<(), AcaError> {
        self.ant_params()?;
        if self.width == 0 || self.height == 0 {
            let name = if self.width == 0 { "width" } else { "height" };
            return Err(InvalidParameterError::new(name, "must be at least 1").into());
        }
        if self.width > Grid::MAX_DIM || self.height > Grid::MAX_DIM {
            return Err(InvalidParameterError::new(
                "width",
                format!(
                    "{}x{} exceeds maximum axis of {}",
                    self.width,
                    self.height,
                    Grid::MAX_DIM
                ),
            )
            .into());
        }
        if self.colors.len() > Color::MAX.0 as usize {
            return Err(InvalidParameterError::new(
                "colors",
                format!(
                    "{} colors requested, at most {} supported",
                    self.colors.len(),
                    Color::MAX.0
                ),
            )
            .into());
        }

        let cells = self.width as u128 * self.height as u128;
        let objects: u128 = self.colors.iter().map(|&n| n as u128).sum();
        if objects > cells {
            return Err(CapacityError {
                what: "objects",
                requested: saturate(objects),
                available: saturate(cells),
            }
            .into());
        }
        if self.num_ants as u128 > cells {
            return Err(CapacityError {
                what: "ants",
                requested: self.num_ants as u64,
                available: saturate(cells),
            }
            .into());
        }
        Ok(())
    }

    /// Ant tunables derived from this config.
    pub fn ant_params(&self) -> Result<AntParams, InvalidParameterError> {
        Ok(AntParams::new(self.k1, self.k2)?.with_mode(self.fraction_mode))
    }

    /// Total number of objects across all colors.
    pub fn object_count(&self) -> usize {
        self.colors.iter().sum()
    }
}

fn saturate(v: u128) -> u64 {
    u64::try_from(v).unwrap_or(u64::MAX)
}
