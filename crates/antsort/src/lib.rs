//! antsort: ant-based clustering of colored objects on a 2D grid.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! antsort sub-crates. For most users, adding `antsort` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use antsort::prelude::*;
//!
//! let config = AcaConfig {
//!     width: 30,
//!     height: 30,
//!     colors: vec![40, 40],
//!     num_ants: 25,
//!     radius: 2,
//!     seed: 42,
//!     ..AcaConfig::default()
//! };
//! let mut sim = Simulation::new(config).unwrap();
//! let report = sim.run(500, Some(100)).unwrap();
//!
//! assert_eq!(sim.carried_count(), 0);
//! assert_eq!(report.snapshot.object_count(), 80);
//! assert_eq!(sim.current_tick(), TickId(500));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `antsort-core` | Colors, cells, tick IDs, errors |
//! | [`grid`] | `antsort-grid` | Grid storage, kernel views, color snapshots |
//! | [`ant`] | `antsort-ant` | The ant agent and its pickup/dropoff rules |
//! | [`engine`] | `antsort-engine` | Configuration, simulation controller, metrics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and errors (`antsort-core`).
///
/// [`types::Color`], [`types::Cell`], [`types::TickId`], and the
/// [`types::AcaError`] hierarchy.
pub use antsort_core as types;

/// Grid storage and windows (`antsort-grid`).
///
/// [`grid::Grid`] owns the cells; [`grid::KernelView`] is a clipped
/// rectangular window into it; [`grid::ColorMatrix`] is an owned copy of
/// the color layer.
pub use antsort_grid as grid;

/// The ant agent (`antsort-ant`).
///
/// [`ant::Ant`] with its per-tick update, and [`ant::AntParams`] holding
/// the pickup/dropoff tunables.
pub use antsort_ant as ant;

/// Simulation controller (`antsort-engine`).
///
/// [`engine::Simulation`] built from an [`engine::AcaConfig`].
pub use antsort_engine as engine;

/// Common imports for typical antsort usage.
///
/// ```rust
/// use antsort::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use antsort_core::{Cell, Color, TickId};

    // Errors
    pub use antsort_core::{AcaError, CapacityError, InvalidParameterError};

    // Grid
    pub use antsort_grid::{ColorMatrix, Grid, KernelView};

    // Agent
    pub use antsort_ant::{Ant, AntParams, FractionMode};

    // Engine
    pub use antsort_engine::{AcaConfig, RunReport, Simulation, TickMetrics};
}
