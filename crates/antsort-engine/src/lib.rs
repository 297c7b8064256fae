//! Simulation controller for ant-based object clustering.
//!
//! [`Simulation`] owns the [`Grid`](antsort_grid::Grid), the ants, and the
//! random generator. Each [`tick()`](Simulation::tick) updates every ant
//! once, in creation order, against the kernel window around its cell.
//! [`run()`](Simulation::run) drives a bounded number of ticks with optional
//! periodic forced unloading and always finishes with every object back on
//! the grid.
//!
//! Configuration lives in [`AcaConfig`]; metrics in [`TickMetrics`] and
//! [`RunReport`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod metrics;
pub mod simulation;

pub use config::AcaConfig;
pub use metrics::{RunReport, TickMetrics};
pub use simulation::Simulation;
