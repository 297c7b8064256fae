//! The object grid for antsort simulations.
//!
//! This crate owns the spatial state of a simulation: a dense `W × H`
//! [`Grid`] of [`Cell`](antsort_core::Cell)s, edge-clipped [`KernelView`]s
//! that alias a rectangle of that grid, and owned [`ColorMatrix`] snapshots
//! of the color layer for renderers and analysis.
//!
//! # Coordinates
//!
//! Cells are addressed as `(x, y)` with `0 <= x < width` and
//! `0 <= y < height`. The color layer exported by [`Grid::snapshot`] is a
//! `width × height` matrix whose row index is `x`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod kernel;
pub mod snapshot;

pub use grid::Grid;
pub use kernel::KernelView;
pub use snapshot::ColorMatrix;
