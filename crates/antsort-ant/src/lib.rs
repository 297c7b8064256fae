//! Ant agents for the antsort clustering simulation.
//!
//! An [`Ant`] sees the grid only through a [`KernelView`](antsort_grid::KernelView)
//! centered on its own cell. Each update it may pick up or drop an object
//! according to the density rules in [`AntParams`], then takes one random
//! step inside the window.
//!
//! # Rules
//!
//! With `f` the perceived fraction of like-colored cells in the window:
//!
//! - pickup: `(k1 / (k1 + f))²`
//! - dropoff: `2f` if `f < k2`, else `1`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod ant;
pub mod params;

pub use ant::{Ant, LoadAction, UpdateOutcome};
pub use params::{AntParams, FractionMode};
