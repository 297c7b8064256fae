//! Core types and errors for the antsort simulation workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by every other crate: object colors, grid cells, tick
//! counters, and the two error kinds surfaced to callers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod id;

pub use cell::Cell;
pub use error::{AcaError, CapacityError, InvalidParameterError};
pub use id::{Color, TickId};
