#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the grid module.
pub mod error;

/// 2D grid representation.
pub mod grid;

pub use crate::error::GridError;
pub use crate::grid::{Grid, GridSize};
