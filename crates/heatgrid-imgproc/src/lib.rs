#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// grid filtering module.
pub mod filter;

/// operations to normalize grids.
pub mod normalize;

/// border handling for out-of-range indices.
pub mod padding;

/// module containing parallization utilities.
pub mod parallel;

/// block replication of grids.
pub mod resize;
