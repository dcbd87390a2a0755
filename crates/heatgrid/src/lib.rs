#![deny(missing_docs)]
//! Resize coarse 2D grids into smooth heat maps.
//!
//! A small grid of measurements (sensor readings, simulation cells) is upsampled
//! by integer block replication, blurred with an isotropic gaussian to remove the
//! block edges, and rescaled onto the integer levels `0..=max_value`.
//!
//! ```
//! let levels = heatgrid::resize_and_smooth(&[[0, 10], [10, 0]], 40, 40, 9).unwrap();
//!
//! assert_eq!(levels.len(), 40);
//! assert!(levels.iter().flatten().any(|&v| v == 0));
//! ```

/// Resizer configuration.
pub mod config;

/// Error types for the resizer.
pub mod error;

/// The grid resizer.
pub mod resizer;

/// Request and response payloads for serving the resizer.
#[cfg(feature = "serde")]
pub mod request;

#[doc(inline)]
pub use heatgrid_image as image;

#[doc(inline)]
pub use heatgrid_imgproc as imgproc;

pub use crate::config::{ResizeConfig, DEFAULT_SIGMA};
pub use crate::error::{Axis, ResizeError};
pub use crate::resizer::{resize_and_smooth, GridResizer};
pub use heatgrid_imgproc::parallel::ExecutionStrategy;
