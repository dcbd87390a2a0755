use heatgrid_imgproc::{
    filter::kernels::{self, DEFAULT_TRUNCATE, MAX_KERNEL_RADIUS},
    parallel::ExecutionStrategy,
};

use crate::error::ResizeError;

/// Standard deviation of the smoothing gaussian, in output cells.
pub const DEFAULT_SIGMA: f64 = 3.0;

/// Options for [`crate::GridResizer`].
///
/// The border mode is fixed to mirror reflection and is not configurable.
///
/// # Example
///
/// ```
/// use heatgrid::{ExecutionStrategy, ResizeConfig};
///
/// let config = ResizeConfig::default()
///     .with_sigma(2.0)
///     .with_strategy(ExecutionStrategy::Serial);
///
/// assert_eq!(config.sigma, 2.0);
/// assert_eq!(config.truncate, 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ResizeConfig {
    /// Standard deviation of the gaussian, applied to both axes.
    pub sigma: f64,
    /// Kernel radius in multiples of `sigma`.
    pub truncate: f64,
    /// How the filter and normalization passes are scheduled.
    pub strategy: ExecutionStrategy,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            sigma: DEFAULT_SIGMA,
            truncate: DEFAULT_TRUNCATE,
            strategy: ExecutionStrategy::Auto,
        }
    }
}

impl ResizeConfig {
    /// Set the gaussian standard deviation.
    pub fn with_sigma(mut self, sigma: f64) -> Self {
        self.sigma = sigma;
        self
    }

    /// Set the kernel radius in multiples of `sigma`.
    pub fn with_truncate(mut self, truncate: f64) -> Self {
        self.truncate = truncate;
        self
    }

    /// Set the execution strategy.
    pub fn with_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Check that the options describe a usable filter.
    ///
    /// # Errors
    ///
    /// Returns [`ResizeError::InvalidConfig`] if `sigma` or `truncate` is not a positive
    /// finite number, or if the kernel radius `truncate * sigma` exceeds
    /// [`MAX_KERNEL_RADIUS`] cells.
    pub fn validate(&self) -> Result<(), ResizeError> {
        if !(self.sigma.is_finite() && self.sigma > 0.0) {
            return Err(ResizeError::InvalidConfig(format!(
                "sigma must be positive and finite, got {}",
                self.sigma
            )));
        }
        if !(self.truncate.is_finite() && self.truncate > 0.0) {
            return Err(ResizeError::InvalidConfig(format!(
                "truncate must be positive and finite, got {}",
                self.truncate
            )));
        }
        self.kernel_size().map(|_| ())
    }

    /// Number of taps of the gaussian kernel along each axis.
    ///
    /// # Errors
    ///
    /// Returns [`ResizeError::InvalidConfig`] if the radius exceeds [`MAX_KERNEL_RADIUS`].
    pub fn kernel_size(&self) -> Result<usize, ResizeError> {
        kernels::gaussian_kernel_size(self.sigma, self.truncate).ok_or_else(|| {
            ResizeError::InvalidConfig(format!(
                "kernel radius for sigma {} and truncate {} exceeds {} cells",
                self.sigma, self.truncate, MAX_KERNEL_RADIUS
            ))
        })
    }
}
