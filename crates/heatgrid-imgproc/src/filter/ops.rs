use heatgrid_image::{Grid, GridError};

use super::{kernels, separable_filter_with_strategy};
use crate::{padding::BorderMode, parallel::ExecutionStrategy};

/// Blur a grid using a gaussian blur filter
///
/// # Arguments
///
/// * `src` - The source grid with shape (H, W).
/// * `dst` - The destination grid with shape (H, W).
/// * `kernel_size` - The size of the kernel (kernel_x, kernel_y).
/// * `sigma` - The sigma of the gaussian kernel, xy-ordered.
/// * `border` - How taps falling outside the grid are resolved.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
pub fn gaussian_blur(
    src: &Grid<f64>,
    dst: &mut Grid<f64>,
    kernel_size: (usize, usize),
    sigma: (f64, f64),
    border: BorderMode,
) -> Result<(), GridError> {
    gaussian_blur_with_strategy(
        src,
        dst,
        kernel_size,
        sigma,
        border,
        ExecutionStrategy::Auto,
    )
}

/// Blur a grid using a gaussian blur filter with execution strategy control.
///
/// See [`gaussian_blur`].
pub fn gaussian_blur_with_strategy(
    src: &Grid<f64>,
    dst: &mut Grid<f64>,
    kernel_size: (usize, usize),
    sigma: (f64, f64),
    border: BorderMode,
    strategy: ExecutionStrategy,
) -> Result<(), GridError> {
    let kernel_x = kernels::gaussian_kernel_1d(kernel_size.0, sigma.0);
    let kernel_y = kernels::gaussian_kernel_1d(kernel_size.1, sigma.1);
    separable_filter_with_strategy(src, dst, &kernel_x, &kernel_y, border, strategy)
}

/// Blur a grid with an isotropic gaussian whose radius is `truncate` standard deviations.
///
/// The same kernel is applied along both axes and out-of-range taps are mirrored
/// about the grid edge ([`BorderMode::Reflect`]), repeating the reflection when the
/// kernel is wider than the grid.
///
/// # Arguments
///
/// * `src` - The source grid with shape (H, W).
/// * `dst` - The destination grid with shape (H, W).
/// * `sigma` - The standard deviation of the gaussian, in cells.
/// * `truncate` - The kernel radius in multiples of `sigma`.
/// * `strategy` - Execution strategy: `Serial`, `Parallel`, or `Auto`.
///
/// # Errors
///
/// * [`GridError::InvalidKernelRadius`] if the kernel radius is NaN or above
///   [`kernels::MAX_KERNEL_RADIUS`].
/// * [`GridError::SizeMismatch`] if `src` and `dst` have different sizes.
///
/// # Example
///
/// ```
/// use heatgrid_image::Grid;
/// use heatgrid_imgproc::filter::gaussian_smooth;
/// use heatgrid_imgproc::parallel::ExecutionStrategy;
///
/// let src = Grid::from_size_val([8, 8].into(), 1.0f64);
/// let mut dst = Grid::from_size_val(src.size(), 0.0);
///
/// gaussian_smooth(&src, &mut dst, 3.0, 4.0, ExecutionStrategy::Serial).unwrap();
///
/// assert!(dst.as_slice().iter().all(|v| (v - 1.0).abs() < 1e-12));
/// ```
pub fn gaussian_smooth(
    src: &Grid<f64>,
    dst: &mut Grid<f64>,
    sigma: f64,
    truncate: f64,
    strategy: ExecutionStrategy,
) -> Result<(), GridError> {
    let kernel_size = kernels::gaussian_kernel_size(sigma, truncate)
        .ok_or(GridError::InvalidKernelRadius(sigma, truncate))?;
    gaussian_blur_with_strategy(
        src,
        dst,
        (kernel_size, kernel_size),
        (sigma, sigma),
        BorderMode::Reflect,
        strategy,
    )
}
