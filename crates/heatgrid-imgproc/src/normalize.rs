//! Grid normalization operations.
//!
//! * [`find_min_max`] - the value range of a grid
//! * [`normalize_min_max`] - affine rescale of a float grid into `[min, max]`
//! * [`normalize_to_levels`] - affine rescale into the integer levels `0..=max_value`
//!
//! Both rescales map the grid range `[lo, hi]` with
//!
//! ```text
//! normalized = (value - lo) * (max - min) / (hi - lo) + min
//! ```
//!
//! which is order-preserving: a larger input never maps to a smaller output.

use num_traits::Float;

use heatgrid_image::{Grid, GridError};

use crate::parallel::{self, ExecutionStrategy};

/// Find the minimum and maximum values in a grid.
///
/// # Arguments
///
/// * `grid` - The input grid of shape (height, width).
///
/// # Returns
///
/// A tuple containing the minimum and maximum values in the grid.
///
/// # Errors
///
/// Returns [`GridError::EmptyGrid`] if the grid holds no cells.
///
/// # Example
///
/// ```
/// use heatgrid_image::Grid;
/// use heatgrid_imgproc::normalize::find_min_max;
///
/// let grid = Grid::new([3, 2].into(), vec![0u8, 1, 0, 1, 2, 3]).unwrap();
///
/// let (min, max) = find_min_max(&grid).unwrap();
/// assert_eq!(min, 0);
/// assert_eq!(max, 3);
/// ```
pub fn find_min_max<T>(grid: &Grid<T>) -> Result<(T, T), GridError>
where
    T: Copy + PartialOrd,
{
    // get the first element in the grid
    let first_element = match grid.as_slice().first() {
        Some(x) => x,
        None => return Err(GridError::EmptyGrid),
    };

    let mut min = first_element;
    let mut max = first_element;

    for x in grid.as_slice().iter() {
        if x < min {
            min = x;
        }
        if x > max {
            max = x;
        }
    }

    Ok((*min, *max))
}

/// Normalize a float grid into `[min, max]` using its own value range.
///
/// # Arguments
///
/// * `src` - The input grid of shape (height, width).
/// * `dst` - The output grid of shape (height, width).
/// * `min` - The value the grid minimum maps to.
/// * `max` - The value the grid maximum maps to.
///
/// # Errors
///
/// * [`GridError::SizeMismatch`] if `src` and `dst` have different sizes.
/// * [`GridError::EmptyGrid`] if the grid holds no cells.
/// * [`GridError::InvalidRange`] if the grid is uniform or its range is not finite.
pub fn normalize_min_max<T>(
    src: &Grid<T>,
    dst: &mut Grid<T>,
    min: T,
    max: T,
) -> Result<(), GridError>
where
    T: Float + Send + Sync,
{
    if src.size() != dst.size() {
        return Err(GridError::SizeMismatch(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    let (min_val, max_val) = find_min_max(src)?;
    check_range(min_val, max_val)?;

    parallel::iter_rows_val(src, dst, ExecutionStrategy::Auto, |&src_val, dst_val| {
        *dst_val = (src_val - min_val) * (max - min) / (max_val - min_val) + min;
    });

    Ok(())
}

/// Rescale a grid from `range` onto the integer levels `0..=max_value`.
///
/// Each cell becomes `(value - lo) * max_value / (hi - lo)`, truncated toward zero
/// and clamped into `[0, max_value]`, so `lo` maps to `0` and `hi` maps to
/// `max_value` up to one level lost to float rounding.
///
/// # Arguments
///
/// * `src` - The input grid of shape (height, width).
/// * `dst` - The output grid of shape (height, width).
/// * `range` - The input range `(lo, hi)`, typically from [`find_min_max`].
/// * `max_value` - The highest output level.
/// * `strategy` - Execution strategy: `Serial`, `Parallel`, or `Auto`.
///
/// # Errors
///
/// * [`GridError::SizeMismatch`] if `src` and `dst` have different sizes.
/// * [`GridError::InvalidLevel`] if `max_value <= 0`.
/// * [`GridError::InvalidRange`] if `hi <= lo` or the range is not finite.
///
/// # Example
///
/// ```
/// use heatgrid_image::Grid;
/// use heatgrid_imgproc::normalize::normalize_to_levels;
/// use heatgrid_imgproc::parallel::ExecutionStrategy;
///
/// let src = Grid::new([4, 1].into(), vec![1.0, 1.5, 2.9, 3.0]).unwrap();
/// let mut dst = Grid::from_size_val(src.size(), 0i64);
///
/// normalize_to_levels(&src, &mut dst, (1.0, 3.0), 9, ExecutionStrategy::Serial).unwrap();
///
/// assert_eq!(dst.as_slice(), &[0, 2, 8, 9]);
/// ```
pub fn normalize_to_levels(
    src: &Grid<f64>,
    dst: &mut Grid<i64>,
    range: (f64, f64),
    max_value: i64,
    strategy: ExecutionStrategy,
) -> Result<(), GridError> {
    if src.size() != dst.size() {
        return Err(GridError::SizeMismatch(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    if max_value <= 0 {
        return Err(GridError::InvalidLevel(max_value));
    }

    let (lo, hi) = range;
    check_range(lo, hi)?;

    let span = hi - lo;
    let levels = max_value as f64;

    parallel::iter_rows_val(src, dst, strategy, |&src_val, dst_val| {
        let scaled = (src_val - lo) * levels / span;
        *dst_val = (scaled.trunc() as i64).clamp(0, max_value);
    });

    Ok(())
}

fn check_range<T: Float>(lo: T, hi: T) -> Result<(), GridError> {
    if !(lo.is_finite() && hi.is_finite() && hi > lo) {
        return Err(GridError::InvalidRange(
            lo.to_f64().unwrap_or(f64::NAN),
            hi.to_f64().unwrap_or(f64::NAN),
        ));
    }
    Ok(())
}
