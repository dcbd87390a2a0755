use heatgrid_image::{Grid, GridError};
use rayon::prelude::*;

use crate::{padding::BorderMode, parallel::ExecutionStrategy};

/// A separable 2D filter that applies horizontal and vertical 1D convolutions sequentially.
///
/// This struct caches the kernel data and the tap offsets relative to the output cell.
struct SeparableFilter<'a> {
    kernel_x: &'a [f64],
    kernel_y: &'a [f64],
    offsets_x: Vec<isize>,
    offsets_y: Vec<isize>,
    border: BorderMode,
}

impl<'a> SeparableFilter<'a> {
    /// Create a new separable filter with the given kernels.
    ///
    /// # Arguments
    ///
    /// * `kernel_x` - The horizontal convolution kernel
    /// * `kernel_y` - The vertical convolution kernel
    /// * `border` - How taps falling outside the grid are resolved
    fn new(kernel_x: &'a [f64], kernel_y: &'a [f64], border: BorderMode) -> Self {
        let centered_offsets = |len: usize| {
            let half = (len / 2) as isize;
            (0..len).map(|i| i as isize - half).collect::<Vec<_>>()
        };

        Self {
            kernel_x,
            kernel_y,
            offsets_x: centered_offsets(kernel_x.len()),
            offsets_y: centered_offsets(kernel_y.len()),
            border,
        }
    }

    /// Apply the filter to a grid.
    ///
    /// Performs horizontal filtering followed by vertical filtering using a temporary buffer.
    fn apply(&self, src: &Grid<f64>, dst: &mut Grid<f64>, strategy: ExecutionStrategy) {
        let rows = src.rows();
        let cols = src.cols();
        if rows == 0 || cols == 0 {
            return;
        }

        let mut temp = vec![0.0f64; src.as_slice().len()];

        if strategy.is_parallel(rows * cols) {
            temp.par_chunks_exact_mut(cols)
                .zip(src.as_slice().par_chunks_exact(cols))
                .for_each(|(temp_row, src_row)| self.horizontal_row(src_row, temp_row));

            dst.as_slice_mut()
                .par_chunks_exact_mut(cols)
                .enumerate()
                .for_each(|(r, dst_row)| self.vertical_row(&temp, r, rows, dst_row));
        } else {
            temp.chunks_exact_mut(cols)
                .zip(src.as_slice().chunks_exact(cols))
                .for_each(|(temp_row, src_row)| self.horizontal_row(src_row, temp_row));

            dst.as_slice_mut()
                .chunks_exact_mut(cols)
                .enumerate()
                .for_each(|(r, dst_row)| self.vertical_row(&temp, r, rows, dst_row));
        }
    }

    fn horizontal_row(&self, src_row: &[f64], dst_row: &mut [f64]) {
        let cols = src_row.len();
        for (c, out) in dst_row.iter_mut().enumerate() {
            let mut acc = 0.0;
            for (&k, &off) in self.kernel_x.iter().zip(self.offsets_x.iter()) {
                if let Some(x) = self.border.map_index(c as isize + off, cols) {
                    acc += src_row[x] * k;
                }
            }
            *out = acc;
        }
    }

    fn vertical_row(&self, temp: &[f64], r: usize, rows: usize, dst_row: &mut [f64]) {
        let cols = dst_row.len();
        dst_row.fill(0.0);
        for (&k, &off) in self.kernel_y.iter().zip(self.offsets_y.iter()) {
            if let Some(y) = self.border.map_index(r as isize + off, rows) {
                let src_row = &temp[y * cols..(y + 1) * cols];
                dst_row
                    .iter_mut()
                    .zip(src_row.iter())
                    .for_each(|(acc, &v)| *acc += v * k);
            }
        }
    }
}

/// Apply a separable filter with execution strategy control.
///
/// # Arguments
///
/// * `src` - The source grid with shape (H, W).
/// * `dst` - The destination grid with shape (H, W).
/// * `kernel_x` - The horizontal kernel.
/// * `kernel_y` - The vertical kernel.
/// * `border` - How taps falling outside the grid are resolved.
/// * `strategy` - Execution strategy: `Serial`, `Parallel`, or `Auto`.
///
/// # Errors
///
/// * [`GridError::InvalidKernelLength`] if either kernel is empty.
/// * [`GridError::SizeMismatch`] if `src` and `dst` differ in size.
pub fn separable_filter_with_strategy(
    src: &Grid<f64>,
    dst: &mut Grid<f64>,
    kernel_x: &[f64],
    kernel_y: &[f64],
    border: BorderMode,
    strategy: ExecutionStrategy,
) -> Result<(), GridError> {
    if kernel_x.is_empty() || kernel_y.is_empty() {
        return Err(GridError::InvalidKernelLength(
            kernel_x.len(),
            kernel_y.len(),
        ));
    }

    if src.size() != dst.size() {
        return Err(GridError::SizeMismatch(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    let filter = SeparableFilter::new(kernel_x, kernel_y, border);
    filter.apply(src, dst, strategy);
    Ok(())
}

/// Apply a separable filter to a grid.
///
/// Uses `ExecutionStrategy::Auto` (parallel for grids ≥100K cells, serial otherwise).
/// For explicit control, use [`separable_filter_with_strategy`].
///
/// # Arguments
///
/// * `src` - The source grid with shape (H, W).
/// * `dst` - The destination grid with shape (H, W).
/// * `kernel_x` - The horizontal kernel.
/// * `kernel_y` - The vertical kernel.
/// * `border` - How taps falling outside the grid are resolved.
pub fn separable_filter(
    src: &Grid<f64>,
    dst: &mut Grid<f64>,
    kernel_x: &[f64],
    kernel_y: &[f64],
    border: BorderMode,
) -> Result<(), GridError> {
    separable_filter_with_strategy(
        src,
        dst,
        kernel_x,
        kernel_y,
        border,
        ExecutionStrategy::Auto,
    )
}
