use rayon::prelude::*;

use heatgrid_image::Grid;

/// Number of cells from which [`ExecutionStrategy::Auto`] switches to parallel execution.
pub const AUTO_PARALLEL_MIN_CELLS: usize = 100_000;

/// Controls how row-wise operations are executed.
///
/// Every strategy produces the same values; only the scheduling differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecutionStrategy {
    /// Run sequentially on the current thread.
    Serial,

    /// Use the global Rayon thread pool to process rows in parallel.
    Parallel,

    /// Parallel for grids of at least [`AUTO_PARALLEL_MIN_CELLS`] cells, serial otherwise.
    #[default]
    Auto,
}

impl ExecutionStrategy {
    /// Whether a grid with `num_cells` cells is processed in parallel.
    pub fn is_parallel(&self, num_cells: usize) -> bool {
        match self {
            ExecutionStrategy::Serial => false,
            ExecutionStrategy::Parallel => true,
            ExecutionStrategy::Auto => num_cells >= AUTO_PARALLEL_MIN_CELLS,
        }
    }
}

/// Apply a function to each cell of the grid, row by row.
///
/// PRECONDITION: `src` and `dst` must have the same size.
pub fn iter_rows_val<T1, T2>(
    src: &Grid<T1>,
    dst: &mut Grid<T2>,
    strategy: ExecutionStrategy,
    f: impl Fn(&T1, &mut T2) + Send + Sync,
) where
    T1: Sync,
    T2: Send,
{
    let cols = src.cols();
    if cols == 0 {
        return;
    }

    let run_row = |(src_row, dst_row): (&[T1], &mut [T2])| {
        src_row
            .iter()
            .zip(dst_row.iter_mut())
            .for_each(|(src_val, dst_val)| f(src_val, dst_val));
    };

    if strategy.is_parallel(src.size().num_cells()) {
        src.as_slice()
            .par_chunks_exact(cols)
            .zip(dst.as_slice_mut().par_chunks_exact_mut(cols))
            .for_each(run_row);
    } else {
        src.as_slice()
            .chunks_exact(cols)
            .zip(dst.as_slice_mut().chunks_exact_mut(cols))
            .for_each(run_row);
    }
}
