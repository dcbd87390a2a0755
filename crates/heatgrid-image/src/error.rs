/// An error type for the grid containers and the operations built on them.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GridError {
    /// Error when the grid has no rows.
    #[error("Grid has no rows")]
    EmptyGrid,

    /// Error when the grid rows hold no values.
    #[error("Grid rows are empty")]
    EmptyRow,

    /// Error when a row length differs from the first row length.
    #[error("Row {row} has length {actual}, expected {expected}")]
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        actual: usize,
    },

    /// Error when the data length does not match the grid size.
    #[error("Data length ({0}) does not match the grid size ({1})")]
    InvalidDataLength(usize, usize),

    /// Error when a cell holds NaN or an infinite value.
    #[error("Non-finite value at row {row}, column {col}")]
    NonFiniteValue {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
    },

    /// Error when two grids that must share a size do not.
    #[error("Grid size mismatch: ({0}x{1}) vs ({2}x{3})")]
    SizeMismatch(usize, usize, usize, usize),

    /// Error when a filter kernel is empty.
    #[error("Invalid kernel length: ({0}, {1})")]
    InvalidKernelLength(usize, usize),

    /// Error when a gaussian kernel radius is NaN or too large to allocate.
    #[error("Invalid kernel radius for sigma {0} and truncate {1}")]
    InvalidKernelRadius(f64, f64),

    /// Error when a replication factor is zero.
    #[error("Invalid scale factor: ({0}, {1})")]
    InvalidScaleFactor(usize, usize),

    /// Error when a value range is empty or not finite.
    #[error("Invalid value range: [{0}, {1}]")]
    InvalidRange(f64, f64),

    /// Error when the upper output level is not positive.
    #[error("Invalid output level: {0}")]
    InvalidLevel(i64),
}
