use heatgrid_image::GridError;

/// Grid axis named in scale errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Horizontal axis (columns, width).
    X,
    /// Vertical axis (rows, height).
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// Errors returned by [`crate::GridResizer`].
///
/// The operation fails atomically: no partial grid is ever returned.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ResizeError {
    /// The input grid is empty or its rows have inconsistent lengths.
    #[error("invalid grid shape: {0}")]
    InvalidShape(#[source] GridError),

    /// The input grid holds NaN or an infinite value.
    #[error("non-finite value at row {row}, column {col}")]
    NonFiniteValue {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
    },

    /// The target size is smaller than the source size along an axis.
    #[error(
        "target {axis} size {target_len} is smaller than source {axis} size {source_len}"
    )]
    DegenerateScale {
        /// The collapsing axis.
        axis: Axis,
        /// Source length along `axis`.
        source_len: usize,
        /// Requested target length along `axis`.
        target_len: usize,
    },

    /// The smoothed grid is uniform, so it cannot be rescaled.
    #[error("smoothed grid has no value range (min = {min}, max = {max})")]
    DegenerateRange {
        /// Minimum smoothed value.
        min: f64,
        /// Maximum smoothed value.
        max: f64,
    },

    /// The requested maximum output value is not positive.
    #[error("max value must be positive, got {0}")]
    InvalidMaxValue(i64),

    /// The resizer configuration is not usable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A grid primitive failed.
    #[error(transparent)]
    Grid(#[from] GridError),
}

impl ResizeError {
    /// A stable name for the error category, suitable for reporting to callers.
    pub fn kind(&self) -> &'static str {
        match self {
            ResizeError::InvalidShape(_) => "InvalidShape",
            ResizeError::NonFiniteValue { .. } => "NonFiniteValue",
            ResizeError::DegenerateScale { .. } => "DegenerateScale",
            ResizeError::DegenerateRange { .. } => "DegenerateRange",
            ResizeError::InvalidMaxValue(_) => "InvalidMaxValue",
            ResizeError::InvalidConfig(_) => "InvalidConfig",
            ResizeError::Grid(_) => "Internal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ResizeError::DegenerateScale {
            axis: Axis::Y,
            source_len: 4,
            target_len: 3,
        };
        assert_eq!(
            err.to_string(),
            "target y size 3 is smaller than source y size 4"
        );
        assert_eq!(err.kind(), "DegenerateScale");

        let err = ResizeError::InvalidShape(GridError::EmptyGrid);
        assert_eq!(err.to_string(), "invalid grid shape: Grid has no rows");
        assert_eq!(err.kind(), "InvalidShape");

        let err: ResizeError = GridError::InvalidKernelLength(0, 0).into();
        assert_eq!(err.kind(), "Internal");
    }
}
