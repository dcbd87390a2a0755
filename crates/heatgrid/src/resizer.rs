use heatgrid_image::{Grid, GridError, GridSize};
use num_traits::AsPrimitive;
use heatgrid_imgproc::{
    filter::gaussian_smooth,
    normalize::{find_min_max, normalize_to_levels},
    resize::{block_size, resize_block, scale_factors},
};

use crate::{
    config::ResizeConfig,
    error::{Axis, ResizeError},
};

/// Turns a coarse grid into a larger, smoothed grid of integer levels.
///
/// The pipeline is block replication by integer factors, an isotropic gaussian
/// blur and a linear rescale of the blurred range onto `0..=max_value`.
/// A resizer holds no state besides its configuration, so one instance can be
/// shared between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GridResizer {
    config: ResizeConfig,
}

impl GridResizer {
    /// Create a resizer with the given configuration.
    pub fn new(config: ResizeConfig) -> Self {
        Self { config }
    }

    /// The configuration used by this resizer.
    pub fn config(&self) -> &ResizeConfig {
        &self.config
    }

    /// Resize, smooth and normalize a grid.
    ///
    /// # Arguments
    ///
    /// * `grid` - Rows of numeric values, all of the same non-zero length. Any
    ///   primitive numeric type is accepted and cast to `f64`; 64-bit integers
    ///   above 2^53 in magnitude lose precision.
    /// * `target_width` - Requested output width; the actual width is the largest
    ///   multiple of the source width not exceeding it.
    /// * `target_height` - Requested output height, rounded down the same way.
    /// * `max_value` - The highest output level.
    ///
    /// # Returns
    ///
    /// A grid of `source_height * floor(target_height / source_height)` rows and
    /// `source_width * floor(target_width / source_width)` columns, with values in
    /// `[0, max_value]`.
    ///
    /// # Errors
    ///
    /// * [`ResizeError::InvalidMaxValue`] if `max_value <= 0`.
    /// * [`ResizeError::InvalidConfig`] if the configuration is not usable.
    /// * [`ResizeError::InvalidShape`] if the grid is empty or ragged.
    /// * [`ResizeError::NonFiniteValue`] if a cell is NaN or infinite.
    /// * [`ResizeError::DegenerateScale`] if a target dimension is smaller than the source one.
    /// * [`ResizeError::DegenerateRange`] if the smoothed grid is uniform.
    ///
    /// # Example
    ///
    /// ```
    /// use heatgrid::GridResizer;
    ///
    /// let resizer = GridResizer::default();
    /// let levels = resizer
    ///     .resize_and_smooth(&[[0, 10], [10, 0]], 4, 4, 255)
    ///     .unwrap();
    ///
    /// assert_eq!(levels.len(), 4);
    /// assert!(levels.iter().all(|row| row.len() == 4));
    /// assert!(levels.iter().flatten().all(|&v| (0..=255).contains(&v)));
    /// ```
    pub fn resize_and_smooth<R, T>(
        &self,
        grid: &[R],
        target_width: usize,
        target_height: usize,
        max_value: i64,
    ) -> Result<Vec<Vec<i64>>, ResizeError>
    where
        R: AsRef<[T]>,
        T: AsPrimitive<f64>,
    {
        if max_value <= 0 {
            return Err(ResizeError::InvalidMaxValue(max_value));
        }
        self.config.validate()?;
        let kernel_size = self.config.kernel_size()?;

        let src = Grid::<f64>::from_rows(grid).map_err(ResizeError::InvalidShape)?;
        src.check_finite().map_err(|err| match err {
            GridError::NonFiniteValue { row, col } => ResizeError::NonFiniteValue { row, col },
            other => ResizeError::Grid(other),
        })?;

        let (src_min, src_max) = find_min_max(&src)?;
        log::debug!(
            "[source] shape = ({}, {}) min = {} max = {}",
            src.rows(),
            src.cols(),
            src_min,
            src_max
        );

        let target = GridSize {
            width: target_width,
            height: target_height,
        };
        let scale = self.checked_scale_factors(src.size(), target)?;

        let mut tiled = Grid::from_size_val(block_size(src.size(), scale), 0.0f64);
        resize_block(&src, &mut tiled, scale)?;

        log::debug!(
            "scale = ({}, {}) kernel size = {}",
            scale.0,
            scale.1,
            kernel_size
        );

        let mut smoothed = Grid::from_size_val(tiled.size(), 0.0f64);
        gaussian_smooth(
            &tiled,
            &mut smoothed,
            self.config.sigma,
            self.config.truncate,
            self.config.strategy,
        )?;

        let (min, max) = find_min_max(&smoothed)?;
        if !(min.is_finite() && max.is_finite() && max > min) {
            return Err(ResizeError::DegenerateRange { min, max });
        }

        let mut levels = Grid::from_size_val(smoothed.size(), 0i64);
        normalize_to_levels(
            &smoothed,
            &mut levels,
            (min, max),
            max_value,
            self.config.strategy,
        )?;

        let (out_min, out_max) = find_min_max(&levels)?;
        log::debug!(
            "[smoothed] shape = ({}, {}) min = {} max = {} (range {} .. {})",
            levels.rows(),
            levels.cols(),
            out_min,
            out_max,
            min,
            max
        );

        Ok(levels.to_rows())
    }

    /// Resize a grid described by a wire request.
    #[cfg(feature = "serde")]
    pub fn execute(
        &self,
        request: &crate::request::ResizeRequest,
    ) -> Result<Vec<Vec<i64>>, ResizeError> {
        self.resize_and_smooth(
            &request.data,
            request.size_x,
            request.size_y,
            request.max_value,
        )
    }

    fn checked_scale_factors(
        &self,
        src: GridSize,
        target: GridSize,
    ) -> Result<(usize, usize), ResizeError> {
        let (scale_x, scale_y) = scale_factors(src, target);
        if scale_x == 0 {
            return Err(ResizeError::DegenerateScale {
                axis: Axis::X,
                source_len: src.width,
                target_len: target.width,
            });
        }
        if scale_y == 0 {
            return Err(ResizeError::DegenerateScale {
                axis: Axis::Y,
                source_len: src.height,
                target_len: target.height,
            });
        }
        Ok((scale_x, scale_y))
    }
}

/// Resize, smooth and normalize a grid with the default configuration.
///
/// See [`GridResizer::resize_and_smooth`].
pub fn resize_and_smooth<R, T>(
    grid: &[R],
    target_width: usize,
    target_height: usize,
    max_value: i64,
) -> Result<Vec<Vec<i64>>, ResizeError>
where
    R: AsRef<[T]>,
    T: AsPrimitive<f64>,
{
    GridResizer::default().resize_and_smooth(grid, target_width, target_height, max_value)
}
