use num_traits::{AsPrimitive, Float};

use crate::error::GridError;

/// Grid size in cells
///
/// A struct to represent the size of a grid in cells.
///
/// # Examples
///
/// ```
/// use heatgrid_image::GridSize;
///
/// let size = GridSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(size.width, 10);
/// assert_eq!(size.height, 20);
/// assert_eq!(size.num_cells(), 200);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSize {
    /// Width of the grid in cells
    pub width: usize,
    /// Height of the grid in cells
    pub height: usize,
}

impl GridSize {
    /// Number of cells covered by this size.
    pub fn num_cells(&self) -> usize {
        self.width * self.height
    }
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "GridSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for GridSize {
    fn from(size: [usize; 2]) -> Self {
        GridSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// A dense, single channel 2D grid stored in row-major order.
///
/// The shape is `(height, width)`: `height` rows of `width` values each.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    size: GridSize,
    data: Vec<T>,
}

impl<T> Grid<T> {
    /// Create a new grid from row-major data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the grid in cells.
    /// * `data` - The cell values, row by row.
    ///
    /// # Errors
    ///
    /// If the length of the data does not match the grid size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use heatgrid_image::{Grid, GridSize};
    ///
    /// let grid = Grid::new(
    ///     GridSize {
    ///         width: 3,
    ///         height: 2,
    ///     },
    ///     vec![0u8; 6],
    /// ).unwrap();
    ///
    /// assert_eq!(grid.cols(), 3);
    /// assert_eq!(grid.rows(), 2);
    /// ```
    pub fn new(size: GridSize, data: Vec<T>) -> Result<Self, GridError> {
        if data.len() != size.num_cells() {
            return Err(GridError::InvalidDataLength(data.len(), size.num_cells()));
        }

        Ok(Self { size, data })
    }

    /// Create a new grid with the given size, every cell set to `val`.
    pub fn from_size_val(size: GridSize, val: T) -> Self
    where
        T: Clone,
    {
        Self {
            size,
            data: vec![val; size.num_cells()],
        }
    }

    /// Create a grid from a nested sequence of rows.
    ///
    /// Every row must be non-empty and have the same length as the first row.
    /// Values are converted with an `as` cast, so any primitive numeric element
    /// type is accepted.
    ///
    /// # Errors
    ///
    /// * [`GridError::EmptyGrid`] if there are no rows.
    /// * [`GridError::EmptyRow`] if the first row is empty.
    /// * [`GridError::RaggedRows`] if a row length differs from the first one.
    ///
    /// # Examples
    ///
    /// ```
    /// use heatgrid_image::Grid;
    ///
    /// let grid = Grid::<f64>::from_rows(&[[0u8, 10], [10, 0]]).unwrap();
    /// assert_eq!(grid.as_slice(), &[0.0, 10.0, 10.0, 0.0]);
    ///
    /// assert!(Grid::<f64>::from_rows(&[vec![1.0], vec![1.0, 2.0]]).is_err());
    /// ```
    pub fn from_rows<R, U>(rows: &[R]) -> Result<Self, GridError>
    where
        R: AsRef<[U]>,
        U: AsPrimitive<T>,
        T: Copy + 'static,
    {
        let first = rows.first().ok_or(GridError::EmptyGrid)?;
        let width = first.as_ref().len();
        if width == 0 {
            return Err(GridError::EmptyRow);
        }

        let mut data = Vec::with_capacity(width * rows.len());
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::RaggedRows {
                    row: r,
                    expected: width,
                    actual: row.len(),
                });
            }
            data.extend(row.iter().map(|&v| v.as_()));
        }

        Ok(Self {
            size: GridSize {
                width,
                height: rows.len(),
            },
            data,
        })
    }

    /// The size of the grid in cells.
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// The number of columns of the grid.
    pub fn cols(&self) -> usize {
        self.size.width
    }

    /// The number of rows of the grid.
    pub fn rows(&self) -> usize {
        self.size.height
    }

    /// The grid values in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The grid values in row-major order, mutably.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// The value at column `x` and row `y`, if it lies inside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        self.data.get(y * self.size.width + x)
    }

    /// The values of row `y`.
    ///
    /// PRECONDITION: `y < self.rows()`.
    pub fn row(&self, y: usize) -> &[T] {
        let start = y * self.size.width;
        &self.data[start..start + self.size.width]
    }

    /// Copy the grid into a nested sequence of rows.
    pub fn to_rows(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        (0..self.size.height).map(|y| self.row(y).to_vec()).collect()
    }
}

impl<T: Float> Grid<T> {
    /// Check that every cell holds a finite value.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::NonFiniteValue`] with the position of the first NaN or infinite cell.
    pub fn check_finite(&self) -> Result<(), GridError> {
        match self.data.iter().position(|v| !v.is_finite()) {
            Some(idx) => Err(GridError::NonFiniteValue {
                row: idx / self.size.width,
                col: idx % self.size.width,
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_new() -> Result<(), GridError> {
        let grid = Grid::new(
            GridSize {
                width: 3,
                height: 2,
            },
            vec![1.0f32; 6],
        )?;
        assert_eq!(grid.size().num_cells(), 6);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.rows(), 2);

        let err = Grid::new(
            GridSize {
                width: 3,
                height: 2,
            },
            vec![1.0f32; 5],
        );
        assert_eq!(err, Err(GridError::InvalidDataLength(5, 6)));
        Ok(())
    }

    #[test]
    fn grid_from_rows() -> Result<(), GridError> {
        let grid = Grid::<f64>::from_rows(&[vec![1i32, 2, 3], vec![4, 5, 6]])?;
        assert_eq!(grid.size(), GridSize::from([3, 2]));
        assert_eq!(grid.row(1), &[4.0, 5.0, 6.0]);
        assert_eq!(grid.get(2, 0), Some(&3.0));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(
            grid.to_rows(),
            vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]
        );
        Ok(())
    }

    #[test]
    fn grid_from_rows_wide_integers() -> Result<(), GridError> {
        let grid = Grid::<f64>::from_rows(&[[0i64, -7], [u32::MAX as i64, 3]])?;
        assert_eq!(grid.as_slice(), &[0.0, -7.0, 4294967295.0, 3.0]);

        let grid = Grid::<f64>::from_rows(&[vec![1usize, 2], vec![3, 4]])?;
        assert_eq!(grid.row(1), &[3.0, 4.0]);
        Ok(())
    }

    #[test]
    fn grid_from_rows_invalid() {
        let empty: [Vec<f64>; 0] = [];
        assert_eq!(Grid::<f64>::from_rows(&empty), Err(GridError::EmptyGrid));

        let empty_row: [Vec<f64>; 2] = [vec![], vec![]];
        assert_eq!(Grid::<f64>::from_rows(&empty_row), Err(GridError::EmptyRow));

        assert_eq!(
            Grid::<f64>::from_rows(&[vec![1.0, 2.0], vec![3.0], vec![4.0, 5.0]]),
            Err(GridError::RaggedRows {
                row: 1,
                expected: 2,
                actual: 1,
            })
        );
    }

    #[test]
    fn grid_check_finite() -> Result<(), GridError> {
        let mut grid = Grid::from_size_val([3, 2].into(), 0.5f64);
        grid.check_finite()?;

        grid.as_slice_mut()[4] = f64::NAN;
        assert_eq!(
            grid.check_finite(),
            Err(GridError::NonFiniteValue { row: 1, col: 1 })
        );
        Ok(())
    }

    #[cfg(feature = "serde")]
    #[test]
    fn grid_size_serde() -> Result<(), Box<dyn std::error::Error>> {
        let size = GridSize {
            width: 4,
            height: 3,
        };
        let json = serde_json::to_string(&size)?;
        assert_eq!(json, r#"{"width":4,"height":3}"#);
        assert_eq!(serde_json::from_str::<GridSize>(&json)?, size);
        Ok(())
    }
}
