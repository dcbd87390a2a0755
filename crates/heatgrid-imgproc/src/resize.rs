//! Block replication of grids.
//!
//! Upsampling here is a Kronecker product with a block of ones: every source cell
//! becomes a `scale_y × scale_x` block of identical values. No interpolation takes
//! place, so block edges stay hard until a smoothing filter is applied.

use heatgrid_image::{Grid, GridError, GridSize};

/// Integer replication factors `(scale_x, scale_y)` that fit `src` into `target`.
///
/// Each factor is `floor(target / source)` along its axis and is zero when the
/// target is smaller than the source.
///
/// # Examples
///
/// ```
/// use heatgrid_image::GridSize;
/// use heatgrid_imgproc::resize::scale_factors;
///
/// let src = GridSize { width: 3, height: 2 };
/// assert_eq!(scale_factors(src, [10, 4].into()), (3, 2));
/// assert_eq!(scale_factors(src, [2, 4].into()), (0, 2));
/// ```
pub fn scale_factors(src: GridSize, target: GridSize) -> (usize, usize) {
    let scale_x = target.width.checked_div(src.width).unwrap_or(0);
    let scale_y = target.height.checked_div(src.height).unwrap_or(0);
    (scale_x, scale_y)
}

/// Size of a grid of size `src` after replicating each cell by `scale`, xy-ordered.
pub fn block_size(src: GridSize, scale: (usize, usize)) -> GridSize {
    GridSize {
        width: src.width * scale.0,
        height: src.height * scale.1,
    }
}

/// Upsample a grid by replicating every cell into a block of identical values.
///
/// # Arguments
///
/// * `src` - The source grid with shape (H, W).
/// * `dst` - The destination grid with shape (H * scale_y, W * scale_x).
/// * `scale` - The replication factors (scale_x, scale_y).
///
/// # Errors
///
/// * [`GridError::InvalidScaleFactor`] if either factor is zero.
/// * [`GridError::SizeMismatch`] if `dst` does not have the replicated size.
///
/// # Example
///
/// ```
/// use heatgrid_image::Grid;
/// use heatgrid_imgproc::resize::resize_block;
///
/// let src = Grid::new([2, 1].into(), vec![1, 2]).unwrap();
/// let mut dst = Grid::from_size_val([4, 2].into(), 0);
///
/// resize_block(&src, &mut dst, (2, 2)).unwrap();
///
/// assert_eq!(dst.as_slice(), &[1, 1, 2, 2, 1, 1, 2, 2]);
/// ```
pub fn resize_block<T: Copy>(
    src: &Grid<T>,
    dst: &mut Grid<T>,
    scale: (usize, usize),
) -> Result<(), GridError> {
    let (scale_x, scale_y) = scale;
    if scale_x == 0 || scale_y == 0 {
        return Err(GridError::InvalidScaleFactor(scale_x, scale_y));
    }

    let expected = block_size(src.size(), scale);
    if dst.size() != expected {
        return Err(GridError::SizeMismatch(
            expected.width,
            expected.height,
            dst.cols(),
            dst.rows(),
        ));
    }

    let dst_cols = expected.width;
    if dst_cols == 0 {
        return Ok(());
    }

    dst.as_slice_mut()
        .chunks_exact_mut(dst_cols)
        .enumerate()
        .for_each(|(r, dst_row)| {
            let src_row = src.row(r / scale_y);
            dst_row
                .chunks_exact_mut(scale_x)
                .zip(src_row.iter())
                .for_each(|(block, &val)| block.fill(val));
        });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn test_scale_factors() {
        let src = GridSize {
            width: 2,
            height: 2,
        };
        assert_eq!(scale_factors(src, [4, 4].into()), (2, 2));
        assert_eq!(scale_factors(src, [5, 7].into()), (2, 3));
        assert_eq!(scale_factors(src, [2, 2].into()), (1, 1));
        assert_eq!(scale_factors(src, [1, 4].into()), (0, 2));
        assert_eq!(scale_factors([0, 0].into(), [4, 4].into()), (0, 0));
    }

    #[test]
    fn test_resize_block_scenario() -> Result<(), GridError> {
        let src = Grid::new([2, 2].into(), vec![0.0, 10.0, 10.0, 0.0])?;
        let scale = scale_factors(src.size(), [4, 4].into());

        let mut dst = Grid::from_size_val(block_size(src.size(), scale), 0.0f64);
        resize_block(&src, &mut dst, scale)?;

        assert_eq!(
            dst.to_rows(),
            vec![
                vec![0.0, 0.0, 10.0, 10.0],
                vec![0.0, 0.0, 10.0, 10.0],
                vec![10.0, 10.0, 0.0, 0.0],
                vec![10.0, 10.0, 0.0, 0.0],
            ]
        );
        Ok(())
    }

    #[test]
    fn test_resize_block_uniform_blocks() -> Result<(), GridError> {
        let src = Grid::new([3, 2].into(), vec![1, 2, 3, 4, 5, 6])?;
        let scale = (4, 3);

        let mut dst = Grid::from_size_val(block_size(src.size(), scale), 0);
        resize_block(&src, &mut dst, scale)?;
        assert_eq!(dst.size(), GridSize::from([12, 6]));

        for y in 0..dst.rows() {
            for x in 0..dst.cols() {
                assert_eq!(dst.get(x, y), src.get(x / scale.0, y / scale.1));
            }
        }
        Ok(())
    }

    #[test]
    fn test_resize_block_invalid() -> Result<(), GridError> {
        let src = Grid::new([2, 2].into(), vec![1, 2, 3, 4])?;

        let mut dst = Grid::from_size_val([4, 4].into(), 0);
        assert_eq!(
            resize_block(&src, &mut dst, (0, 2)),
            Err(GridError::InvalidScaleFactor(0, 2))
        );
        assert_eq!(
            resize_block(&src, &mut dst, (2, 3)),
            Err(GridError::SizeMismatch(4, 6, 4, 4))
        );
        Ok(())
    }

    #[test]
    fn test_resize_block_random_grids() -> Result<(), GridError> {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..25 {
            let width = rng.random_range(1..8);
            let height = rng.random_range(1..8);
            let target = GridSize {
                width: rng.random_range(width..width * 6),
                height: rng.random_range(height..height * 6),
            };
            let data = (0..width * height)
                .map(|_| rng.random_range(-1e3..1e3))
                .collect::<Vec<f64>>();
            let src = Grid::new([width, height].into(), data)?;

            let scale = scale_factors(src.size(), target);
            let mut dst = Grid::from_size_val(block_size(src.size(), scale), 0.0);
            resize_block(&src, &mut dst, scale)?;

            assert!(dst.cols() <= target.width && dst.cols() + width > target.width);
            assert!(dst.rows() <= target.height && dst.rows() + height > target.height);
            for y in 0..dst.rows() {
                for x in 0..dst.cols() {
                    assert_eq!(dst.get(x, y), src.get(x / scale.0, y / scale.1));
                }
            }
        }
        Ok(())
    }
}
