/// Kernel radius, in standard deviations, used when none is given.
pub const DEFAULT_TRUNCATE: f64 = 4.0;

/// Largest gaussian kernel radius, in cells, that [`gaussian_kernel_size`] accepts.
pub const MAX_KERNEL_RADIUS: usize = 1 << 16;

/// Compute the size of a gaussian kernel cut off at `truncate` standard deviations.
///
/// The radius is `floor(truncate * sigma + 0.5)` and the size is `2 * radius + 1`,
/// so the kernel is always odd and centered.
///
/// # Arguments
///
/// * `sigma` - The sigma of the gaussian kernel.
/// * `truncate` - The kernel radius expressed in multiples of `sigma`.
///
/// # Returns
///
/// The kernel size, or `None` if the radius is NaN or larger than [`MAX_KERNEL_RADIUS`].
///
/// # Examples
///
/// ```
/// use heatgrid_imgproc::filter::kernels::gaussian_kernel_size;
///
/// assert_eq!(gaussian_kernel_size(3.0, 4.0), Some(25));
/// assert_eq!(gaussian_kernel_size(1.0, 4.0), Some(9));
/// assert_eq!(gaussian_kernel_size(1e300, 4.0), None);
/// ```
pub fn gaussian_kernel_size(sigma: f64, truncate: f64) -> Option<usize> {
    let radius = (truncate * sigma + 0.5).floor();
    if radius.is_nan() || radius > MAX_KERNEL_RADIUS as f64 {
        return None;
    }
    Some(2 * radius.max(0.0) as usize + 1)
}

/// Create a gaussian blur kernel.
///
/// # Arguments
///
/// * `kernel_size` - The size of the kernel.
/// * `sigma` - The sigma of the gaussian kernel.
///
/// # Returns
///
/// A vector of the kernel, normalized to sum to one.
pub fn gaussian_kernel_1d(kernel_size: usize, sigma: f64) -> Vec<f64> {
    let mut kernel = Vec::with_capacity(kernel_size);

    let mean = kernel_size.saturating_sub(1) as f64 / 2.0;
    let sigma_sq = sigma * sigma;

    // compute the kernel
    for i in 0..kernel_size {
        let x = i as f64 - mean;
        kernel.push((-(x * x) / (2.0 * sigma_sq)).exp());
    }

    // normalize the kernel
    let norm = kernel.iter().sum::<f64>();
    kernel.iter_mut().for_each(|k| *k /= norm);
    kernel
}
