use stencil_matrix::Matrix;

use super::{convolution, kernels};
use crate::{error::FilterError, normalize::normalize};

/// Blur an image with the 3x3 gaussian kernel.
///
/// The convolution result is clamped into `[0, 255]`.
///
/// # Arguments
///
/// * `src` - The source image as a matrix of intensities.
///
/// # Returns
///
/// A new matrix with the shape of `src`.
pub fn blur(src: &Matrix) -> Result<Matrix, FilterError> {
    let kernel = kernels::gaussian_blur_kernel()?;
    let dst = convolution(src, &kernel)?;
    Ok(normalize(dst))
}

/// Detect edges with the 3x3 sobel kernels.
///
/// The horizontal and vertical responses are added cell by cell and the sum is
/// clamped into `[0, 255]`.
///
/// # Arguments
///
/// * `src` - The source image as a matrix of intensities.
///
/// # Returns
///
/// A new matrix with the shape of `src`.
pub fn sobel(src: &Matrix) -> Result<Matrix, FilterError> {
    let gx = convolution(src, &kernels::sobel_kernel_x()?)?;
    let gy = convolution(src, &kernels::sobel_kernel_y()?)?;
    let dst = (&gx + &gy)?;
    Ok(normalize(dst))
}
