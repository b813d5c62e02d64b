use stencil_matrix::{Matrix, MatrixError};

const GAUSSIAN_WEIGHTS: [f32; 9] = [1.0, 2.0, 1.0, 2.0, 4.0, 2.0, 1.0, 2.0, 1.0];
const SOBEL_X_WEIGHTS: [f32; 9] = [1.0, 0.0, -1.0, 2.0, 0.0, -2.0, 1.0, 0.0, -1.0];
const SOBEL_Y_WEIGHTS: [f32; 9] = [1.0, 2.0, 1.0, 0.0, 0.0, 0.0, -1.0, -2.0, -1.0];

fn kernel3(weights: &[f32; 9], norm: f32) -> Result<Matrix, MatrixError> {
    let scale = 1.0 / norm;
    Matrix::from_shape_vec(3, 3, weights.iter().map(|&w| scale * w).collect())
}

/// Create the 3x3 gaussian blur kernel.
///
/// # Returns
///
/// The kernel `[[1, 2, 1], [2, 4, 2], [1, 2, 1]] / 16`.
pub fn gaussian_blur_kernel() -> Result<Matrix, MatrixError> {
    kernel3(&GAUSSIAN_WEIGHTS, 16.0)
}

/// Create the 3x3 horizontal sobel kernel.
///
/// # Returns
///
/// The kernel `[[1, 0, -1], [2, 0, -2], [1, 0, -1]] / 8`.
pub fn sobel_kernel_x() -> Result<Matrix, MatrixError> {
    kernel3(&SOBEL_X_WEIGHTS, 8.0)
}

/// Create the 3x3 vertical sobel kernel.
///
/// # Returns
///
/// The kernel `[[1, 2, 1], [0, 0, 0], [-1, -2, -1]] / 8`.
pub fn sobel_kernel_y() -> Result<Matrix, MatrixError> {
    kernel3(&SOBEL_Y_WEIGHTS, 8.0)
}
