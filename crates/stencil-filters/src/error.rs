use stencil_matrix::MatrixError;
use thiserror::Error;

/// An error type for filter operations.
#[derive(Error, Debug)]
pub enum FilterError {
    /// Error with the underlying matrix.
    #[error("Error with the matrix: {0}")]
    Matrix(#[from] MatrixError),

    /// The convolution kernel is not 3x3.
    #[error("Invalid kernel size {0}x{1}, expected 3x3")]
    InvalidKernelSize(usize, usize),

    /// The number of quantization levels is outside `1..=256`.
    #[error("Invalid number of quantization levels: {0}")]
    InvalidLevels(u32),
}
