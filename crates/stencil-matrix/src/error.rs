use thiserror::Error;

/// Error type for matrix construction, access and arithmetic.
///
/// Every condition that would otherwise abort the program is reported through
/// this enum so that callers can recover or assert on the kind of failure.
#[derive(Error, Debug)]
pub enum MatrixError {
    /// The requested shape has a zero dimension, or the provided data does not
    /// fill the requested shape.
    #[error("Invalid matrix dimensions: {0}x{1}")]
    InvalidDimensions(usize, usize),

    /// The operand shapes are incompatible for a binary operator.
    ///
    /// Raised by matrix multiplication when `lhs.cols != rhs.rows` and by
    /// addition when the shapes differ.
    #[error("Invalid matrix dimensions for {op}: {}x{} and {}x{}", lhs.0, lhs.1, rhs.0, rhs.1)]
    DimensionMismatch {
        /// Name of the operator that failed.
        op: &'static str,
        /// Shape of the left operand as (rows, cols).
        lhs: (usize, usize),
        /// Shape of the right operand as (rows, cols).
        rhs: (usize, usize),
    },

    /// Flat index past the end of the buffer.
    #[error("Index out of range: {index} (len {len})")]
    IndexOutOfRange {
        /// The requested flat index.
        index: usize,
        /// The number of cells in the matrix.
        len: usize,
    },

    /// Row/column pair outside the matrix shape.
    #[error("Index out of range: ({row}, {col}) for a {rows}x{cols} matrix")]
    CellOutOfRange {
        /// The requested row.
        row: usize,
        /// The requested column.
        col: usize,
        /// The number of rows in the matrix.
        rows: usize,
        /// The number of columns in the matrix.
        cols: usize,
    },

    /// Division by a zero scalar on a matrix holding a nonzero cell.
    #[error("Division by zero")]
    DivisionByZero,

    /// The text source could not be read.
    #[error("Error loading from input stream: {0}")]
    Io(#[from] std::io::Error),
}

impl MatrixError {
    /// Returns true for both shape related failures.
    pub fn is_invalid_dimensions(&self) -> bool {
        matches!(
            self,
            Self::InvalidDimensions(..) | Self::DimensionMismatch { .. }
        )
    }

    /// Returns true for both flat and 2D out of range access.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            Self::IndexOutOfRange { .. } | Self::CellOutOfRange { .. }
        )
    }
}
