use std::ops;

use crate::error::MatrixError;

/// A dense matrix of `f32` cells stored in row-major order.
///
/// Cell `(i, j)` lives at flat offset `i * cols + j`, so the same buffer can be
/// addressed either as a 1D array or by row and column.
///
/// # Examples
///
/// ```
/// use stencil_matrix::Matrix;
///
/// let mut m = Matrix::new(2, 3).unwrap();
/// m.set(1, 2, 4.0).unwrap();
///
/// assert_eq!(m.get(1, 2).unwrap(), 4.0);
/// assert_eq!(m.get_flat(5).unwrap(), 4.0);
/// assert_eq!(m[(1, 2)], 4.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl Matrix {
    /// Create a zero filled matrix.
    ///
    /// # Arguments
    ///
    /// * `rows` - The number of rows, at least 1.
    /// * `cols` - The number of columns, at least 1.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidDimensions`] if either dimension is zero or
    /// `rows * cols` overflows.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        Self::from_shape_val(rows, cols, 0.0)
    }

    /// Create a matrix with every cell set to `val`.
    pub fn from_shape_val(rows: usize, cols: usize, val: f32) -> Result<Self, MatrixError> {
        let numel = Self::checked_numel(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![val; numel],
        })
    }

    /// Number of cells of a `(rows, cols)` shape, rejecting empty and
    /// overflowing shapes.
    fn checked_numel(rows: usize, cols: usize) -> Result<usize, MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidDimensions(rows, cols));
        }
        rows.checked_mul(cols)
            .ok_or(MatrixError::InvalidDimensions(rows, cols))
    }

    /// Create a matrix from row-major cell data.
    ///
    /// # Arguments
    ///
    /// * `rows` - The number of rows, at least 1.
    /// * `cols` - The number of columns, at least 1.
    /// * `data` - The cells in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidDimensions`] if either dimension is zero,
    /// `rows * cols` overflows, or the length of `data` is not `rows * cols`.
    ///
    /// # Examples
    ///
    /// ```
    /// use stencil_matrix::Matrix;
    ///
    /// let m = Matrix::from_shape_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(m.get(1, 0).unwrap(), 3.0);
    ///
    /// assert!(Matrix::from_shape_vec(2, 2, vec![1.0]).is_err());
    /// ```
    pub fn from_shape_vec(rows: usize, cols: usize, data: Vec<f32>) -> Result<Self, MatrixError> {
        if data.len() != Self::checked_numel(rows, cols)? {
            return Err(MatrixError::InvalidDimensions(rows, cols));
        }
        Ok(Self { rows, cols, data })
    }

    /// Get the number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get the number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the shape as (rows, cols).
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Get the number of cells.
    #[inline]
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// Get the cells as a row-major slice.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Get the cells as a mutable row-major slice.
    #[inline]
    pub fn as_slice_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Consume the matrix and return its row-major cells.
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize, MatrixError> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::CellOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    /// Get the value of cell `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::CellOutOfRange`] unless `row < rows` and `col < cols`.
    pub fn get(&self, row: usize, col: usize) -> Result<f32, MatrixError> {
        let k = self.offset(row, col)?;
        Ok(self.data[k])
    }

    /// Get a mutable reference to cell `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::CellOutOfRange`] unless `row < rows` and `col < cols`.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut f32, MatrixError> {
        let k = self.offset(row, col)?;
        Ok(&mut self.data[k])
    }

    /// Set the value of cell `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, val: f32) -> Result<(), MatrixError> {
        *self.get_mut(row, col)? = val;
        Ok(())
    }

    /// Get the value at flat offset `k`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfRange`] unless `k < rows * cols`.
    pub fn get_flat(&self, k: usize) -> Result<f32, MatrixError> {
        self.data
            .get(k)
            .copied()
            .ok_or(MatrixError::IndexOutOfRange {
                index: k,
                len: self.data.len(),
            })
    }

    /// Get a mutable reference to the cell at flat offset `k`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfRange`] unless `k < rows * cols`.
    pub fn get_flat_mut(&mut self, k: usize) -> Result<&mut f32, MatrixError> {
        let len = self.data.len();
        self.data
            .get_mut(k)
            .ok_or(MatrixError::IndexOutOfRange { index: k, len })
    }

    /// Reshape the matrix into a `(rows * cols, 1)` column vector.
    ///
    /// Only the shape changes; the buffer is untouched and the previous shape
    /// cannot be recovered.
    ///
    /// # Examples
    ///
    /// ```
    /// use stencil_matrix::Matrix;
    ///
    /// let mut m = Matrix::from_shape_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// m.vectorize();
    ///
    /// assert_eq!(m.shape(), (4, 1));
    /// assert_eq!(m.get(2, 0).unwrap(), 3.0);
    /// ```
    pub fn vectorize(&mut self) -> &mut Self {
        self.rows = self.data.len();
        self.cols = 1;
        self
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self {
            rows: 1,
            cols: 1,
            data: vec![0.0],
        }
    }
}

impl ops::Index<usize> for Matrix {
    type Output = f32;

    fn index(&self, k: usize) -> &f32 {
        match self.data.get(k) {
            Some(v) => v,
            None => panic!("Index out of range: {k} (len {})", self.data.len()),
        }
    }
}

impl ops::IndexMut<usize> for Matrix {
    fn index_mut(&mut self, k: usize) -> &mut f32 {
        let len = self.data.len();
        match self.data.get_mut(k) {
            Some(v) => v,
            None => panic!("Index out of range: {k} (len {len})"),
        }
    }
}

impl ops::Index<(usize, usize)> for Matrix {
    type Output = f32;

    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        match self.offset(row, col) {
            Ok(k) => &self.data[k],
            Err(err) => panic!("{err}"),
        }
    }
}

impl ops::IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        match self.offset(row, col) {
            Ok(k) => &mut self.data[k],
            Err(err) => panic!("{err}"),
        }
    }
}
