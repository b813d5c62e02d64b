use std::ops;

use crate::{error::MatrixError, Matrix};

impl Matrix {
    /// Multiply two matrices.
    ///
    /// # Arguments
    ///
    /// * `rhs` - The right operand, with as many rows as `self` has columns.
    ///
    /// # Returns
    ///
    /// A new `(self.rows, rhs.cols)` matrix holding the product.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if `self.cols() != rhs.rows()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use stencil_matrix::Matrix;
    ///
    /// let a = Matrix::from_shape_vec(1, 2, vec![1.0, 2.0]).unwrap();
    /// let b = Matrix::from_shape_vec(2, 1, vec![3.0, 4.0]).unwrap();
    ///
    /// let c = a.matmul(&b).unwrap();
    /// assert_eq!(c.as_slice(), &[11.0]);
    /// ```
    pub fn matmul(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        if self.cols() != rhs.rows() {
            return Err(MatrixError::DimensionMismatch {
                op: "mul",
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }

        let (n, m, p) = (self.rows(), self.cols(), rhs.cols());
        let a = self.as_slice();
        let b = rhs.as_slice();

        let mut out = Matrix::new(n, p)?;
        let dst = out.as_slice_mut();
        for i in 0..n {
            for j in 0..p {
                let acc = &mut dst[i * p + j];
                for k in 0..m {
                    *acc += a[i * m + k] * b[k * p + j];
                }
            }
        }

        Ok(out)
    }

    /// Multiply every cell by a scalar.
    ///
    /// A zero scalar yields a fresh zero matrix of the same shape without
    /// touching the cells of `self`.
    pub fn scale(&self, scalar: f32) -> Matrix {
        let mut out = self.clone();
        out.scale_inplace(scalar);
        out
    }

    fn scale_inplace(&mut self, scalar: f32) {
        if scalar == 0.0 {
            self.as_slice_mut().fill(0.0);
            return;
        }
        self.as_slice_mut().iter_mut().for_each(|v| *v *= scalar);
    }

    /// Divide every cell by a scalar.
    ///
    /// The division is carried out as a multiplication by `1 / scalar`.
    /// Dividing by zero only succeeds when every cell is already zero, in which
    /// case an unchanged copy is returned.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DivisionByZero`] if `scalar` is zero and any cell
    /// is nonzero.
    ///
    /// # Examples
    ///
    /// ```
    /// use stencil_matrix::{Matrix, MatrixError};
    ///
    /// let zeros = Matrix::new(2, 2).unwrap();
    /// assert_eq!(zeros.div_scalar(0.0).unwrap(), zeros);
    ///
    /// let ones = Matrix::from_shape_val(2, 2, 1.0).unwrap();
    /// assert!(matches!(ones.div_scalar(0.0), Err(MatrixError::DivisionByZero)));
    /// ```
    pub fn div_scalar(&self, scalar: f32) -> Result<Matrix, MatrixError> {
        if scalar == 0.0 {
            if self.as_slice().iter().any(|&v| v != 0.0) {
                return Err(MatrixError::DivisionByZero);
            }
            return Ok(self.clone());
        }
        Ok(self.scale(1.0 / scalar))
    }

    /// Add two matrices cell by cell.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] unless both shapes are equal.
    pub fn add_matrix(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        if self.shape() != rhs.shape() {
            return Err(MatrixError::DimensionMismatch {
                op: "add",
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }

        let mut out = self.clone();
        out.as_slice_mut()
            .iter_mut()
            .zip(rhs.as_slice())
            .for_each(|(dst, &src)| *dst += src);

        Ok(out)
    }

    /// Replace `self` with `self * rhs`.
    ///
    /// `self` is left untouched on error.
    pub fn mul_assign_matrix(&mut self, rhs: &Matrix) -> Result<(), MatrixError> {
        *self = self.matmul(rhs)?;
        Ok(())
    }

    /// Replace `self` with `self + rhs`.
    ///
    /// `self` is left untouched on error.
    pub fn add_assign_matrix(&mut self, rhs: &Matrix) -> Result<(), MatrixError> {
        *self = self.add_matrix(rhs)?;
        Ok(())
    }

    /// Replace `self` with `self / scalar`.
    ///
    /// `self` is left untouched on error.
    pub fn div_assign_scalar(&mut self, scalar: f32) -> Result<(), MatrixError> {
        *self = self.div_scalar(scalar)?;
        Ok(())
    }
}

impl ops::Mul<&Matrix> for &Matrix {
    type Output = Result<Matrix, MatrixError>;

    fn mul(self, rhs: &Matrix) -> Self::Output {
        self.matmul(rhs)
    }
}

impl ops::Mul<f32> for &Matrix {
    type Output = Matrix;

    fn mul(self, scalar: f32) -> Matrix {
        self.scale(scalar)
    }
}

impl ops::Mul<f32> for Matrix {
    type Output = Matrix;

    fn mul(mut self, scalar: f32) -> Matrix {
        self.scale_inplace(scalar);
        self
    }
}

impl ops::Mul<&Matrix> for f32 {
    type Output = Matrix;

    fn mul(self, matrix: &Matrix) -> Matrix {
        matrix.scale(self)
    }
}

impl ops::Mul<Matrix> for f32 {
    type Output = Matrix;

    fn mul(self, matrix: Matrix) -> Matrix {
        matrix * self
    }
}

impl ops::MulAssign<f32> for Matrix {
    fn mul_assign(&mut self, scalar: f32) {
        self.scale_inplace(scalar);
    }
}

impl ops::Div<f32> for &Matrix {
    type Output = Result<Matrix, MatrixError>;

    fn div(self, scalar: f32) -> Self::Output {
        self.div_scalar(scalar)
    }
}

impl ops::Add<&Matrix> for &Matrix {
    type Output = Result<Matrix, MatrixError>;

    fn add(self, rhs: &Matrix) -> Self::Output {
        self.add_matrix(rhs)
    }
}

impl ops::AddAssign<f32> for Matrix {
    fn add_assign(&mut self, scalar: f32) {
        self.as_slice_mut().iter_mut().for_each(|v| *v += scalar);
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use crate::{Matrix, MatrixError};

    fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize) -> Result<Matrix, MatrixError> {
        let data = (0..rows * cols)
            .map(|_| rng.random_range(-10.0f32..10.0))
            .collect();
        Matrix::from_shape_vec(rows, cols, data)
    }

    fn identity(n: usize) -> Result<Matrix, MatrixError> {
        let mut m = Matrix::new(n, n)?;
        for i in 0..n {
            m.set(i, i, 1.0)?;
        }
        Ok(m)
    }

    #[test]
    fn matmul_small() -> Result<(), MatrixError> {
        let a = Matrix::from_shape_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])?;
        let b = Matrix::from_shape_vec(3, 2, vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0])?;

        let c = (&a * &b)?;
        assert_eq!(c.shape(), (2, 2));
        assert_eq!(c.as_slice(), &[58.0, 64.0, 139.0, 154.0]);
        Ok(())
    }

    #[test]
    fn matmul_identity() -> Result<(), MatrixError> {
        let mut rng = StdRng::seed_from_u64(7);
        let a = random_matrix(&mut rng, 3, 4)?;
        assert_eq!(a.matmul(&identity(4)?)?, a);
        assert_eq!(identity(3)?.matmul(&a)?, a);
        Ok(())
    }

    #[test]
    fn matmul_associative() -> Result<(), MatrixError> {
        let mut rng = StdRng::seed_from_u64(42);
        let a = random_matrix(&mut rng, 2, 3)?;
        let b = random_matrix(&mut rng, 3, 4)?;
        let c = random_matrix(&mut rng, 4, 2)?;

        let left = (&(&a * &b)? * &c)?;
        let right = (&a * &(&b * &c)?)?;
        assert_eq!(left.shape(), right.shape());
        for (l, r) in left.as_slice().iter().zip(right.as_slice()) {
            assert_relative_eq!(*l, *r, epsilon = 1e-2, max_relative = 1e-4);
        }
        Ok(())
    }

    #[test]
    fn matmul_dimension_mismatch() -> Result<(), MatrixError> {
        let a = Matrix::new(2, 3)?;
        let b = Matrix::new(2, 3)?;
        let err = (&a * &b).unwrap_err();
        assert!(err.is_invalid_dimensions());

        let mut lhs = Matrix::from_shape_val(2, 3, 1.0)?;
        assert!(lhs.mul_assign_matrix(&b).is_err());
        assert_eq!(lhs, Matrix::from_shape_val(2, 3, 1.0)?);
        Ok(())
    }

    #[test]
    fn mul_assign_matrix_reshapes() -> Result<(), MatrixError> {
        let mut a = Matrix::from_shape_vec(1, 2, vec![1.0, 2.0])?;
        let b = Matrix::from_shape_vec(2, 3, vec![1.0, 0.0, 1.0, 0.0, 1.0, 1.0])?;
        a.mul_assign_matrix(&b)?;
        assert_eq!(a.shape(), (1, 3));
        assert_eq!(a.as_slice(), &[1.0, 2.0, 3.0]);
        Ok(())
    }

    #[test]
    fn scalar_mul_both_sides() -> Result<(), MatrixError> {
        let m = Matrix::from_shape_vec(2, 2, vec![1.0, -2.0, 3.0, 0.5])?;
        let expected = Matrix::from_shape_vec(2, 2, vec![2.0, -4.0, 6.0, 1.0])?;

        assert_eq!(&m * 2.0, expected);
        assert_eq!(2.0 * &m, expected);
        assert_eq!(m.clone() * 2.0, expected);
        assert_eq!(2.0 * m.clone(), expected);

        let mut n = m.clone();
        n *= 2.0;
        assert_eq!(n, expected);
        Ok(())
    }

    #[test]
    fn scalar_mul_zero() -> Result<(), MatrixError> {
        let m = Matrix::from_shape_vec(1, 3, vec![f32::INFINITY, -1.0, 2.0])?;
        let z = &m * 0.0;
        assert_eq!(z, Matrix::new(1, 3)?);

        let mut n = m.clone();
        n *= 0.0;
        assert_eq!(n, Matrix::new(1, 3)?);
        Ok(())
    }

    #[test]
    fn scalar_div() -> Result<(), MatrixError> {
        let m = Matrix::from_shape_vec(1, 3, vec![2.0, 4.0, -8.0])?;
        assert_eq!((&m / 2.0)?.as_slice(), &[1.0, 2.0, -4.0]);

        let mut n = m.clone();
        n.div_assign_scalar(4.0)?;
        assert_eq!(n.as_slice(), &[0.5, 1.0, -2.0]);
        Ok(())
    }

    #[test]
    fn scalar_div_by_zero() -> Result<(), MatrixError> {
        let zeros = Matrix::new(3, 2)?;
        assert_eq!((&zeros / 0.0)?, zeros);

        let mut m = Matrix::new(3, 2)?;
        m.set(2, 1, 0.25)?;
        assert!(matches!(&m / 0.0, Err(MatrixError::DivisionByZero)));
        assert!(matches!(
            m.div_assign_scalar(0.0),
            Err(MatrixError::DivisionByZero)
        ));
        assert_eq!(m.get(2, 1)?, 0.25);
        Ok(())
    }

    #[test]
    fn matrix_add() -> Result<(), MatrixError> {
        let a = Matrix::from_shape_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0])?;
        let b = Matrix::from_shape_vec(2, 2, vec![10.0, 20.0, 30.0, 40.0])?;
        assert_eq!((&a + &b)?.as_slice(), &[11.0, 22.0, 33.0, 44.0]);

        let mut c = a.clone();
        c.add_assign_matrix(&b)?;
        assert_eq!(c.as_slice(), &[11.0, 22.0, 33.0, 44.0]);
        Ok(())
    }

    #[test]
    fn matrix_add_dimension_mismatch() -> Result<(), MatrixError> {
        let a = Matrix::new(2, 3)?;
        let b = Matrix::new(3, 2)?;
        assert!(matches!(
            &a + &b,
            Err(MatrixError::DimensionMismatch { op: "add", .. })
        ));

        let mut c = Matrix::new(2, 3)?;
        assert!(c
            .add_assign_matrix(&b)
            .is_err_and(|e| e.is_invalid_dimensions()));
        Ok(())
    }

    #[test]
    fn scalar_add_assign() -> Result<(), MatrixError> {
        let mut m = Matrix::from_shape_vec(1, 3, vec![1.0, -1.0, 0.0])?;
        m += 1.5;
        assert_eq!(m.as_slice(), &[2.5, 0.5, 1.5]);
        Ok(())
    }
}
