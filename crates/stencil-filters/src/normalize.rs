//! Clamp intensities into the 8-bit range.
//!
//! Values below `0` become `0` and values at or above `256` become `255`.
//! Values in `[255, 256)` are left as they are.

use stencil_matrix::Matrix;

const FIRST_INTENSITY: f32 = 0.0;
const LAST_INTENSITY: f32 = 255.0;
const NUM_INTENSITIES: f32 = 256.0;

/// Clamp every cell of `image` into `[0, 255]` in place.
///
/// # Returns
///
/// The same matrix, for chaining.
///
/// # Examples
///
/// ```
/// use stencil_filters::normalize::normalize_inplace;
/// use stencil_matrix::Matrix;
///
/// let mut image = Matrix::from_shape_vec(1, 3, vec![-4.0, 12.0, 300.0]).unwrap();
/// normalize_inplace(&mut image);
///
/// assert_eq!(image.as_slice(), &[0.0, 12.0, 255.0]);
/// ```
pub fn normalize_inplace(image: &mut Matrix) -> &mut Matrix {
    image.as_slice_mut().iter_mut().for_each(|v| {
        if *v < FIRST_INTENSITY {
            *v = FIRST_INTENSITY;
        } else if *v >= NUM_INTENSITIES {
            *v = LAST_INTENSITY;
        }
    });
    image
}

/// Clamp every cell of `image` into `[0, 255]`.
///
/// # Arguments
///
/// * `image` - The matrix to clamp, consumed and returned.
///
/// # Returns
///
/// The clamped matrix.
pub fn normalize(mut image: Matrix) -> Matrix {
    normalize_inplace(&mut image);
    image
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use stencil_matrix::{Matrix, MatrixError};

    use super::{normalize, normalize_inplace};

    #[test]
    fn test_normalize() -> Result<(), MatrixError> {
        let image = Matrix::from_shape_vec(2, 3, vec![-1.0, 0.0, 255.0, 255.5, 256.0, 1000.0])?;
        let dst = normalize(image);
        assert_eq!(dst.as_slice(), &[0.0, 0.0, 255.0, 255.5, 255.0, 255.0]);
        Ok(())
    }

    #[test]
    fn test_normalize_inplace_chains() -> Result<(), MatrixError> {
        let mut image = Matrix::from_shape_vec(1, 2, vec![-3.0, 400.0])?;
        let sum: f32 = normalize_inplace(&mut image).as_slice().iter().sum();
        assert_eq!(sum, 255.0);
        assert_eq!(image.as_slice(), &[0.0, 255.0]);
        Ok(())
    }

    #[test]
    fn test_normalize_idempotent() -> Result<(), MatrixError> {
        let mut rng = StdRng::seed_from_u64(3);
        let data = (0..64).map(|_| rng.random_range(-512.0f32..512.0)).collect();
        let image = Matrix::from_shape_vec(8, 8, data)?;

        let once = normalize(image);
        let twice = normalize(once.clone());
        assert_eq!(once, twice);
        assert!(once.as_slice().iter().all(|&v| (0.0..256.0).contains(&v)));
        Ok(())
    }
}
