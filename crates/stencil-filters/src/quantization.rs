//! Reduce the number of distinct intensities in an image.
//!
//! The range `[0, 256)` is split into `levels` buckets of width
//! `256 / levels` (integer division) and each cell is replaced by the
//! representative of its bucket, `(lower + upper - 1) / 2` in integer
//! arithmetic.
//!
//! When `levels` does not divide 256 the buckets stop short of 256 at
//! `levels * (256 / levels)`. Cells at or past that boundary fall into the
//! last bucket, and negative cells into the first.

use stencil_matrix::Matrix;

use crate::error::FilterError;

const NUM_INTENSITIES: u32 = 256;

/// Compute the representative value of every bucket.
fn bucket_representatives(levels: u32) -> Vec<f32> {
    let width = NUM_INTENSITIES / levels;
    (0..levels)
        .map(|i| {
            let lower = i * width;
            let upper = lower + width;
            ((lower + upper - 1) / 2) as f32
        })
        .collect()
}

/// Quantize an image to `levels` intensity buckets.
///
/// # Arguments
///
/// * `src` - The source image as a matrix of intensities.
/// * `levels` - The number of buckets, in `1..=256`.
///
/// # Returns
///
/// A new matrix with the shape of `src`.
///
/// # Errors
///
/// Returns [`FilterError::InvalidLevels`] if `levels` is zero or greater than 256.
///
/// # Examples
///
/// ```
/// use stencil_filters::quantization::quantization;
/// use stencil_matrix::Matrix;
///
/// let image = Matrix::from_shape_vec(1, 4, vec![0.0, 70.0, 130.0, 255.0]).unwrap();
/// let dst = quantization(&image, 4).unwrap();
///
/// assert_eq!(dst.as_slice(), &[31.0, 95.0, 159.0, 223.0]);
/// ```
pub fn quantization(src: &Matrix, levels: u32) -> Result<Matrix, FilterError> {
    if levels == 0 || levels > NUM_INTENSITIES {
        return Err(FilterError::InvalidLevels(levels));
    }
    if NUM_INTENSITIES % levels != 0 {
        log::debug!(
            "{levels} levels do not divide {NUM_INTENSITIES}, buckets end at {}",
            levels * (NUM_INTENSITIES / levels)
        );
    }

    let representatives = bucket_representatives(levels);
    let width = (NUM_INTENSITIES / levels) as f32;
    let last = (levels - 1) as i64;

    let data = src
        .as_slice()
        .iter()
        .map(|&v| {
            let bucket = ((v / width) as i64).clamp(0, last);
            representatives[bucket as usize]
        })
        .collect();

    Ok(Matrix::from_shape_vec(src.rows(), src.cols(), data)?)
}
