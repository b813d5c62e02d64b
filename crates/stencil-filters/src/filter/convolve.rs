use stencil_matrix::Matrix;

use crate::error::FilterError;

/// Compute one output cell of a 3x3 stencil.
///
/// Taps that fall outside the source are skipped. The sum is rounded to the
/// nearest integer with ties to even.
fn filter_kernel3_pix_calc(
    src: &[f32],
    rows: usize,
    cols: usize,
    kernel: &[f32],
    row: usize,
    col: usize,
) -> f32 {
    let mut sum = 0.0f32;
    for dy in 0..3 {
        let Some(r) = (row + dy).checked_sub(1).filter(|&r| r < rows) else {
            continue;
        };
        for dx in 0..3 {
            let Some(c) = (col + dx).checked_sub(1).filter(|&c| c < cols) else {
                continue;
            };
            sum += src[r * cols + c] * kernel[dy * 3 + dx];
        }
    }
    sum.round_ties_even()
}

/// Convolve a matrix with a 3x3 kernel.
///
/// Every output cell `(i, j)` is `Σ src(i + k, j + l) * kernel(1 + k, 1 + l)`
/// over `k, l ∈ {-1, 0, 1}`, omitting the taps that fall outside `src`, and
/// rounded to the nearest integer.
///
/// # Arguments
///
/// * `src` - The source matrix.
/// * `kernel` - The 3x3 kernel, centered at `(1, 1)`.
///
/// # Returns
///
/// A new matrix with the shape of `src`.
///
/// # Errors
///
/// Returns [`FilterError::InvalidKernelSize`] if `kernel` is not 3x3.
///
/// # Examples
///
/// ```
/// use stencil_filters::filter::convolution;
/// use stencil_matrix::Matrix;
///
/// let src = Matrix::from_shape_vec(1, 1, vec![5.0]).unwrap();
/// let mut kernel = Matrix::new(3, 3).unwrap();
/// kernel.set(1, 1, 1.0).unwrap();
///
/// let dst = convolution(&src, &kernel).unwrap();
/// assert_eq!(dst.as_slice(), &[5.0]);
/// ```
pub fn convolution(src: &Matrix, kernel: &Matrix) -> Result<Matrix, FilterError> {
    if kernel.shape() != (3, 3) {
        return Err(FilterError::InvalidKernelSize(kernel.rows(), kernel.cols()));
    }

    let (rows, cols) = src.shape();
    let src_data = src.as_slice();
    let kernel_data = kernel.as_slice();

    let mut dst = Matrix::new(rows, cols)?;
    dst.as_slice_mut()
        .iter_mut()
        .enumerate()
        .for_each(|(idx, out)| {
            *out = filter_kernel3_pix_calc(
                src_data,
                rows,
                cols,
                kernel_data,
                idx / cols,
                idx % cols,
            );
        });

    Ok(dst)
}
