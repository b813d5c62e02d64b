//! Plain text serialization.
//!
//! A matrix is written row-major: cells of a row are separated by a single
//! space and rows by a single newline, with nothing after the last cell.
//! Reading accepts any whitespace between values and plain decimal numbers
//! only: `inf`, `nan` and values that overflow `f32` end the input.

use std::fmt;
use std::io::{Read, Write};

use crate::{error::MatrixError, Matrix};

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Length of the longest prefix of `token` that reads as a decimal number:
/// an optional sign, digits with an optional fraction, and an optional
/// exponent. Zero when the token does not start with a number.
fn numeric_prefix_len(token: &str) -> usize {
    let bytes = token.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_digits = count_digits(&bytes[i..]);
    i += int_digits;

    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        frac_digits = count_digits(&bytes[i + 1..]);
        i += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_digits = count_digits(&bytes[j..]);
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }

    i
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.numel();
        let cols = self.cols();
        for (i, v) in self.as_slice().iter().enumerate() {
            write!(f, "{v}")?;
            let next = i + 1;
            if next == len {
                break;
            }
            if next % cols == 0 {
                f.write_str("\n")?;
            } else {
                f.write_str(" ")?;
            }
        }
        Ok(())
    }
}

impl Matrix {
    /// Write the matrix in text form to `writer`.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<(), MatrixError> {
        write!(writer, "{self}")?;
        writer.flush()?;
        Ok(())
    }

    /// Print the matrix in text form to standard output.
    pub fn print(&self) {
        print!("{self}");
    }

    /// Fill the matrix with values read from `reader`.
    ///
    /// Values are stored in arrival order starting at flat offset 0. Fewer
    /// values than cells leave the remaining cells unchanged. A token with
    /// trailing garbage such as `2.5abc` contributes its leading number and
    /// ends the input; a token that does not start with a finite decimal
    /// number ends the input without contributing.
    ///
    /// # Returns
    ///
    /// The number of cells written.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Io`] if the source cannot be read and
    /// [`MatrixError::IndexOutOfRange`] if it holds more values than the matrix
    /// has cells. Cells written before the overflow keep their new values.
    ///
    /// # Examples
    ///
    /// ```
    /// use stencil_matrix::Matrix;
    ///
    /// let mut m = Matrix::new(2, 2).unwrap();
    /// let n = m.read_from("1 2\n3".as_bytes()).unwrap();
    ///
    /// assert_eq!(n, 3);
    /// assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 0.0]);
    /// ```
    pub fn read_from<R: Read>(&mut self, mut reader: R) -> Result<usize, MatrixError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;

        let mut written = 0;
        for token in text.split_whitespace() {
            let len = numeric_prefix_len(token);
            let Some(val) = token[..len].parse::<f32>().ok().filter(|v| v.is_finite()) else {
                log::warn!("stopped reading matrix at non numeric token {token:?}");
                break;
            };
            *self.get_flat_mut(written)? = val;
            written += 1;

            if len < token.len() {
                log::warn!("stopped reading matrix after the number in {token:?}");
                break;
            }
        }

        if written < self.numel() {
            log::debug!("read {written} of {} matrix cells", self.numel());
        }

        Ok(written)
    }

    /// Create a zero filled `(rows, cols)` matrix and fill it from `text`.
    ///
    /// # Examples
    ///
    /// ```
    /// use stencil_matrix::Matrix;
    ///
    /// let m = Matrix::from_text(2, 2, "1 2\n3 4").unwrap();
    /// assert_eq!(m.to_string(), "1 2\n3 4");
    /// ```
    pub fn from_text(rows: usize, cols: usize, text: &str) -> Result<Self, MatrixError> {
        let mut matrix = Self::new(rows, cols)?;
        matrix.read_from(text.as_bytes())?;
        Ok(matrix)
    }
}
