#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the matrix module.
pub mod error;

/// Text serialization of matrices.
pub mod io;

/// Dense matrix representation.
pub mod matrix;

/// Arithmetic operators on matrices.
pub mod ops;

pub use crate::error::MatrixError;
pub use crate::matrix::Matrix;
