//! Filter operations
//!
//! This module provides 3x3 stencil filters over intensity matrices.

/// Filter kernels
pub mod kernels;

/// 3x3 stencil convolution
mod convolve;
pub use convolve::*;

/// Filter operations
mod ops;
pub use ops::*;
