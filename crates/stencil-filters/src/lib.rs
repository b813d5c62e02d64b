#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for filter operations.
pub mod error;

/// image filtering module.
pub mod filter;

/// operations to clamp intensities into the displayable range.
pub mod normalize;

/// intensity quantization module.
pub mod quantization;

pub use crate::error::FilterError;
pub use crate::filter::{blur, convolution, sobel};
pub use crate::normalize::{normalize, normalize_inplace};
pub use crate::quantization::quantization;
