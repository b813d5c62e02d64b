#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use stencil_matrix as matrix;

#[doc(inline)]
pub use stencil_filters as filters;
