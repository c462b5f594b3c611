//! Mathematical building blocks for the conversion pipeline
//!
//! - 3x3 matrix operations for the RGB↔XYZ linear step
//! - sRGB gamma companding

pub mod gamma;
pub mod matrix;

pub use gamma::{srgb_gamma_decode, srgb_gamma_encode};
pub use matrix::{LINEAR_SRGB_TO_XYZ, Matrix3x3, XYZ_TO_LINEAR_SRGB};
