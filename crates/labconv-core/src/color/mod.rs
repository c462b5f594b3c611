//! Color space types and conversions
//!
//! This module provides:
//! - CIELAB (L*a*b*) color space
//! - CIE XYZ color space
//! - sRGB values on the 0–255 scale
//! - White point definitions
//! - The named color palette

pub mod lab;
pub mod named;
pub mod rgb;
pub mod white_point;
pub mod xyz;

pub use lab::Lab;
pub use named::{NamedColor, parse_hex};
pub use rgb::Rgb;
pub use white_point::{D50, D65, WhitePoint};
pub use xyz::Xyz;
