//! # labconv - CIE L\*a\*b\* to sRGB conversion
//!
//! Pure, stateless conversion between CIE L\*a\*b\*, CIE XYZ and sRGB, plus a
//! small fixed palette of named colors.
//!
//! ## Pipeline
//!
//! ```text
//! Lab ──lab_to_xyz──▶ XYZ (D65, 0–100) ──xyz_to_rgb──▶ sRGB (0–255, unclamped)
//! ```
//!
//! [`lab_to_rgb`] composes the two stages and is the only step that
//! validates: a lightness outside [0, 100] yields `None`. The RGB result is
//! never clamped or rounded, so out-of-gamut colors show up as channels
//! below 0 or above 255.
//!
//! ## Quick Start
//!
//! ```
//! use labconv_core::{NamedColor, lab_to_rgb};
//!
//! let gray = lab_to_rgb(50.0, 0.0, 0.0).unwrap();
//! assert!((gray.r - 119.0).abs() < 2.0);
//! assert_eq!(gray.to_u8(), [119, 119, 119]);
//!
//! assert!(lab_to_rgb(120.0, 0.0, 0.0).is_none());
//! assert_eq!(NamedColor::LightRed.hex(), "#F77");
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for the color types and
//!   [`NamedColor`]

pub mod color;
pub mod convert;
pub mod error;
pub mod math;

pub use color::{Lab, NamedColor, Rgb, WhitePoint, Xyz, parse_hex};
pub use convert::{
    ColorConverter, convert_lab_buffer, lab_to_rgb, lab_to_rgb_default, lab_to_xyz, rgb_to_lab,
    rgb_to_xyz, try_lab_to_rgb, xyz_to_lab, xyz_to_rgb,
};
pub use error::{Error, Result};

/// Version of labconv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
