//! # labconv-tests
//!
//! Reference parity and property testing for labconv.
//!
//! This crate provides:
//! - Wrappers around the `palette` crate used as the reference conversion
//! - Seeded sample generation for Lab and sRGB values
//! - Channel-difference statistics for comparing RGB outputs
//!
//! ## Test Categories
//!
//! 1. **Palette parity**: Lab → sRGB and sRGB → Lab against `palette`
//! 2. **Properties**: lightness validation, purity, known values
//! 3. **Named colors**: literal table and serialized names

pub mod accuracy;
pub mod patterns;
pub mod reference;

pub use accuracy::{ChannelStats, compare_rgb};
pub use patterns::{LabPattern, generate_labs, generate_srgb};
