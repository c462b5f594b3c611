//! CIE XYZ Color Space
//!
//! Intermediate representation between Lab and sRGB. Values use the 0–100
//! scale, so the D65 white is `(95.047, 100.0, 108.883)`.

use bytemuck::{Pod, Zeroable};

use crate::color::Rgb;
use crate::math::{LINEAR_SRGB_TO_XYZ, XYZ_TO_LINEAR_SRGB, srgb_gamma_decode, srgb_gamma_encode};

/// CIE 1931 XYZ tristimulus values
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Xyz {
    /// X tristimulus value
    pub x: f64,
    /// Y tristimulus value (luminance, 0–100)
    pub y: f64,
    /// Z tristimulus value
    pub z: f64,
}

impl Xyz {
    /// Create a new XYZ color
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create XYZ from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            x: arr[0],
            y: arr[1],
            z: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Convert to sRGB on the 0–255 scale
    ///
    /// Divides by 100, applies the D65 linear matrix, gamma-encodes each
    /// channel and multiplies by 255. The result is neither clamped nor
    /// rounded: out-of-gamut colors come back with channels below 0 or
    /// above 255 so callers can detect them.
    pub fn to_rgb(&self) -> Rgb {
        let normalized = [self.x / 100.0, self.y / 100.0, self.z / 100.0];
        let linear = XYZ_TO_LINEAR_SRGB.multiply_vec(normalized);

        Rgb::new(
            srgb_gamma_encode(linear[0]) * 255.0,
            srgb_gamma_encode(linear[1]) * 255.0,
            srgb_gamma_encode(linear[2]) * 255.0,
        )
    }

    /// Convert from sRGB on the 0–255 scale
    pub fn from_rgb(rgb: Rgb) -> Self {
        let linear = [
            srgb_gamma_decode(rgb.r / 255.0),
            srgb_gamma_decode(rgb.g / 255.0),
            srgb_gamma_decode(rgb.b / 255.0),
        ];
        let [x, y, z] = LINEAR_SRGB_TO_XYZ.multiply_vec(linear);

        Self::new(x * 100.0, y * 100.0, z * 100.0)
    }

    /// Check if approximately equal to another XYZ color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
    }
}

impl From<[f64; 3]> for Xyz {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Xyz> for [f64; 3] {
    fn from(xyz: Xyz) -> Self {
        xyz.to_array()
    }
}

impl From<Xyz> for (f64, f64, f64) {
    fn from(xyz: Xyz) -> Self {
        (xyz.x, xyz.y, xyz.z)
    }
}
