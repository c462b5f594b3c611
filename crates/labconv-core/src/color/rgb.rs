//! sRGB color values on the 0–255 scale
//!
//! Channels are `f64` and are never clamped by the conversion pipeline.
//! Use [`Rgb::to_u8`] when 8-bit output is needed.

use bytemuck::{Pod, Zeroable};

/// Gamma-encoded sRGB color, nominally 0.0–255.0 per channel
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Rgb {
    /// Red channel
    pub r: f64,
    /// Green channel
    pub g: f64,
    /// Blue channel
    pub b: f64,
}

impl Rgb {
    /// Create a new RGB color
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create RGB from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            r: arr[0],
            g: arr[1],
            b: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Create from 8-bit channels
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f64, g as f64, b as f64)
    }

    /// Clamp to [0, 255] and round to 8-bit channels
    ///
    /// NaN channels map to 0.
    #[inline]
    pub fn to_u8(&self) -> [u8; 3] {
        let clamped = self.clamp();
        [
            clamped.r.round() as u8,
            clamped.g.round() as u8,
            clamped.b.round() as u8,
        ]
    }

    /// Clamp all channels to [0, 255]
    #[inline]
    pub fn clamp(&self) -> Self {
        Self {
            r: self.r.clamp(0.0, 255.0),
            g: self.g.clamp(0.0, 255.0),
            b: self.b.clamp(0.0, 255.0),
        }
    }

    /// Check if all channels are in [0, 255]
    #[inline]
    pub fn is_in_gamut(&self) -> bool {
        self.to_array()
            .iter()
            .all(|c| (0.0..=255.0).contains(c))
    }

    /// Check if approximately equal to another RGB color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }

    /// Black color
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// White color
    pub const WHITE: Self = Self::new(255.0, 255.0, 255.0);
}

impl From<[f64; 3]> for Rgb {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Rgb> for [f64; 3] {
    fn from(rgb: Rgb) -> Self {
        rgb.to_array()
    }
}

impl From<Rgb> for (f64, f64, f64) {
    fn from(rgb: Rgb) -> Self {
        (rgb.r, rgb.g, rgb.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(arr: [u8; 3]) -> Self {
        Self::from_u8(arr[0], arr[1], arr[2])
    }
}
