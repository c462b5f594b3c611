//! Lab → XYZ → sRGB conversion pipeline
//!
//! [`ColorConverter`] holds the (immutable) options for a conversion. The
//! free functions in this module use [`ColorConverter::DEFAULT`]: D65 white
//! and lightness validated against [0, 100].
//!
//! Only the composed Lab → RGB step validates anything, and only the
//! lightness. The two stages, the reverse direction and the RGB output are
//! left unvalidated and unclamped.

use log::{debug, trace};

use crate::color::{D65, Lab, Rgb, WhitePoint, Xyz};
use crate::{Error, Result};

/// Options for Lab → RGB conversion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorConverter {
    /// Reference white for Lab ↔ XYZ
    pub white: WhitePoint,
    /// Smallest accepted lightness (inclusive)
    pub min_lightness: f64,
    /// Largest accepted lightness (inclusive)
    pub max_lightness: f64,
}

impl Default for ColorConverter {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ColorConverter {
    /// D65 white, lightness in [0, 100]
    pub const DEFAULT: Self = Self {
        white: D65,
        min_lightness: 0.0,
        max_lightness: 100.0,
    };

    /// Create a converter with default options
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Use a different reference white
    pub const fn with_white_point(self, white: WhitePoint) -> Self {
        Self { white, ..self }
    }

    /// Accept lightness in `[min, max]` instead of [0, 100]
    pub const fn with_lightness_range(self, min: f64, max: f64) -> Self {
        Self {
            min_lightness: min,
            max_lightness: max,
            ..self
        }
    }

    /// Check lightness against the accepted range. NaN is never accepted.
    #[inline]
    pub fn accepts_lightness(&self, l: f64) -> bool {
        l >= self.min_lightness && l <= self.max_lightness
    }

    /// Inverse CIE Lab transform to tristimulus values
    #[inline]
    pub fn lab_to_xyz(&self, lab: Lab) -> Xyz {
        lab.to_xyz_with_white(&self.white)
    }

    /// Linear sRGB matrix plus gamma companding, scaled to 0–255
    #[inline]
    pub fn xyz_to_rgb(&self, xyz: Xyz) -> Rgb {
        xyz.to_rgb()
    }

    /// Lab → XYZ → RGB, or `None` when the lightness is out of range
    pub fn lab_to_rgb(&self, lab: Lab) -> Option<Rgb> {
        if !self.accepts_lightness(lab.l) {
            trace!(
                "rejecting Lab lightness {} outside [{}, {}]",
                lab.l, self.min_lightness, self.max_lightness
            );
            return None;
        }

        Some(self.xyz_to_rgb(self.lab_to_xyz(lab)))
    }

    /// Like [`lab_to_rgb`](Self::lab_to_rgb), reporting the rejected value
    pub fn try_lab_to_rgb(&self, lab: Lab) -> Result<Rgb> {
        self.lab_to_rgb(lab).ok_or(Error::LightnessOutOfRange {
            value: lab.l,
            index: None,
        })
    }

    /// sRGB (0–255) → XYZ
    #[inline]
    pub fn rgb_to_xyz(&self, rgb: Rgb) -> Xyz {
        Xyz::from_rgb(rgb)
    }

    /// XYZ → Lab relative to this converter's white
    #[inline]
    pub fn xyz_to_lab(&self, xyz: Xyz) -> Lab {
        Lab::from_xyz_with_white(xyz, &self.white)
    }

    /// sRGB (0–255) → XYZ → Lab
    pub fn rgb_to_lab(&self, rgb: Rgb) -> Lab {
        self.xyz_to_lab(self.rgb_to_xyz(rgb))
    }

    /// Convert a slice of Lab colors
    ///
    /// Every lightness is checked before anything is written, so `dst` is
    /// untouched on error.
    pub fn convert_labs(&self, src: &[Lab], dst: &mut [Rgb]) -> Result<()> {
        if src.len() != dst.len() {
            debug!("lab buffer of {} pixels, rgb buffer of {}", src.len(), dst.len());
            return Err(Error::BufferSize {
                expected: src.len(),
                actual: dst.len(),
            });
        }

        if let Some((index, lab)) = src
            .iter()
            .enumerate()
            .find(|(_, lab)| !self.accepts_lightness(lab.l))
        {
            trace!("rejecting pixel {} with Lab lightness {}", index, lab.l);
            return Err(Error::LightnessOutOfRange {
                value: lab.l,
                index: Some(index),
            });
        }

        for (lab, rgb) in src.iter().zip(dst.iter_mut()) {
            *rgb = self.xyz_to_rgb(self.lab_to_xyz(*lab));
        }
        Ok(())
    }

    /// Convert interleaved `L, a, b` triples into interleaved `R, G, B`
    ///
    /// Both buffers must be the same length and a multiple of 3. For a
    /// ragged `src`, [`Error::BufferSize`] reports the largest whole-pixel
    /// length as `expected` and the given length as `actual`.
    pub fn convert_lab_buffer(&self, src: &[f64], dst: &mut [f64]) -> Result<()> {
        if src.len() % 3 != 0 {
            debug!("lab buffer length {} is not a multiple of 3", src.len());
            return Err(Error::BufferSize {
                expected: src.len() - src.len() % 3,
                actual: src.len(),
            });
        }
        if src.len() != dst.len() {
            debug!("lab buffer length {}, rgb buffer length {}", src.len(), dst.len());
            return Err(Error::BufferSize {
                expected: src.len(),
                actual: dst.len(),
            });
        }

        let labs: &[Lab] = bytemuck::cast_slice(src);
        let rgbs: &mut [Rgb] = bytemuck::cast_slice_mut(dst);
        self.convert_labs(labs, rgbs)
    }
}

/// Inverse CIE Lab transform to D65 tristimulus values (0–100 scale)
///
/// No validation: any lightness is transformed mechanically.
pub fn lab_to_xyz(l: f64, a: f64, b: f64) -> Xyz {
    ColorConverter::DEFAULT.lab_to_xyz(Lab::new(l, a, b))
}

/// XYZ (0–100 scale) to sRGB (0–255 scale)
///
/// The result is not clamped or rounded. Channels below 0 or above 255 mark
/// an out-of-gamut color; clamp with [`Rgb::to_u8`] if 8-bit values are
/// needed.
pub fn xyz_to_rgb(x: f64, y: f64, z: f64) -> Rgb {
    ColorConverter::DEFAULT.xyz_to_rgb(Xyz::new(x, y, z))
}

/// Lab to sRGB, or `None` when `l` is outside [0, 100]
///
/// `a` and `b` are never validated and the output is never clamped.
pub fn lab_to_rgb(l: f64, a: f64, b: f64) -> Option<Rgb> {
    ColorConverter::DEFAULT.lab_to_rgb(Lab::new(l, a, b))
}

/// [`lab_to_rgb`] with the default Lab `(50, 0, 0)`
pub fn lab_to_rgb_default() -> Option<Rgb> {
    ColorConverter::DEFAULT.lab_to_rgb(Lab::default())
}

/// Lab to sRGB, failing with [`Error::LightnessOutOfRange`]
pub fn try_lab_to_rgb(l: f64, a: f64, b: f64) -> Result<Rgb> {
    ColorConverter::DEFAULT.try_lab_to_rgb(Lab::new(l, a, b))
}

/// sRGB (0–255 scale) to XYZ (0–100 scale)
pub fn rgb_to_xyz(r: f64, g: f64, b: f64) -> Xyz {
    ColorConverter::DEFAULT.rgb_to_xyz(Rgb::new(r, g, b))
}

/// XYZ (0–100 scale) to Lab, D65 white
pub fn xyz_to_lab(x: f64, y: f64, z: f64) -> Lab {
    ColorConverter::DEFAULT.xyz_to_lab(Xyz::new(x, y, z))
}

/// sRGB (0–255 scale) to Lab, D65 white
pub fn rgb_to_lab(r: f64, g: f64, b: f64) -> Lab {
    ColorConverter::DEFAULT.rgb_to_lab(Rgb::new(r, g, b))
}

/// Convert interleaved Lab triples with the default converter
pub fn convert_lab_buffer(src: &[f64], dst: &mut [f64]) -> Result<()> {
    ColorConverter::DEFAULT.convert_lab_buffer(src, dst)
}
