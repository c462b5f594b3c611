//! Reference white points
//!
//! Tristimulus values on the 0–100 scale (Y = 100), 2° observer, as used by
//! the Lab ↔ XYZ formulas in this crate.

use crate::color::Xyz;

/// A white point definition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhitePoint {
    /// Name of the illuminant
    pub name: &'static str,
    /// CIE XYZ coordinates (Y normalized to 100)
    pub xyz: Xyz,
}

impl WhitePoint {
    /// Create a new white point
    pub const fn new(name: &'static str, x: f64, y: f64, z: f64) -> Self {
        Self {
            name,
            xyz: Xyz::new(x, y, z),
        }
    }
}

impl Default for WhitePoint {
    fn default() -> Self {
        D65
    }
}

/// CIE Standard Illuminant D65 (noon daylight, ~6504K)
///
/// Reference white for sRGB and the default for every conversion here.
pub const D65: WhitePoint = WhitePoint::new("D65", 95.047, 100.0, 108.883);

/// CIE Standard Illuminant D50 (horizon light, ~5003K)
pub const D50: WhitePoint = WhitePoint::new("D50", 96.422, 100.0, 82.521);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_d65_values() {
        assert_eq!(D65.xyz.x, 95.047);
        assert_eq!(D65.xyz.y, 100.0);
        assert_eq!(D65.xyz.z, 108.883);
        assert_eq!(WhitePoint::default(), D65);
    }

    #[test]
    fn test_d50_values() {
        assert_eq!(D50.xyz.to_array(), [96.422, 100.0, 82.521]);
        assert_ne!(D50, D65);
    }
}
