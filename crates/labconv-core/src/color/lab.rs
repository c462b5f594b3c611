//! CIELAB (L*a*b*) Color Space
//!
//! L*a*b* is a perceptually uniform color space where equal distances
//! correspond to roughly equal perceived color differences.
//!
//! - L*: Lightness (0 = black, 100 = white)
//! - a*: Green-red axis (negative = green, positive = red)
//! - b*: Blue-yellow axis (negative = blue, positive = yellow)
//!
//! The transforms here use the classic `0.008856` / `7.787` constants rather
//! than the exact CIE fractions, and never validate their input.

use bytemuck::{Pod, Zeroable};

use crate::color::{D65, WhitePoint, Xyz};

/// Cube threshold between the linear and cubic segments
pub const LAB_EPSILON: f64 = 0.008856;

/// Slope of the linear segment
pub const LAB_SLOPE: f64 = 7.787;

const LAB_OFFSET: f64 = 16.0 / 116.0;

/// CIELAB color coordinates
///
/// `Lab::default()` is medium gray `(50, 0, 0)`, the value used when a
/// caller has no color in mind.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Lab {
    /// Lightness (0 to 100)
    pub l: f64,
    /// Green-red axis (typically -128 to 127)
    pub a: f64,
    /// Blue-yellow axis (typically -128 to 127)
    pub b: f64,
}

impl Default for Lab {
    fn default() -> Self {
        Self::new(50.0, 0.0, 0.0)
    }
}

impl Lab {
    /// Create a new Lab color
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Create Lab from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            l: arr[0],
            a: arr[1],
            b: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }

    /// Replace lightness
    #[inline]
    pub const fn with_l(self, l: f64) -> Self {
        Self { l, ..self }
    }

    /// Replace the a* component
    #[inline]
    pub const fn with_a(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Replace the b* component
    #[inline]
    pub const fn with_b(self, b: f64) -> Self {
        Self { b, ..self }
    }

    /// Convert to XYZ with the D65 white point
    pub fn to_xyz(&self) -> Xyz {
        self.to_xyz_with_white(&D65)
    }

    /// Convert to XYZ with a specific white point
    ///
    /// Any input is accepted, including lightness outside [0, 100];
    /// non-finite input yields non-finite output.
    pub fn to_xyz_with_white(&self, white: &WhitePoint) -> Xyz {
        let fy = (self.l + 16.0) / 116.0;
        let fx = self.a / 500.0 + fy;
        let fz = fy - self.b / 200.0;

        Xyz::new(
            white.xyz.x * lab_f_inv(fx),
            white.xyz.y * lab_f_inv(fy),
            white.xyz.z * lab_f_inv(fz),
        )
    }

    /// Convert from XYZ with the D65 white point
    pub fn from_xyz(xyz: Xyz) -> Self {
        Self::from_xyz_with_white(xyz, &D65)
    }

    /// Convert from XYZ with a specific white point
    pub fn from_xyz_with_white(xyz: Xyz, white: &WhitePoint) -> Self {
        let fx = lab_f(xyz.x / white.xyz.x);
        let fy = lab_f(xyz.y / white.xyz.y);
        let fz = lab_f(xyz.z / white.xyz.z);

        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    /// Check if approximately equal to another Lab color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }
}

/// Lab forward function: f(t) for XYZ → Lab conversion
#[inline]
fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        LAB_SLOPE * t + LAB_OFFSET
    }
}

/// Lab inverse function: f⁻¹(t) for Lab → XYZ conversion
///
/// The branch is chosen on `t³`, not on `t`.
#[inline]
fn lab_f_inv(t: f64) -> f64 {
    let cubed = t * t * t;
    if cubed > LAB_EPSILON {
        cubed
    } else {
        (t - LAB_OFFSET) / LAB_SLOPE
    }
}

impl From<[f64; 3]> for Lab {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<(f64, f64, f64)> for Lab {
    fn from((l, a, b): (f64, f64, f64)) -> Self {
        Self::new(l, a, b)
    }
}

impl From<Lab> for [f64; 3] {
    fn from(lab: Lab) -> Self {
        lab.to_array()
    }
}
