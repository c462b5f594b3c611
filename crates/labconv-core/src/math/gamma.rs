//! sRGB transfer function
//!
//! IEC 61966-2-1 companding on unit-range values. Neither direction clamps:
//! values below zero take the linear segment and values above one keep
//! following the power segment.

/// Linear-light threshold below which encoding is a straight line
pub const SRGB_ENCODE_THRESHOLD: f64 = 0.0031308;

/// Encoded threshold below which decoding is a straight line
pub const SRGB_DECODE_THRESHOLD: f64 = 0.04045;

/// sRGB gamma encode (linear → encoded)
#[inline]
pub fn srgb_gamma_encode(linear: f64) -> f64 {
    if linear > SRGB_ENCODE_THRESHOLD {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    } else {
        12.92 * linear
    }
}

/// sRGB gamma decode (encoded → linear)
#[inline]
pub fn srgb_gamma_decode(encoded: f64) -> f64 {
    if encoded > SRGB_DECODE_THRESHOLD {
        ((encoded + 0.055) / 1.055).powf(2.4)
    } else {
        encoded / 12.92
    }
}
