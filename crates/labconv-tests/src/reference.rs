//! Reference implementation wrappers
//!
//! `palette` computes its sRGB matrix from the primaries and uses the exact
//! CIE constants, so agreement is close but not bit-exact.

use labconv_core::{Lab, Rgb};
use palette::Srgb;
use palette::convert::FromColorUnclamped;
use palette::white_point::D65;

type PaletteLab = palette::Lab<D65, f64>;

/// Lab → sRGB (0–255 scale, unclamped) via palette
pub fn palette_lab_to_rgb(lab: Lab) -> Rgb {
    let srgb = Srgb::<f64>::from_color_unclamped(PaletteLab::new(lab.l, lab.a, lab.b));
    Rgb::new(srgb.red * 255.0, srgb.green * 255.0, srgb.blue * 255.0)
}

/// sRGB (0–255 scale) → Lab via palette
pub fn palette_rgb_to_lab(rgb: Rgb) -> Lab {
    let srgb = Srgb::new(rgb.r / 255.0, rgb.g / 255.0, rgb.b / 255.0);
    let lab = PaletteLab::from_color_unclamped(srgb);
    Lab::new(lab.l, lab.a, lab.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_white() {
        let rgb = palette_lab_to_rgb(Lab::new(100.0, 0.0, 0.0));
        assert!(rgb.approx_eq(&Rgb::WHITE, 0.01), "{:?}", rgb);
    }

    #[test]
    fn test_reference_black() {
        let lab = palette_rgb_to_lab(Rgb::BLACK);
        assert!(lab.l.abs() < 1e-9, "{:?}", lab);
    }
}
