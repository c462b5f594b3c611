//! Behavioral properties of the conversion pipeline
//!
//! Lightness validation, purity, known values, and the no-clamp contract.

use labconv_core::{
    ColorConverter, Error, Lab, convert_lab_buffer, lab_to_rgb, lab_to_rgb_default, lab_to_xyz,
    try_lab_to_rgb, xyz_to_rgb,
};
use labconv_tests::patterns::{LabPattern, generate_labs};
use rayon::prelude::*;

static CHROMA: [f64; 7] = [-1000.0, -128.0, -50.0, 0.0, 50.0, 127.0, 1000.0];

#[test]
fn test_valid_lightness_always_converts() {
    // Dense sweep, including both endpoints and wild chroma.
    let ls: Vec<f64> = (0..=400).map(|i| i as f64 / 4.0).collect();

    let failures: Vec<(f64, f64, f64)> = ls
        .par_iter()
        .flat_map_iter(|&l| {
            CHROMA
                .iter()
                .flat_map(move |&a| CHROMA.iter().map(move |&b| (l, a, b)))
        })
        .filter(|&(l, a, b)| lab_to_rgb(l, a, b).is_none())
        .collect();

    assert!(failures.is_empty(), "rejected in-range inputs: {:?}", failures);

    for lab in generate_labs(LabPattern::Random(1), 5000) {
        assert!(lab_to_rgb(lab.l, lab.a, lab.b).is_some(), "{:?}", lab);
    }
}

#[test]
fn test_invalid_lightness_never_converts() {
    for lab in generate_labs(LabPattern::OutOfRange(2), 5000) {
        assert_eq!(lab_to_rgb(lab.l, lab.a, lab.b), None, "{:?}", lab);
    }
    for l in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -f64::EPSILON, 100.0 + 1e-9] {
        assert_eq!(lab_to_rgb(l, 0.0, 0.0), None, "l = {}", l);
    }
}

#[test]
fn test_black_y_component() {
    let xyz = lab_to_xyz(0.0, 0.0, 0.0);
    assert_eq!(xyz.y, 0.0);
}

#[test]
fn test_known_values() {
    let gray = lab_to_rgb(50.0, 0.0, 0.0).expect("mid gray");
    for c in gray.to_array() {
        assert!((c - 119.0).abs() <= 2.0, "gray channel {}", c);
    }
    assert!((gray.r - gray.g).abs() < 0.05 && (gray.g - gray.b).abs() < 0.05);

    let white = lab_to_rgb(100.0, 0.0, 0.0).expect("white");
    for c in white.to_array() {
        assert!((c - 255.0).abs() <= 1.0, "white channel {}", c);
    }

    assert_eq!(lab_to_rgb_default(), Some(gray));
    assert_eq!(
        ColorConverter::default().lab_to_rgb(Lab::default()),
        Some(gray)
    );
}

#[test]
fn test_achromatic_ramp_stays_neutral() {
    for lab in generate_labs(LabPattern::GrayRamp, 101) {
        let rgb = lab_to_rgb(lab.l, 0.0, 0.0).expect("in range");
        let spread = rgb.r.max(rgb.g).max(rgb.b) - rgb.r.min(rgb.g).min(rgb.b);
        assert!(spread < 0.1, "L={} gave {:?}", lab.l, rgb);
    }
}

#[test]
fn test_purity_bit_identical() {
    let labs = generate_labs(LabPattern::Random(99), 1000);

    let forward: Vec<[u64; 3]> = labs
        .iter()
        .map(|lab| bits(lab_to_rgb(lab.l, lab.a, lab.b)))
        .collect();

    // Reverse order, then in parallel: no hidden state may leak between calls.
    let mut backward: Vec<[u64; 3]> = labs
        .iter()
        .rev()
        .map(|lab| bits(lab_to_rgb(lab.l, lab.a, lab.b)))
        .collect();
    backward.reverse();

    let parallel: Vec<[u64; 3]> = labs
        .par_iter()
        .map(|lab| bits(lab_to_rgb(lab.l, lab.a, lab.b)))
        .collect();

    assert_eq!(forward, backward);
    assert_eq!(forward, parallel);
}

fn bits(rgb: Option<labconv_core::Rgb>) -> [u64; 3] {
    rgb.expect("in range").to_array().map(f64::to_bits)
}

#[test]
fn test_stages_accept_anything() {
    // No validation below the composed step.
    let xyz = lab_to_xyz(-50.0, 0.0, 0.0);
    assert!(xyz.y < 0.0);
    let rgb = xyz_to_rgb(xyz.x, xyz.y, xyz.z);
    assert!(rgb.r < 0.0 && rgb.g < 0.0 && rgb.b < 0.0);

    let rgb = xyz_to_rgb(f64::INFINITY, 0.0, 0.0);
    assert!(rgb.to_array().iter().any(|c| !c.is_finite()));
}

#[test]
fn test_out_of_gamut_is_visible() {
    let saturated = lab_to_rgb(60.0, 120.0, 120.0).expect("in range");
    assert!(!saturated.is_in_gamut(), "{:?}", saturated);

    let [r, g, _] = saturated.to_u8();
    assert_eq!((r, g), (255, 0));
}

#[test]
fn test_try_variant() -> anyhow::Result<()> {
    let rgb = try_lab_to_rgb(75.0, -20.0, 30.0)?;
    assert_eq!(Some(rgb), lab_to_rgb(75.0, -20.0, 30.0));

    let err = try_lab_to_rgb(-1.0, 0.0, 0.0).unwrap_err();
    assert!(matches!(err, Error::LightnessOutOfRange { value, index: None } if value == -1.0));
    Ok(())
}

#[test]
fn test_buffer_matches_scalar() -> anyhow::Result<()> {
    let labs = generate_labs(LabPattern::Random(5), 256);
    let src: Vec<f64> = labs.iter().flat_map(|lab| lab.to_array()).collect();
    let mut dst = vec![0.0; src.len()];
    convert_lab_buffer(&src, &mut dst)?;

    for (lab, rgb) in labs.iter().zip(dst.chunks_exact(3)) {
        let scalar = lab_to_rgb(lab.l, lab.a, lab.b).expect("in range");
        assert_eq!(rgb, &scalar.to_array()[..]);
    }
    Ok(())
}
