//! Test sample generation
//!
//! All random patterns are seeded so failures reproduce.

use labconv_core::{Lab, Rgb};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::reference::palette_rgb_to_lab;

/// Lab sample sets
#[derive(Debug, Clone, Copy)]
pub enum LabPattern {
    /// Neutral axis, L from 0 to 100
    GrayRamp,
    /// Uniform L in [0, 100], a and b in [-128, 127]
    Random(u64),
    /// Lab values of random 8-bit sRGB colors, so always in gamut
    ///
    /// Lightness is clamped to [0, 100] against rounding at white.
    InGamut(u64),
    /// L outside [0, 100] on either side
    OutOfRange(u64),
}

/// Generate `count` Lab samples
pub fn generate_labs(pattern: LabPattern, count: usize) -> Vec<Lab> {
    match pattern {
        LabPattern::GrayRamp => (0..count)
            .map(|i| {
                let t = i as f64 / (count.max(2) - 1) as f64;
                Lab::new(t * 100.0, 0.0, 0.0)
            })
            .collect(),
        LabPattern::Random(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..count)
                .map(|_| {
                    Lab::new(
                        rng.gen_range(0.0..=100.0),
                        rng.gen_range(-128.0..=127.0),
                        rng.gen_range(-128.0..=127.0),
                    )
                })
                .collect()
        }
        LabPattern::InGamut(seed) => generate_srgb(seed, count)
            .into_iter()
            .map(palette_rgb_to_lab)
            .map(|lab| lab.with_l(lab.l.clamp(0.0, 100.0)))
            .collect(),
        LabPattern::OutOfRange(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..count)
                .map(|i| {
                    let l = if i % 2 == 0 {
                        rng.gen_range(-1000.0..-1e-6)
                    } else {
                        rng.gen_range(100.000001..1000.0)
                    };
                    Lab::new(l, rng.gen_range(-128.0..=127.0), rng.gen_range(-128.0..=127.0))
                })
                .collect()
        }
    }
}

/// Generate `count` random 8-bit sRGB colors
pub fn generate_srgb(seed: u64, count: usize) -> Vec<Rgb> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let mut px = [0u8; 3];
            rng.fill_bytes(&mut px);
            Rgb::from(px)
        })
        .collect()
}
