//! Channel difference statistics
//!
//! Differences are absolute channel deltas on the 0–255 scale.

/// Statistics from an RGB comparison
#[derive(Debug, Clone, Default)]
pub struct ChannelStats {
    /// Mean absolute channel difference
    pub mean: f64,
    /// Maximum absolute channel difference
    pub max: f64,
    /// Number of colors compared
    pub count: usize,
}

impl ChannelStats {
    /// Below half a code value everywhere, so identical after rounding
    /// except on ties
    pub fn is_excellent(&self) -> bool {
        self.max < 0.5
    }

    /// Within one 8-bit code value everywhere
    pub fn is_acceptable(&self) -> bool {
        self.max < 1.0
    }
}

/// Compare two equally long lists of RGB colors
///
/// # Panics
///
/// Panics if the lists differ in length.
pub fn compare_rgb(a: &[labconv_core::Rgb], b: &[labconv_core::Rgb]) -> ChannelStats {
    assert_eq!(a.len(), b.len(), "color lists differ in length");

    let diffs: Vec<f64> = a
        .iter()
        .zip(b)
        .flat_map(|(x, y)| {
            [
                (x.r - y.r).abs(),
                (x.g - y.g).abs(),
                (x.b - y.b).abs(),
            ]
        })
        .collect();

    if diffs.is_empty() {
        return ChannelStats::default();
    }

    ChannelStats {
        mean: diffs.iter().sum::<f64>() / diffs.len() as f64,
        max: diffs.iter().copied().fold(0.0, f64::max),
        count: a.len(),
    }
}
