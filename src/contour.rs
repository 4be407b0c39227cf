// Contour estimator: a 3x3 binomial blur of the binary samples.
// Visual: 0 far outside, 1 deep inside, anything in between means the shape
// edge crosses this pixel's neighbourhood.

use crate::types::SampleWindow;

/// 1/16 at corners, 1/8 on edges, 1/4 at the centre. Sums to exactly 1.
pub const KERNEL: [f64; 9] = [
    0.0625, 0.1250, 0.0625,
    0.1250, 0.2500, 0.1250,
    0.0625, 0.1250, 0.0625,
];

/// Blurred membership value v in [0,1].
#[inline]
pub fn estimate(window: &SampleWindow) -> f64 {
    window.0.iter().zip(KERNEL).map(|(s, k)| s * k).sum()
}

/// Only pixels strictly between "all outside" and "all inside" get ink.
#[inline]
pub fn is_on_contour(v: f64) -> bool {
    v > 0.0 && v < 1.0
}
