// Alpha mapper: how much ink, and which gray, for a blurred contour value v.
//
// Black & white (default):
//
// 1|        ----------------
//  |       /                \
//  |      /                  \
//  |     /                    \
//  |--------------------------------
//  0   0.25               0.75     1
//
// A tent around v = 0.5, doubled and clamped, so the middle of the edge is
// opaque and only the rims fade out. The color ramps black -> white across it.
//
// Simple:
//
// 1|    -
//  |   / \
//  |  /   \
//  | /     \
//  |----------------------------------
//  0  0.25  0.5                      1
//
// Only the outside-facing half of the edge is inked, always in black.

use crate::config::OutlineStyle;
use crate::types::BlendParams;

#[inline]
fn clamp(v: f64, min: f64, max: f64) -> f64 {
    v.min(max).max(min)
}

impl OutlineStyle {
    /// Stroke opacity in [0,1].
    #[inline]
    pub fn alpha(self, v: f64) -> f64 {
        match self {
            OutlineStyle::BlackAndWhite => ((1.0 - (2.0 * v - 1.0).abs()) * 2.0).min(1.0),
            OutlineStyle::Simple => (1.0 - (4.0 * v - 1.0).abs()).max(0.0),
        }
    }

    /// Stroke gray level in [0,1].
    #[inline]
    pub fn source_color(self, v: f64) -> f64 {
        match self {
            OutlineStyle::BlackAndWhite => clamp(v * 1.5 - 0.25, 0.0, 1.0),
            OutlineStyle::Simple => 0.0,
        }
    }

    /// None when nothing would be drawn.
    #[inline]
    pub fn blend_params(self, v: f64) -> Option<BlendParams> {
        let alpha = self.alpha(v);
        if alpha <= 0.0 {
            return None;
        }
        Some(BlendParams { alpha, source_color: self.source_color(v) })
    }
}
