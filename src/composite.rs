// Compositor: grayscale "over" blend of the stroke onto the background.
// The 8-bit write truncates toward zero (not rounding), which keeps strokes
// a hair darker than a rounding blend would.

use crate::types::BlendParams;

/// Blend `params` over the destination gray `dst` and return the new value.
#[inline]
pub fn blend(dst: u8, params: BlendParams) -> u8 {
    if params.alpha <= 0.0 {
        return dst;
    }
    let dst_norm = dst as f64 / 255.0;
    let mixed = dst_norm + (params.source_color - dst_norm) * params.alpha;
    // `as` truncates and saturates into 0..=255
    (mixed * 255.0) as u8
}

#[inline]
pub fn blend_in_place(dst: &mut u8, params: BlendParams) {
    *dst = blend(*dst, params);
}
