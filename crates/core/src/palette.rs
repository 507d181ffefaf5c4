//! Luminance to glyph mapping.

use crate::types::{LUMINANCE_RAMP, LUMINANCE_SCALE};

/// Palette index for a luminance value.
///
/// Returns `None` for surfaces facing away from the light (`luminance <= 0`,
/// including NaN). The index is clamped to the last palette entry.
#[inline(always)]
pub fn luminance_index(luminance: f64) -> Option<usize> {
    if luminance > 0.0 {
        let i = (luminance * LUMINANCE_SCALE) as usize;
        Some(i.min(LUMINANCE_RAMP.len() - 1))
    } else {
        None
    }
}

/// Glyph for a luminance value, or `None` when the surface is unlit.
#[inline(always)]
pub fn glyph_for(luminance: f64) -> Option<char> {
    luminance_index(luminance).map(|i| LUMINANCE_RAMP[i])
}
