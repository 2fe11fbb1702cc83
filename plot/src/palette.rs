//! Deterministic default palette.
//!
//! Up to ten colours come from the usual categorical cycle; larger palettes
//! switch to evenly spaced hues. Hues that round to an 8-bit colour already
//! handed out are nudged to the next free RGB value, so every palette of up
//! to 2^24 colours is free of repeats.

use std::collections::HashSet;

use crate::model::Color;

/// Number of distinct 8-bit RGB colours.
const RGB_SPACE: u32 = 1 << 24;

/// The ten-colour categorical cycle.
pub const CATEGORICAL: [Color; 10] = [
    Color::rgb(0x1f, 0x77, 0xb4),
    Color::rgb(0xff, 0x7f, 0x0e),
    Color::rgb(0x2c, 0xa0, 0x2c),
    Color::rgb(0xd6, 0x27, 0x28),
    Color::rgb(0x94, 0x67, 0xbd),
    Color::rgb(0x8c, 0x56, 0x4b),
    Color::rgb(0xe3, 0x77, 0xc2),
    Color::rgb(0x7f, 0x7f, 0x7f),
    Color::rgb(0xbc, 0xbd, 0x22),
    Color::rgb(0x17, 0xbe, 0xcf),
];

/// Returns `size` colours. The same `size` always yields the same sequence.
#[must_use]
pub fn default_palette(size: usize) -> Vec<Color> {
    if size <= CATEGORICAL.len() {
        return CATEGORICAL[..size].to_vec();
    }
    let mut seen = HashSet::with_capacity(size);
    (0..size)
        .map(|i| {
            let mut color = Color::from_hsv(360.0 * i as f64 / size as f64, 0.75, 0.85);
            for _ in 0..RGB_SPACE {
                if seen.insert(color) {
                    break;
                }
                color = next_rgb(color);
            }
            color
        })
        .collect()
}

/// The colour after `c` in 24-bit RGB order, wrapping at white.
fn next_rgb(c: Color) -> Color {
    let packed = ((u32::from(c.r) << 16) | (u32::from(c.g) << 8) | u32::from(c.b)) + 1;
    let packed = packed % RGB_SPACE;
    Color::rgb((packed >> 16) as u8, (packed >> 8) as u8, packed as u8)
}
