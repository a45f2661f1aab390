//! 16-entry palettes and heat-to-color mapping.
//!
//! A palette is sampled with an 8-bit index: the high nibble picks an entry,
//! the low nibble blends toward the next one. Indices are clamped to
//! [`HEAT_INDEX_MAX`] so the last entry never blends back into the first.

use super::{Rgb, blend_colors, rgb_from_u32};
use crate::config::HEAT_INDEX_MAX;
use crate::math8::scale8;

const ENTRY_COUNT: usize = 16;

/// Distance between two entries on the 0-255 gradient axis (255 / 15)
const ENTRY_SPACING: u16 = 17;

/// Number of palettes in [`PALETTES`]
pub const PALETTE_COUNT: usize = 4;

/// Create a palette from 16 hex colors (0xRRGGBB format)
macro_rules! hex_palette {
    ($($color:expr),*) => {
        Palette16::new([
            $(rgb_from_u32($color)),*
        ])
    };
}

const BLACK: Rgb = rgb_from_u32(0x00_0000);
const WHITE: Rgb = rgb_from_u32(0xFF_FFFF);

/// Black through red and yellow to white, in even steps
#[allow(clippy::unreadable_literal)]
const HEAT: Palette16 = hex_palette![
    0x000000, 0x330000, 0x660000, 0x990000, 0xCC0000, 0xFF0000, 0xFF3300, 0xFF6600,
    0xFF9900, 0xFFCC00, 0xFFFF00, 0xFFFF33, 0xFFFF66, 0xFFFF99, 0xFFFFCC, 0xFFFFFF
];

const CLASSIC: Palette16 =
    Palette16::from_anchors(BLACK, rgb_from_u32(0xFF_0000), rgb_from_u32(0xFF_FF00), WHITE);

const ICE: Palette16 =
    Palette16::from_anchors(BLACK, rgb_from_u32(0x00_00FF), rgb_from_u32(0x00_FFFF), WHITE);

const TOXIC: Palette16 =
    Palette16::from_anchors(BLACK, rgb_from_u32(0x00_8000), rgb_from_u32(0x00_FF00), WHITE);

/// Built-in palette table, cycled by the palette button
pub static PALETTES: [Palette16; PALETTE_COUNT] = [HEAT, CLASSIC, ICE, TOXIC];

/// Control point of a gradient palette definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientStop {
    /// Position on the 0-255 gradient axis
    pub pos: u8,
    pub color: Rgb,
}

impl GradientStop {
    pub const fn new(pos: u8, color: Rgb) -> Self {
        Self { pos, color }
    }
}

/// Palette of 16 evenly spaced colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette16 {
    entries: [Rgb; ENTRY_COUNT],
}

impl Palette16 {
    pub const fn new(entries: [Rgb; ENTRY_COUNT]) -> Self {
        Self { entries }
    }

    /// Build a palette from sparse gradient stops
    ///
    /// Stops must be sorted by position. Entries before the first stop take
    /// its color, entries after the last stop take the last color. An empty
    /// stop list yields an all-black palette.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_gradient(stops: &[GradientStop]) -> Self {
        let mut entries = [BLACK; ENTRY_COUNT];
        if stops.is_empty() {
            return Self { entries };
        }

        let mut i = 0;
        while i < ENTRY_COUNT {
            let pos = (i as u16 * ENTRY_SPACING) as u8;

            let mut upper = 0;
            while upper < stops.len() && stops[upper].pos < pos {
                upper += 1;
            }

            entries[i] = if upper == stops.len() {
                stops[stops.len() - 1].color
            } else if upper == 0 || stops[upper].pos == pos {
                stops[upper].color
            } else {
                let lo = stops[upper - 1];
                let hi = stops[upper];
                let span = (hi.pos - lo.pos) as u16;
                let amount = ((pos - lo.pos) as u16 * 255 / span) as u8;
                blend_colors(lo.color, hi.color, amount)
            };
            i += 1;
        }

        Self { entries }
    }

    /// Build a palette from four evenly spaced anchor colors
    pub const fn from_anchors(c1: Rgb, c2: Rgb, c3: Rgb, c4: Rgb) -> Self {
        Self::from_gradient(&[
            GradientStop::new(0, c1),
            GradientStop::new(85, c2),
            GradientStop::new(170, c3),
            GradientStop::new(255, c4),
        ])
    }

    pub const fn entries(&self) -> &[Rgb; ENTRY_COUNT] {
        &self.entries
    }
}

/// Map a raw heat value (0-255) onto the palette index range (0-240)
#[inline]
pub const fn heat_to_index(heat: u8) -> u8 {
    scale8(heat, HEAT_INDEX_MAX)
}

/// Look up an interpolated color
///
/// Indices above [`HEAT_INDEX_MAX`] are clamped.
pub fn color_from_palette(palette: &Palette16, index: u8) -> Rgb {
    let index = index.min(HEAT_INDEX_MAX);
    let hi = usize::from(index >> 4);
    let lo = index & 0x0F;

    let entry = palette.entries[hi];
    if lo == 0 {
        return entry;
    }
    let next = palette.entries[(hi + 1).min(ENTRY_COUNT - 1)];
    blend_colors(entry, next, lo << 4)
}

/// Cyclic selection over a palette table of `N` entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteSelector<const N: usize> {
    index: usize,
}

impl<const N: usize> PaletteSelector<N> {
    pub const fn new() -> Self {
        const { assert!(N > 0, "palette table must not be empty") };
        Self { index: 0 }
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    /// Step to the next palette, wrapping at the end of the table
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % N;
        self.index
    }

    pub fn current<'a>(&self, table: &'a [Palette16; N]) -> &'a Palette16 {
        &table[self.index % N]
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}

impl<const N: usize> Default for PaletteSelector<N> {
    fn default() -> Self {
        Self::new()
    }
}
