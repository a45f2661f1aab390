mod palette;
mod utils;

pub use palette::{
    GradientStop, PALETTE_COUNT, PALETTES, Palette16, PaletteSelector, color_from_palette,
    heat_to_index,
};
use smart_leds::RGB8;
pub use utils::{average_colors, blend_colors, rgb_from_u32};

pub type Rgb = RGB8;
