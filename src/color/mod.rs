mod rainbow;
mod utils;

pub use rainbow::{RAINBOW_PRIMARY, RAINBOW_TUNED_LEDS, fill_rainbow, intermediate_weights};
pub use utils::{
    Palette, clear, fill, fill_indices, fill_palette, fill_range, halve, rgb_from_u32,
    rotate_right, rotate_right_by,
};

use smart_leds::RGB8;

pub type Rgb = RGB8;

/// All channels off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
