use crate::color::{BLACK, Rgb};

/// Create an RGB color from a u32 value (0xRRGGBB format)
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Fill every LED with one color
pub fn fill(leds: &mut [Rgb], color: Rgb) {
    for led in leds {
        *led = color;
    }
}

/// Turn every LED off
pub fn clear(leds: &mut [Rgb]) {
    fill(leds, BLACK);
}

/// Rotate the buffer one position to the right, wrapping the last LED to
/// the front.
pub fn rotate_right(leds: &mut [Rgb]) {
    if leds.is_empty() {
        return;
    }
    leds.rotate_right(1);
}

/// Apply [`rotate_right`] `steps` times
pub fn rotate_right_by(leds: &mut [Rgb], steps: usize) {
    for _ in 0..steps {
        rotate_right(leds);
    }
}

/// Halve the intensity of every channel.
///
/// Returns the number of channels (not LEDs) that are still nonzero
/// afterwards. Zero means the buffer is completely dark.
pub fn halve(leds: &mut [Rgb]) -> usize {
    let mut remaining = 0;
    for led in leds.iter_mut() {
        for channel in [&mut led.r, &mut led.g, &mut led.b] {
            *channel >>= 1;
            if *channel != 0 {
                remaining += 1;
            }
        }
    }
    remaining
}

/// Fill LEDs `start..=end` with a color.
///
/// The range is not checked against the buffer length; an invalid range
/// panics on slice indexing.
pub fn fill_range(leds: &mut [Rgb], start: usize, end: usize, color: Rgb) {
    fill(&mut leds[start..=end], color);
}

/// Fill the LEDs at the listed positions with a color.
///
/// Positions are not checked against the buffer length.
pub fn fill_indices(leds: &mut [Rgb], indices: &[u8], color: Rgb) {
    for &index in indices {
        leds[usize::from(index)] = color;
    }
}

/// Three-color palettes used by the flashing palette pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    /// Red, yellow and orange
    Warm,
    /// Blue, teal and cyan
    Cool,
}

// Rows are (dominant, second, minor) intensities. Warm puts the dominant
// value on red, cool on blue.
const PALETTE_ROWS: [[u8; 3]; 3] = [[128, 0, 0], [76, 76, 0], [102, 51, 0]];

impl Palette {
    /// Color for one palette row
    pub const fn color(self, row: usize) -> Rgb {
        let [dominant, second, minor] = PALETTE_ROWS[row % 3];
        match self {
            Self::Warm => Rgb {
                r: dominant,
                g: second,
                b: minor,
            },
            Self::Cool => Rgb {
                r: minor,
                g: second,
                b: dominant,
            },
        }
    }
}

/// Lay out the palette across the buffer.
///
/// Position `i` takes row `i % 3`, except that the first two LEDs are
/// physically wired in swapped order, so they take rows 1 and 0.
pub fn fill_palette(leds: &mut [Rgb], palette: Palette) {
    for (i, led) in leds.iter_mut().enumerate() {
        let row = match i {
            0 => 1,
            1 => 0,
            _ => i % 3,
        };
        *led = palette.color(row);
    }
}
