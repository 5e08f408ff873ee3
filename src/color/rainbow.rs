//! Three-sector rainbow gradient
//!
//! The strip is split into three equal sectors, one per primary (red, green,
//! blue). Each sector starts on its pure primary and then cross-fades into
//! the next one using a lookup table instead of trigonometry, which keeps the
//! generator integer-only.
//!
//! ```text
//! 15 LEDs, sector length 5
//! colors  R . . . . G . . . . B . . . .
//! phases  P i i i i P i i i i P i i i i
//! ```

use crate::color::Rgb;

/// Number of LEDs the lookup tables are tuned for. Longer strips repeat the
/// same three-sector layout.
pub const RAINBOW_TUNED_LEDS: usize = 18;

/// Intensity of a pure primary at a sector start
pub const RAINBOW_PRIMARY: u8 = 127;

const WEIGHTS_2: [u8; 1] = [127];
const WEIGHTS_3: [u8; 2] = [127, 63];
const WEIGHTS_4: [u8; 3] = [127, 85, 42];
const WEIGHTS_5: [u8; 4] = [127, 95, 63, 32];
const WEIGHTS_6: [u8; 5] = [127, 102, 76, 51, 26];

/// Interpolation weights for a sector of `sector` LEDs.
///
/// The slice has `sector - 1` strictly decreasing entries. Sectors longer
/// than six LEDs use the six-LED table.
pub const fn intermediate_weights(sector: usize) -> &'static [u8] {
    match sector {
        0 | 1 => &[],
        2 => &WEIGHTS_2,
        3 => &WEIGHTS_3,
        4 => &WEIGHTS_4,
        5 => &WEIGHTS_5,
        _ => &WEIGHTS_6,
    }
}

/// Fill the buffer with the rainbow gradient
pub fn fill_rainbow(leds: &mut [Rgb]) {
    let tuned = leds.len().min(RAINBOW_TUNED_LEDS);
    let sector = (tuned / 3).max(1);
    let weights = intermediate_weights(sector);

    let mut primary = 0;
    let mut triplet = [0u8; 3];

    for (i, led) in leds.iter_mut().enumerate() {
        let phase = i % sector;

        if phase == 0 {
            triplet = [0; 3];
            triplet[primary] = RAINBOW_PRIMARY;
        } else {
            triplet[primary] = weights[phase - 1];
            triplet[(primary + 1) % 3] = weights[sector - phase - 1];
        }

        *led = Rgb {
            r: triplet[0],
            g: triplet[1],
            b: triplet[2],
        };

        if phase == sector - 1 {
            primary = (primary + 1) % 3;
        }
    }
}
