//! Random byte source for the random-color patterns

use crate::color::Rgb;

/// Seed used by [`XorShift32::default`]
pub const DEFAULT_SEED: u32 = 42;

/// Source of pseudo-random bytes
///
/// Implement this for a hardware RNG when one is available; otherwise
/// [`XorShift32`] is good enough for picking colors.
pub trait RandomSource {
    /// Next random byte
    fn next_byte(&mut self) -> u8;

    /// Random color with every channel limited to `0..=63`, keeping the
    /// current draw of a fully lit strip low.
    fn next_color(&mut self) -> Rgb {
        Rgb {
            r: self.next_byte() >> 2,
            g: self.next_byte() >> 2,
            b: self.next_byte() >> 2,
        }
    }
}

/// Marsaglia xorshift generator with 32 bits of state
#[derive(Debug, Clone)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    /// Create a generator. A zero seed is replaced by [`DEFAULT_SEED`],
    /// since xorshift never leaves the all-zero state.
    pub const fn new(seed: u32) -> Self {
        let state = if seed == 0 { DEFAULT_SEED } else { seed };
        Self { state }
    }

    const fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

impl Default for XorShift32 {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl RandomSource for XorShift32 {
    #[allow(clippy::cast_possible_truncation)]
    fn next_byte(&mut self) -> u8 {
        (self.next_u32() >> 24) as u8
    }
}
