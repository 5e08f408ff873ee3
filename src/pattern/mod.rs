//! Pattern system with compile-time known pattern variants
//!
//! All patterns are stored in an enum to avoid heap allocations and opaque
//! parameter casts. Each pattern implements the [`Pattern`] trait and owns
//! its own cadence counter and state.

mod crazy;
mod fade;
mod palette;
mod rainbow;
mod reveal;
mod solid;
mod table;
mod walking;

pub use crazy::CrazyFlash;
pub use fade::{FADE_INTERVAL, FadeOut};
pub use palette::PaletteFlash;
pub use rainbow::{RainbowPattern, RainbowWheel};
pub use reveal::{
    ARC_SEED, INNER_RING, MIDDLE_RING, OUTER_RING, OccupancyMask, REVEAL_LEDS, RING_SEED,
    RadialReveal, RevealLayout,
};
pub use solid::SolidFill;
pub use table::{PatternTable, SNOWFLAKE_PATTERN_COUNT, snowflake_patterns};
pub use walking::{Segment, WalkingSegment};

use crate::color::Rgb;
use crate::random::RandomSource;

/// Ticks between steps of the flashing and walking patterns
pub const FLASH_INTERVAL: u8 = 7;

/// Ticks between steps of the rotating and revealing patterns
pub const WALK_INTERVAL: u8 = 16;

/// Outcome of one pattern step, fed back as the input of the next one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternStatus {
    /// First invocation: the pattern must fully initialize the buffer
    New,
    /// Buffer changed, the frame must be transmitted
    Refresh,
    /// Buffer unchanged, nothing to transmit
    NoChange,
    /// The fade-out transition has reached darkness
    FadeDone,
}

impl PatternStatus {
    /// Whether the caller has to transmit the buffer
    pub const fn needs_transmit(self) -> bool {
        matches!(self, Self::Refresh)
    }
}

pub trait Pattern {
    /// Advance the pattern by one animation tick
    ///
    /// `status` is the value returned by the previous call, or
    /// [`PatternStatus::New`] when the pattern has just been selected.
    fn step<R: RandomSource>(
        &mut self,
        leds: &mut [Rgb],
        status: PatternStatus,
        rng: &mut R,
    ) -> PatternStatus;
}

/// Counts animation ticks and fires on every `interval`-th one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cadence {
    interval: u8,
    count: u8,
}

impl Cadence {
    pub const fn new(interval: u8) -> Self {
        Self { interval, count: 0 }
    }

    pub const fn reset(&mut self) {
        self.count = 0;
    }

    /// Count one tick. Returns `true` when the interval has elapsed.
    pub const fn advance(&mut self) -> bool {
        self.count += 1;
        if self.count >= self.interval {
            self.count = 0;
            return true;
        }
        false
    }

    pub const fn interval(&self) -> u8 {
        self.interval
    }
}

/// Red at the current-limited intensity
pub const RED: Rgb = Rgb { r: 0x80, g: 0, b: 0 };
/// Green, dimmer than red and blue since the eye is more sensitive to it
pub const GREEN: Rgb = Rgb { r: 0, g: 0x60, b: 0 };
/// Blue at the current-limited intensity
pub const BLUE: Rgb = Rgb { r: 0, g: 0, b: 0x80 };
/// Orange used by the arc reveal
pub const ORANGE: Rgb = Rgb {
    r: 0x80,
    g: 0x30,
    b: 0,
};

/// Color parameter of the single-color patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSelector {
    Red,
    Green,
    Blue,
    /// A freshly drawn random color
    Random,
}

impl ColorSelector {
    /// Resolve the selector to a concrete color, drawing from `rng` for
    /// [`ColorSelector::Random`].
    pub fn resolve<R: RandomSource>(self, rng: &mut R) -> Rgb {
        match self {
            Self::Red => RED,
            Self::Green => GREEN,
            Self::Blue => BLUE,
            Self::Random => rng.next_color(),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Random => "random",
        }
    }
}

/// Pattern slot - enum containing all possible patterns
#[derive(Debug, Clone)]
pub enum PatternSlot {
    /// Whole strip in one color
    Solid(SolidFill),
    /// Rainbow gradient, optionally breathing
    Rainbow(RainbowPattern),
    /// Rainbow gradient rotating around the strip
    RainbowWheel(RainbowWheel),
    /// Warm or cool palette flashing down and back up
    PaletteFlash(PaletteFlash),
    /// Random colors flashing down and redrawn
    Crazy(CrazyFlash),
    /// Small lit segment walking around the strip
    Walking(WalkingSegment),
    /// Three LED groups revealed and concealed in turn
    Reveal(RadialReveal),
}

impl PatternSlot {
    /// Run one step of the pattern in this slot
    pub fn step<R: RandomSource>(
        &mut self,
        leds: &mut [Rgb],
        status: PatternStatus,
        rng: &mut R,
    ) -> PatternStatus {
        match self {
            Self::Solid(pattern) => pattern.step(leds, status, rng),
            Self::Rainbow(pattern) => pattern.step(leds, status, rng),
            Self::RainbowWheel(pattern) => pattern.step(leds, status, rng),
            Self::PaletteFlash(pattern) => pattern.step(leds, status, rng),
            Self::Crazy(pattern) => pattern.step(leds, status, rng),
            Self::Walking(pattern) => pattern.step(leds, status, rng),
            Self::Reveal(pattern) => pattern.step(leds, status, rng),
        }
    }

    /// Human-readable pattern name, used in diagnostics
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Solid(pattern) => pattern.name(),
            Self::Rainbow(pattern) => pattern.name(),
            Self::RainbowWheel(_) => "rainbow_wheel",
            Self::PaletteFlash(pattern) => pattern.name(),
            Self::Crazy(_) => "crazy",
            Self::Walking(pattern) => pattern.name(),
            Self::Reveal(pattern) => pattern.name(),
        }
    }
}
