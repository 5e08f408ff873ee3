#![no_std]

pub mod color;
pub mod controller;
pub mod debounce;
pub mod flags;
pub mod frame_scheduler;
pub mod input;
pub mod pattern;
pub mod random;
pub mod transmitter;

pub use controller::{Controller, Timings};
pub use debounce::{ButtonEvent, ConfigError, DebounceConfig, DebounceController};
pub use flags::SharedFlags;
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use input::{DemoState, InputConfig, InputMonitor};
pub use pattern::{
    Pattern, PatternSlot, PatternStatus, PatternTable, SNOWFLAKE_PATTERN_COUNT,
    snowflake_patterns,
};
pub use random::{RandomSource, XorShift32};
pub use transmitter::{BitBangTransmitter, BitRecorder, BitTiming, CycleDelay};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Number of LEDs on the snowflake board
pub const SNOWFLAKE_LEDS: usize = 18;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The controller is generic over this trait.
pub trait OutputDriver {
    /// Send one frame to the LED strip
    ///
    /// Blocks until the whole buffer has been sent; cannot fail.
    fn transmit(&mut self, leds: &[Rgb]);
}
