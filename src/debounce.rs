//! Button debounce state machine
//!
//! Ticked from a periodic interrupt (every 10 ms) with the instantaneous
//! button level. A press is first confirmed after `short` ticks, then
//! classified as short if it was released by the midpoint of the window,
//! or as long if it is still held when the window closes after `long`
//! ticks. Every state moves forward on every tick, so the machine always
//! returns to idle within `long` ticks.

use core::fmt;

/// Ticks after which a held button counts as pressed
pub const DEBOUNCE_SHORT_TICKS: u8 = 10;

/// Ticks after which a held button counts as a long press
pub const DEBOUNCE_LONG_TICKS: u8 = 100;

/// Classified button press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    ShortPress,
    LongPress,
}

/// Invalid debounce thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The short threshold must be at least one tick
    ZeroShortThreshold,
    /// The short threshold must be below the long one
    ThresholdOrder { short: u8, long: u8 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroShortThreshold => write!(f, "short press threshold must be nonzero"),
            Self::ThresholdOrder { short, long } => write!(
                f,
                "short press threshold ({short}) must be below long press threshold ({long})"
            ),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Debounce thresholds, in ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceConfig {
    short: u8,
    long: u8,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            short: DEBOUNCE_SHORT_TICKS,
            long: DEBOUNCE_LONG_TICKS,
        }
    }
}

impl DebounceConfig {
    pub const fn new(short: u8, long: u8) -> Result<Self, ConfigError> {
        if short == 0 {
            return Err(ConfigError::ZeroShortThreshold);
        }
        if short >= long {
            return Err(ConfigError::ThresholdOrder { short, long });
        }
        Ok(Self { short, long })
    }

    pub const fn short(&self) -> u8 {
        self.short
    }

    pub const fn long(&self) -> u8 {
        self.long
    }

    /// Midpoint of the classification window
    pub const fn mid(&self) -> u8 {
        self.short + (self.long - self.short) / 2
    }
}

/// Tick-driven debounce FSM
#[derive(Debug, Clone)]
pub struct DebounceController {
    config: DebounceConfig,
    count: u8,
    provisional_short: bool,
}

impl Default for DebounceController {
    fn default() -> Self {
        Self::new(DebounceConfig::default())
    }
}

impl DebounceController {
    pub const fn new(config: DebounceConfig) -> Self {
        Self {
            config,
            count: 0,
            provisional_short: false,
        }
    }

    pub const fn config(&self) -> DebounceConfig {
        self.config
    }

    /// Elapsed ticks since the press was first seen, zero when idle
    pub const fn count(&self) -> u8 {
        self.count
    }

    /// Whether the press was still held at the short threshold
    pub const fn provisional_short(&self) -> bool {
        self.provisional_short
    }

    pub const fn is_idle(&self) -> bool {
        self.count == 0
    }

    /// Advance by one tick with the current button level
    pub fn tick(&mut self, pressed: bool) -> Option<ButtonEvent> {
        let DebounceConfig { short, long } = self.config;
        let mid = self.config.mid();

        match self.count {
            0 => {
                if pressed {
                    self.count = 1;
                }
                None
            }
            c if c == short => {
                if pressed {
                    self.provisional_short = true;
                }
                self.count += 1;
                None
            }
            c if c == mid => {
                if self.provisional_short && !pressed {
                    self.reset();
                    return Some(ButtonEvent::ShortPress);
                }
                self.count += 1;
                None
            }
            c if c >= long => {
                let event = if pressed {
                    Some(ButtonEvent::LongPress)
                } else if self.provisional_short {
                    Some(ButtonEvent::ShortPress)
                } else {
                    None
                };
                self.reset();
                event
            }
            _ => {
                self.count += 1;
                None
            }
        }
    }

    fn reset(&mut self) {
        self.count = 0;
        self.provisional_short = false;
    }
}
