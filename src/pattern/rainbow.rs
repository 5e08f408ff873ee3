//! Rainbow patterns
//!
//! Both patterns draw the lookup-table gradient from
//! [`fill_rainbow`](crate::color::fill_rainbow):
//! - `RainbowPattern`: still, or "breathing" by repeated halving
//! - `RainbowWheel`: rotated around the strip

use super::{Cadence, FLASH_INTERVAL, Pattern, PatternStatus, WALK_INTERVAL};
use crate::{
    color::{Rgb, fill_rainbow, halve, rotate_right_by},
    random::RandomSource,
};

/// Positions the wheel moves per step
const WHEEL_STRIDE: usize = 3;

/// Rainbow gradient, optionally fading down and redrawn when dark
#[derive(Debug, Clone)]
pub struct RainbowPattern {
    breathing: Option<Cadence>,
}

impl RainbowPattern {
    /// Gradient drawn once and held
    pub const fn still() -> Self {
        Self { breathing: None }
    }

    /// Gradient halved every [`FLASH_INTERVAL`] ticks and redrawn once it
    /// has gone completely dark
    pub const fn breathing() -> Self {
        Self {
            breathing: Some(Cadence::new(FLASH_INTERVAL)),
        }
    }

    pub const fn is_breathing(&self) -> bool {
        self.breathing.is_some()
    }

    pub const fn name(&self) -> &'static str {
        if self.is_breathing() {
            "rainbow_breathing"
        } else {
            "rainbow"
        }
    }
}

impl Pattern for RainbowPattern {
    fn step<R: RandomSource>(
        &mut self,
        leds: &mut [Rgb],
        status: PatternStatus,
        _rng: &mut R,
    ) -> PatternStatus {
        if status == PatternStatus::New {
            fill_rainbow(leds);
            if let Some(cadence) = &mut self.breathing {
                cadence.reset();
            }
            return PatternStatus::Refresh;
        }

        let Some(cadence) = &mut self.breathing else {
            return PatternStatus::NoChange;
        };
        if !cadence.advance() {
            return PatternStatus::NoChange;
        }

        if halve(leds) == 0 {
            fill_rainbow(leds);
        }
        PatternStatus::Refresh
    }
}

/// Rainbow gradient walking around the strip
#[derive(Debug, Clone)]
pub struct RainbowWheel {
    cadence: Cadence,
}

impl Default for RainbowWheel {
    fn default() -> Self {
        Self::new()
    }
}

impl RainbowWheel {
    pub const fn new() -> Self {
        Self {
            cadence: Cadence::new(WALK_INTERVAL),
        }
    }
}

impl Pattern for RainbowWheel {
    fn step<R: RandomSource>(
        &mut self,
        leds: &mut [Rgb],
        status: PatternStatus,
        _rng: &mut R,
    ) -> PatternStatus {
        if status == PatternStatus::New {
            fill_rainbow(leds);
            self.cadence.reset();
            return PatternStatus::Refresh;
        }

        if !self.cadence.advance() {
            return PatternStatus::NoChange;
        }

        rotate_right_by(leds, WHEEL_STRIDE);
        PatternStatus::Refresh
    }
}
