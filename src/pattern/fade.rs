//! Fade-out transition between patterns
//!
//! Not part of the pattern table: the controller runs it after a pattern
//! switch until it reports [`PatternStatus::FadeDone`], then starts the
//! next pattern from [`PatternStatus::New`].

use super::{Cadence, Pattern, PatternStatus};
use crate::{
    color::{Rgb, halve},
    random::RandomSource,
};

/// Ticks between successive halvings
pub const FADE_INTERVAL: u8 = 3;

/// Halves the current frame down to black
#[derive(Debug, Clone)]
pub struct FadeOut {
    cadence: Cadence,
}

impl Default for FadeOut {
    fn default() -> Self {
        Self::new(FADE_INTERVAL)
    }
}

impl FadeOut {
    pub const fn new(interval: u8) -> Self {
        Self {
            cadence: Cadence::new(interval),
        }
    }

    /// Advance the fade by one tick
    pub fn fade(&mut self, leds: &mut [Rgb], status: PatternStatus) -> PatternStatus {
        if status == PatternStatus::New {
            self.cadence.reset();
            halve(leds);
            return PatternStatus::Refresh;
        }

        if !self.cadence.advance() {
            return PatternStatus::NoChange;
        }

        if halve(leds) == 0 {
            #[cfg(feature = "log")]
            log::debug!("fade-out reached black");
            return PatternStatus::FadeDone;
        }
        PatternStatus::Refresh
    }
}

impl Pattern for FadeOut {
    fn step<R: RandomSource>(
        &mut self,
        leds: &mut [Rgb],
        status: PatternStatus,
        _rng: &mut R,
    ) -> PatternStatus {
        self.fade(leds, status)
    }
}
