use super::{Cadence, FLASH_INTERVAL, Pattern, PatternStatus};
use crate::{
    color::{Rgb, halve},
    random::RandomSource,
};

/// Random colors on every LED, fading down and redrawn once dark
#[derive(Debug, Clone)]
pub struct CrazyFlash {
    cadence: Cadence,
}

impl Default for CrazyFlash {
    fn default() -> Self {
        Self::new()
    }
}

impl CrazyFlash {
    pub const fn new() -> Self {
        Self {
            cadence: Cadence::new(FLASH_INTERVAL),
        }
    }

    fn draw<R: RandomSource>(leds: &mut [Rgb], rng: &mut R) {
        for led in leds.iter_mut() {
            *led = rng.next_color();
        }
    }
}

impl Pattern for CrazyFlash {
    fn step<R: RandomSource>(
        &mut self,
        leds: &mut [Rgb],
        status: PatternStatus,
        rng: &mut R,
    ) -> PatternStatus {
        if status == PatternStatus::New {
            Self::draw(leds, rng);
            self.cadence.reset();
            return PatternStatus::Refresh;
        }

        if !self.cadence.advance() {
            return PatternStatus::NoChange;
        }

        if halve(leds) == 0 {
            Self::draw(leds, rng);
        }
        PatternStatus::Refresh
    }
}
