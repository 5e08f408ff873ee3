//! Static single-color fill

use super::{ColorSelector, Pattern, PatternStatus};
use crate::{color::Rgb, random::RandomSource};

/// Fills all LEDs with one color once and then holds it
///
/// With [`ColorSelector::Random`] every LED gets its own random color,
/// drawn only when the pattern starts.
#[derive(Debug, Clone)]
pub struct SolidFill {
    color: ColorSelector,
}

impl SolidFill {
    pub const fn new(color: ColorSelector) -> Self {
        Self { color }
    }

    pub const fn color(&self) -> ColorSelector {
        self.color
    }

    pub const fn name(&self) -> &'static str {
        match self.color {
            ColorSelector::Red => "solid_red",
            ColorSelector::Green => "solid_green",
            ColorSelector::Blue => "solid_blue",
            ColorSelector::Random => "solid_random",
        }
    }
}

impl Pattern for SolidFill {
    fn step<R: RandomSource>(
        &mut self,
        leds: &mut [Rgb],
        status: PatternStatus,
        rng: &mut R,
    ) -> PatternStatus {
        if status != PatternStatus::New {
            return PatternStatus::NoChange;
        }

        for led in leds.iter_mut() {
            *led = self.color.resolve(rng);
        }
        PatternStatus::Refresh
    }
}
