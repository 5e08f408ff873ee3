use super::{Cadence, FLASH_INTERVAL, Pattern, PatternStatus};
use crate::{
    color::{Palette, Rgb, fill_palette, halve},
    random::RandomSource,
};

/// Palette laid out over the strip, halved every [`FLASH_INTERVAL`] ticks
/// and laid out again once dark
#[derive(Debug, Clone)]
pub struct PaletteFlash {
    palette: Palette,
    cadence: Cadence,
}

impl PaletteFlash {
    pub const fn new(palette: Palette) -> Self {
        Self {
            palette,
            cadence: Cadence::new(FLASH_INTERVAL),
        }
    }

    pub const fn palette(&self) -> Palette {
        self.palette
    }

    pub const fn name(&self) -> &'static str {
        match self.palette {
            Palette::Warm => "palette_warm",
            Palette::Cool => "palette_cool",
        }
    }
}

impl Pattern for PaletteFlash {
    fn step<R: RandomSource>(
        &mut self,
        leds: &mut [Rgb],
        status: PatternStatus,
        _rng: &mut R,
    ) -> PatternStatus {
        if status == PatternStatus::New {
            fill_palette(leds, self.palette);
            self.cadence.reset();
            return PatternStatus::Refresh;
        }

        if !self.cadence.advance() {
            return PatternStatus::NoChange;
        }

        if halve(leds) == 0 {
            fill_palette(leds, self.palette);
        }
        PatternStatus::Refresh
    }
}
