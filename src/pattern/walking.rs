//! Walking segment patterns
//!
//! A short segment is lit on two opposite sides of the snowflake and the
//! whole buffer is rotated on every step, so the segments appear to chase
//! each other around.

use super::{Cadence, ColorSelector, FLASH_INTERVAL, Pattern, PatternStatus};
use crate::{
    color::{Rgb, clear, rotate_right_by},
    random::RandomSource,
};

/// Shape of the walking segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// Two single LEDs on opposite sides, moving one position per step
    Pair,
    /// Two 2-LED bars on opposite sides, moving three positions per step
    Bar,
}

impl Segment {
    /// Positions lit when the pattern starts, for a strip of `len` LEDs
    pub const fn positions(self, len: usize) -> ([usize; 4], usize) {
        let half = len / 2;
        match self {
            Self::Pair => ([0, half, 0, 0], 2),
            Self::Bar => ([0, 1, half, half + 1], 4),
        }
    }

    /// Rotation applied on every step
    pub const fn stride(self) -> usize {
        match self {
            Self::Pair => 1,
            Self::Bar => 3,
        }
    }
}

/// Segment of one color walking around the strip
#[derive(Debug, Clone)]
pub struct WalkingSegment {
    segment: Segment,
    color: ColorSelector,
    cadence: Cadence,
}

impl WalkingSegment {
    pub const fn new(segment: Segment, color: ColorSelector) -> Self {
        Self {
            segment,
            color,
            cadence: Cadence::new(FLASH_INTERVAL),
        }
    }

    pub const fn segment(&self) -> Segment {
        self.segment
    }

    pub const fn name(&self) -> &'static str {
        match (self.segment, self.color) {
            (Segment::Pair, ColorSelector::Red) => "walking_pair_red",
            (Segment::Pair, ColorSelector::Green) => "walking_pair_green",
            (Segment::Pair, ColorSelector::Blue) => "walking_pair_blue",
            (Segment::Pair, ColorSelector::Random) => "walking_pair_random",
            (Segment::Bar, ColorSelector::Red) => "walking_bar_red",
            (Segment::Bar, ColorSelector::Green) => "walking_bar_green",
            (Segment::Bar, ColorSelector::Blue) => "walking_bar_blue",
            (Segment::Bar, ColorSelector::Random) => "walking_bar_random",
        }
    }
}

impl Pattern for WalkingSegment {
    fn step<R: RandomSource>(
        &mut self,
        leds: &mut [Rgb],
        status: PatternStatus,
        rng: &mut R,
    ) -> PatternStatus {
        if status == PatternStatus::New {
            clear(leds);
            let color = self.color.resolve(rng);
            let (positions, count) = self.segment.positions(leds.len());
            for &position in &positions[..count] {
                if let Some(led) = leds.get_mut(position) {
                    *led = color;
                }
            }
            self.cadence.reset();
            return PatternStatus::Refresh;
        }

        if !self.cadence.advance() {
            return PatternStatus::NoChange;
        }

        rotate_right_by(leds, self.segment.stride());
        PatternStatus::Refresh
    }
}
