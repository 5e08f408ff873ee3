use super::{
    ColorSelector, CrazyFlash, PaletteFlash, PatternSlot, RadialReveal, RainbowPattern,
    RainbowWheel, Segment, SolidFill, WalkingSegment,
};
use crate::color::Palette;

/// Number of patterns in [`snowflake_patterns`]
pub const SNOWFLAKE_PATTERN_COUNT: usize = 23;

/// Fixed, circular sequence of patterns
#[derive(Debug, Clone)]
pub struct PatternTable<const P: usize> {
    slots: [PatternSlot; P],
    index: usize,
}

impl<const P: usize> PatternTable<P> {
    /// Create a table starting at its first slot
    pub const fn new(slots: [PatternSlot; P]) -> Self {
        const { assert!(P > 0, "pattern table must not be empty") };
        Self { slots, index: 0 }
    }

    pub const fn len(&self) -> usize {
        P
    }

    pub const fn is_empty(&self) -> bool {
        P == 0
    }

    pub const fn current_index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &PatternSlot {
        &self.slots[self.index]
    }

    pub fn current_mut(&mut self) -> &mut PatternSlot {
        &mut self.slots[self.index]
    }

    /// Move to the next slot, wrapping around after the last one.
    ///
    /// Returns the new index.
    pub const fn advance(&mut self) -> usize {
        self.index += 1;
        if self.index == P {
            self.index = 0;
        }
        self.index
    }

    pub fn slots(&self) -> &[PatternSlot] {
        &self.slots
    }
}

/// The snowflake's pattern table, in playback order
pub const fn snowflake_patterns() -> PatternTable<SNOWFLAKE_PATTERN_COUNT> {
    use ColorSelector::{Blue, Green, Random, Red};

    PatternTable::new([
        PatternSlot::Solid(SolidFill::new(Red)),
        PatternSlot::Solid(SolidFill::new(Green)),
        PatternSlot::Solid(SolidFill::new(Blue)),
        PatternSlot::Solid(SolidFill::new(Random)),
        PatternSlot::Rainbow(RainbowPattern::still()),
        PatternSlot::Rainbow(RainbowPattern::breathing()),
        PatternSlot::RainbowWheel(RainbowWheel::new()),
        PatternSlot::PaletteFlash(PaletteFlash::new(Palette::Cool)),
        PatternSlot::PaletteFlash(PaletteFlash::new(Palette::Warm)),
        PatternSlot::Crazy(CrazyFlash::new()),
        PatternSlot::Walking(WalkingSegment::new(Segment::Pair, Red)),
        PatternSlot::Walking(WalkingSegment::new(Segment::Pair, Green)),
        PatternSlot::Walking(WalkingSegment::new(Segment::Pair, Blue)),
        PatternSlot::Walking(WalkingSegment::new(Segment::Pair, Random)),
        PatternSlot::Walking(WalkingSegment::new(Segment::Bar, Red)),
        PatternSlot::Walking(WalkingSegment::new(Segment::Bar, Green)),
        PatternSlot::Walking(WalkingSegment::new(Segment::Bar, Blue)),
        PatternSlot::Walking(WalkingSegment::new(Segment::Bar, Random)),
        PatternSlot::Reveal(RadialReveal::arcs()),
        PatternSlot::Reveal(RadialReveal::rings(Red)),
        PatternSlot::Reveal(RadialReveal::rings(Green)),
        PatternSlot::Reveal(RadialReveal::rings(Blue)),
        PatternSlot::Reveal(RadialReveal::rings(Random)),
    ])
}
