//! Radial reveal patterns
//!
//! The snowflake is split into three disjoint LED groups, either three
//! angular arcs or three concentric rings. A small occupancy bitmask decides
//! which groups are lit: bit `n` lights group `n`. The mask is shifted right
//! one bit per step, so groups switch on and off in sequence until the mask
//! runs empty and starts over from its seed.

use super::{BLUE, Cadence, ColorSelector, ORANGE, Pattern, PatternStatus, RED, WALK_INTERVAL};
use crate::{
    color::{BLACK, Rgb, clear, fill_indices, fill_range},
    random::RandomSource,
};

/// Number of LEDs the group layouts address
pub const REVEAL_LEDS: usize = 18;

/// Seed of the arc mask. The low bits are zero on purpose: the first shifts
/// keep lighting only the last arc.
pub const ARC_SEED: u8 = 0b0011_1000;

/// Seed of the ring mask
pub const RING_SEED: u8 = 0b0000_1000;

/// Outermost ring of the snowflake
pub const OUTER_RING: [u8; 6] = [0, 4, 7, 10, 13, 16];
/// Middle ring of the snowflake
pub const MIDDLE_RING: [u8; 6] = [1, 3, 6, 9, 12, 15];
/// Innermost ring of the snowflake
pub const INNER_RING: [u8; 6] = [2, 5, 8, 11, 14, 17];

const GROUPS: usize = 3;

/// Group of LEDs switched together
#[derive(Debug, Clone, Copy)]
enum LedGroup {
    /// Contiguous positions `start..=end`
    Range(usize, usize),
    /// Explicit positions
    Indices(&'static [u8]),
}

impl LedGroup {
    fn fill(self, leds: &mut [Rgb], color: Rgb) {
        match self {
            Self::Range(start, end) => fill_range(leds, start, end, color),
            Self::Indices(indices) => fill_indices(leds, indices, color),
        }
    }
}

// Index = mask bit
const ARC_GROUPS: [LedGroup; GROUPS] = [
    LedGroup::Range(12, 17),
    LedGroup::Range(6, 11),
    LedGroup::Range(0, 5),
];
const ARC_COLORS: [Rgb; GROUPS] = [RED, BLUE, ORANGE];

const RING_GROUPS: [LedGroup; GROUPS] = [
    LedGroup::Indices(&OUTER_RING),
    LedGroup::Indices(&MIDDLE_RING),
    LedGroup::Indices(&INNER_RING),
];

/// Shift register deciding which groups are lit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccupancyMask {
    seed: u8,
    bits: u8,
}

impl OccupancyMask {
    pub const fn new(seed: u8) -> Self {
        Self { seed, bits: seed }
    }

    pub const fn reset(&mut self) {
        self.bits = self.seed;
    }

    pub const fn bits(&self) -> u8 {
        self.bits
    }

    pub const fn seed(&self) -> u8 {
        self.seed
    }

    /// Shift one bit out and return the mask to display.
    ///
    /// The step that empties the mask returns zero (all groups dark); the
    /// stored mask is then re-seeded so the next step continues from the
    /// seed.
    pub const fn step(&mut self) -> u8 {
        self.bits >>= 1;
        let shown = self.bits;
        if self.bits == 0 {
            self.bits = self.seed;
        }
        shown
    }

    /// Whether `group` is lit in `bits`
    pub const fn is_lit(bits: u8, group: usize) -> bool {
        bits & (1 << group) != 0
    }
}

/// Grouping used by a [`RadialReveal`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealLayout {
    /// Three contiguous arcs in fixed red, blue and orange
    Arcs,
    /// Three concentric rings in one selectable color
    Rings(ColorSelector),
}

/// Three groups of the snowflake revealed and concealed in sequence
#[derive(Debug, Clone)]
pub struct RadialReveal {
    layout: RevealLayout,
    mask: OccupancyMask,
    cadence: Cadence,
    colors: [Rgb; GROUPS],
}

impl RadialReveal {
    /// Angular arcs
    pub const fn arcs() -> Self {
        Self {
            layout: RevealLayout::Arcs,
            mask: OccupancyMask::new(ARC_SEED),
            cadence: Cadence::new(WALK_INTERVAL),
            colors: ARC_COLORS,
        }
    }

    /// Concentric rings; a random color is drawn once per start
    pub const fn rings(color: ColorSelector) -> Self {
        Self {
            layout: RevealLayout::Rings(color),
            mask: OccupancyMask::new(RING_SEED),
            cadence: Cadence::new(WALK_INTERVAL),
            colors: [BLACK; GROUPS],
        }
    }

    pub const fn layout(&self) -> RevealLayout {
        self.layout
    }

    pub const fn mask(&self) -> OccupancyMask {
        self.mask
    }

    pub const fn name(&self) -> &'static str {
        match self.layout {
            RevealLayout::Arcs => "reveal_arcs",
            RevealLayout::Rings(ColorSelector::Red) => "reveal_rings_red",
            RevealLayout::Rings(ColorSelector::Green) => "reveal_rings_green",
            RevealLayout::Rings(ColorSelector::Blue) => "reveal_rings_blue",
            RevealLayout::Rings(ColorSelector::Random) => "reveal_rings_random",
        }
    }

    const fn groups(&self) -> &'static [LedGroup; GROUPS] {
        match self.layout {
            RevealLayout::Arcs => &ARC_GROUPS,
            RevealLayout::Rings(_) => &RING_GROUPS,
        }
    }

    fn render(&self, leds: &mut [Rgb], bits: u8) {
        for (group, led_group) in self.groups().iter().enumerate() {
            let color = if OccupancyMask::is_lit(bits, group) {
                self.colors[group]
            } else {
                BLACK
            };
            led_group.fill(leds, color);
        }
    }
}

impl Pattern for RadialReveal {
    fn step<R: RandomSource>(
        &mut self,
        leds: &mut [Rgb],
        status: PatternStatus,
        rng: &mut R,
    ) -> PatternStatus {
        if leds.len() < REVEAL_LEDS {
            return PatternStatus::NoChange;
        }

        if status == PatternStatus::New {
            if let RevealLayout::Rings(selector) = self.layout {
                self.colors = [selector.resolve(rng); GROUPS];
            }
            clear(leds);
            self.groups()[GROUPS - 1].fill(leds, self.colors[GROUPS - 1]);
            self.mask.reset();
            self.cadence.reset();
            return PatternStatus::Refresh;
        }

        if !self.cadence.advance() {
            return PatternStatus::NoChange;
        }

        let bits = self.mask.step();
        self.render(leds, bits);
        PatternStatus::Refresh
    }
}
