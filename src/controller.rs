//! Main-loop sequencing
//!
//! The [`Controller`] owns the LED buffer, the pattern table and the output
//! driver. Each [`Controller::tick`] runs one animation step and then reacts
//! to whatever the tick interrupt published in [`SharedFlags`].

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

use crate::{
    OutputDriver,
    color::{BLACK, Rgb, halve},
    flags::SharedFlags,
    pattern::{FadeOut, PatternStatus, PatternTable},
    random::RandomSource,
};

/// Animation frame period
pub const FRAME_PERIOD: Duration = Duration::from_millis(16);

/// Time each quick-flash frame stays on the strip
pub const QUICK_FLASH_STEP: Duration = Duration::from_millis(25);

/// Fade-and-restore cycles shown when a long press is accepted
pub const QUICK_FLASH_COUNT: u8 = 3;

/// Main-loop timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Wait between animation ticks
    pub frame: Duration,
    /// Wait after each quick-flash frame
    pub quick_flash_step: Duration,
    /// Number of quick-flash cycles
    pub quick_flash_count: u8,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            frame: FRAME_PERIOD,
            quick_flash_step: QUICK_FLASH_STEP,
            quick_flash_count: QUICK_FLASH_COUNT,
        }
    }
}

/// Pattern playback driven by button events
///
/// `N` is the number of LEDs, `P` the number of patterns in the table.
pub struct Controller<'a, O, R, const N: usize, const P: usize>
where
    O: OutputDriver,
    R: RandomSource,
{
    leds: [Rgb; N],
    patterns: PatternTable<P>,
    fade: FadeOut,
    fading: bool,
    status: PatternStatus,
    output: O,
    rng: R,
    flags: &'a SharedFlags,
    timings: Timings,
}

impl<'a, O, R, const N: usize, const P: usize> Controller<'a, O, R, N, P>
where
    O: OutputDriver,
    R: RandomSource,
{
    /// Create a controller that starts the first pattern on its first tick
    pub fn new(output: O, rng: R, flags: &'a SharedFlags, patterns: PatternTable<P>) -> Self {
        Self {
            leds: [BLACK; N],
            patterns,
            fade: FadeOut::default(),
            fading: false,
            status: PatternStatus::New,
            output,
            rng,
            flags,
            timings: Timings::default(),
        }
    }

    #[must_use]
    pub fn with_timings(mut self, timings: Timings) -> Self {
        self.timings = timings;
        self
    }

    #[must_use]
    pub fn with_fade(mut self, fade: FadeOut) -> Self {
        self.fade = fade;
        self
    }

    pub fn leds(&self) -> &[Rgb; N] {
        &self.leds
    }

    /// Status carried into the next step
    pub const fn status(&self) -> PatternStatus {
        self.status
    }

    pub const fn is_fading(&self) -> bool {
        self.fading
    }

    pub const fn current_index(&self) -> usize {
        self.patterns.current_index()
    }

    pub const fn patterns(&self) -> &PatternTable<P> {
        &self.patterns
    }

    pub const fn timings(&self) -> Timings {
        self.timings
    }

    pub const fn output(&self) -> &O {
        &self.output
    }

    /// Run one iteration of the main loop, without the frame wait
    ///
    /// `delay` paces the quick flash. Returns the status produced by this
    /// tick's pattern or fade step.
    pub fn tick<D: DelayNs>(&mut self, delay: &mut D) -> PatternStatus {
        let produced = if self.fading {
            self.fade.fade(&mut self.leds, self.status)
        } else {
            self.patterns
                .current_mut()
                .step(&mut self.leds, self.status, &mut self.rng)
        };

        self.status = match produced {
            PatternStatus::Refresh => {
                self.output.transmit(&self.leds);
                produced
            }
            PatternStatus::FadeDone => {
                self.fading = false;
                PatternStatus::New
            }
            _ => produced,
        };

        let mut next = false;

        if self.flags.take_short_press() {
            next = !self.flags.demo_mode();
            self.flags.acknowledge();
        }

        if self.flags.take_long_press() {
            self.quick_flash(delay);
            let demo = !self.flags.demo_mode();
            self.flags.set_demo_mode(demo);
            self.flags.acknowledge();

            #[cfg(feature = "log")]
            log::info!("long press: demo mode {}", if demo { "on" } else { "off" });
        }

        if self.flags.take_next_pattern() {
            next = true;
        }

        if next {
            self.next_pattern();
        }

        produced
    }

    /// Switch to the next table slot through a fade-out
    pub fn next_pattern(&mut self) {
        self.status = PatternStatus::New;
        self.patterns.advance();
        self.fading = true;

        #[cfg(feature = "log")]
        log::info!(
            "switching to pattern {} ({})",
            self.patterns.current_index(),
            self.patterns.current().name()
        );
    }

    /// Acknowledge a long press visibly.
    ///
    /// Fades a copy of the current frame to black step by step and restores
    /// it, `quick_flash_count` times, then shows the untouched frame again.
    /// The buffer itself is left as it was.
    pub fn quick_flash<D: DelayNs>(&mut self, delay: &mut D) {
        let step_ms = u32::try_from(self.timings.quick_flash_step.as_millis()).unwrap_or(u32::MAX);
        let mut scratch = self.leds;

        for _ in 0..self.timings.quick_flash_count {
            while halve(&mut scratch) != 0 {
                self.output.transmit(&scratch);
                delay.delay_ms(step_ms);
            }
            scratch = self.leds;
            self.output.transmit(&scratch);
            delay.delay_ms(step_ms);
        }

        self.output.transmit(&self.leds);
    }
}
