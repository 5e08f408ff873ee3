//! Frame pacing for the main loop.
//!
//! Two ways to drive the [`Controller`]:
//!
//! - [`FrameScheduler::run`] ticks and then blocks for the frame period,
//!   forever. This is what the firmware calls.
//! - [`FrameScheduler::tick`] takes the current time and returns how long
//!   to sleep, so platforms with their own timers can pace the loop with
//!   drift correction.

use embassy_time::{Duration, Instant};
use embedded_hal::delay::DelayNs;

use crate::{OutputDriver, controller::Controller, pattern::PatternStatus, random::RandomSource};

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// Status produced by the animation step.
    pub status: PatternStatus,
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Owns the controller and the blocking delay that paces it.
///
/// ```ignore
/// static FLAGS: SharedFlags = SharedFlags::new();
///
/// let driver = BitBangTransmitter::new(led_pin, cycles, BitTiming::default());
/// let controller = Controller::new(driver, XorShift32::default(), &FLAGS, snowflake_patterns());
/// FrameScheduler::new(controller, delay).run()
/// ```
pub struct FrameScheduler<'a, O, D, R, const N: usize, const P: usize>
where
    O: OutputDriver,
    D: DelayNs,
    R: RandomSource,
{
    controller: Controller<'a, O, R, N, P>,
    delay: D,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<'a, O, D, R, const N: usize, const P: usize> FrameScheduler<'a, O, D, R, N, P>
where
    O: OutputDriver,
    D: DelayNs,
    R: RandomSource,
{
    /// Create a scheduler using the controller's frame period.
    pub fn new(controller: Controller<'a, O, R, N, P>, delay: D) -> Self {
        let frame_duration = controller.timings().frame;
        Self {
            controller,
            delay,
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    pub const fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Run one frame and wait out the frame period.
    pub fn run_frame(&mut self) -> PatternStatus {
        let status = self.controller.tick(&mut self.delay);
        let frame_ms = u32::try_from(self.frame_duration.as_millis()).unwrap_or(u32::MAX);
        self.delay.delay_ms(frame_ms);
        status
    }

    /// Run the main loop forever.
    pub fn run(&mut self) -> ! {
        loop {
            self.run_frame();
        }
    }

    /// Run one frame at `now` and return timing information.
    ///
    /// Does not wait for the frame period; the caller sleeps for
    /// `sleep_duration` before calling `tick` again. A caller that has
    /// fallen more than two frames behind is resynchronized instead of
    /// bursting through the backlog.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        let max_drift = Duration::from_millis(self.frame_duration.as_millis() * 2);
        if now.as_millis() > self.next_frame.as_millis() + max_drift.as_millis() {
            self.next_frame = now;
        }

        let status = self.controller.tick(&mut self.delay);

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            status,
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    pub const fn controller(&self) -> &Controller<'a, O, R, N, P> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut Controller<'a, O, R, N, P> {
        &mut self.controller
    }

    /// Stop scheduling and hand back the controller and delay.
    pub fn release(self) -> (Controller<'a, O, R, N, P>, D) {
        (self.controller, self.delay)
    }
}
