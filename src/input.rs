//! Interrupt-side input handling
//!
//! [`InputMonitor`] is owned by the periodic tick interrupt. It runs the
//! debounce FSM and the demo-mode timer and publishes their results through
//! [`SharedFlags`].
//!
//! ```ignore
//! static FLAGS: SharedFlags = SharedFlags::new();
//! static MONITOR: Mutex<RefCell<Option<InputMonitor>>> = Mutex::new(RefCell::new(None));
//!
//! #[interrupt]
//! fn TIMER0_COMPA() {
//!     critical_section::with(|cs| {
//!         if let Some(monitor) = MONITOR.borrow(cs).borrow_mut().as_mut() {
//!             monitor.sample(&mut *BUTTON.borrow(cs).borrow_mut(), &FLAGS);
//!         }
//!     });
//! }
//! ```

use embedded_hal::digital::InputPin;

use crate::{
    debounce::{ButtonEvent, DebounceConfig, DebounceController},
    flags::SharedFlags,
};

/// Interrupt period the thresholds are expressed in, in milliseconds
pub const TICK_MS: u32 = 10;

/// Ticks between automatic pattern switches in demo mode (5 s)
pub const DEMO_INTERVAL_TICKS: u16 = 500;

/// Configuration of the interrupt-side input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputConfig {
    pub debounce: DebounceConfig,
    /// Ticks between demo-mode pattern switches
    pub demo_interval: u16,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            debounce: DebounceConfig::default(),
            demo_interval: DEMO_INTERVAL_TICKS,
        }
    }
}

/// Demo-mode timer
///
/// Counts ticks while demo mode is enabled and fires every `interval`
/// ticks. Enabling or disabling demo mode restarts the count.
#[derive(Debug, Clone)]
pub struct DemoState {
    interval: u16,
    count: u16,
    enabled: bool,
}

impl Default for DemoState {
    fn default() -> Self {
        Self::new(DEMO_INTERVAL_TICKS)
    }
}

impl DemoState {
    pub const fn new(interval: u16) -> Self {
        Self {
            interval,
            count: 0,
            enabled: false,
        }
    }

    pub const fn count(&self) -> u16 {
        self.count
    }

    /// Advance by one tick. Returns `true` when the next pattern is due.
    pub fn tick(&mut self, enabled: bool) -> bool {
        if enabled != self.enabled {
            self.enabled = enabled;
            self.count = 0;
        }
        if !enabled {
            return false;
        }

        self.count += 1;
        if self.count >= self.interval {
            self.count = 0;
            return true;
        }
        false
    }
}

/// Everything the tick interrupt owns
#[derive(Debug, Clone, Default)]
pub struct InputMonitor {
    debounce: DebounceController,
    demo: DemoState,
}

impl InputMonitor {
    pub const fn new(config: InputConfig) -> Self {
        Self {
            debounce: DebounceController::new(config.debounce),
            demo: DemoState::new(config.demo_interval),
        }
    }

    pub const fn debounce(&self) -> &DebounceController {
        &self.debounce
    }

    pub const fn demo(&self) -> &DemoState {
        &self.demo
    }

    /// Handle one tick with the given button level
    ///
    /// The debounce FSM is frozen while a published event is waiting for
    /// acknowledgment; the demo timer keeps running.
    pub fn on_tick(&mut self, pressed: bool, flags: &SharedFlags) {
        if flags.is_acknowledged() {
            match self.debounce.tick(pressed) {
                Some(ButtonEvent::ShortPress) => flags.raise_short_press(),
                Some(ButtonEvent::LongPress) => flags.raise_long_press(),
                None => {}
            }
        }

        if self.demo.tick(flags.demo_mode()) {
            flags.raise_next_pattern();
        }
    }

    /// Sample an active-low button and handle one tick.
    ///
    /// A failed pin read counts as released.
    pub fn sample<P: InputPin>(&mut self, button: &mut P, flags: &SharedFlags) {
        let pressed = button.is_low().unwrap_or(false);
        self.on_tick(pressed, flags);
    }
}
