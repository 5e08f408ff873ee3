//! Flags shared between the tick interrupt and the main loop
//!
//! Every field is a single `AtomicBool` accessed with plain loads and
//! stores, so the block works on targets without compare-and-swap. Each
//! flag has one setter context and one clearing context:
//!
//! | flag           | set by          | cleared by      |
//! |----------------|-----------------|-----------------|
//! | `short_press`  | interrupt       | main loop       |
//! | `long_press`   | interrupt       | main loop       |
//! | `next_pattern` | interrupt       | main loop       |
//! | `acknowledged` | main loop       | interrupt       |
//! | `demo_mode`    | main loop       | main loop       |
//!
//! The main loop observes a flag once and clears it (`take_*`); the
//! interrupt does not raise another button event until the main loop has
//! acknowledged the previous one.

use core::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug)]
pub struct SharedFlags {
    short_press: AtomicBool,
    long_press: AtomicBool,
    next_pattern: AtomicBool,
    acknowledged: AtomicBool,
    demo_mode: AtomicBool,
}

impl Default for SharedFlags {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedFlags {
    /// Idle flags: no pending events, armed for the next press, demo off
    pub const fn new() -> Self {
        Self {
            short_press: AtomicBool::new(false),
            long_press: AtomicBool::new(false),
            next_pattern: AtomicBool::new(false),
            acknowledged: AtomicBool::new(true),
            demo_mode: AtomicBool::new(false),
        }
    }

    // Interrupt side

    /// Publish a short press and disarm detection until acknowledged
    pub fn raise_short_press(&self) {
        self.acknowledged.store(false, Ordering::Release);
        self.short_press.store(true, Ordering::Release);
    }

    /// Publish a long press and disarm detection until acknowledged
    pub fn raise_long_press(&self) {
        self.acknowledged.store(false, Ordering::Release);
        self.long_press.store(true, Ordering::Release);
    }

    /// Request a switch to the next pattern
    pub fn raise_next_pattern(&self) {
        self.next_pattern.store(true, Ordering::Release);
    }

    /// Whether the last button event has been handled
    pub fn is_acknowledged(&self) -> bool {
        self.acknowledged.load(Ordering::Acquire)
    }

    // Main loop side

    /// Observe and clear a pending short press
    pub fn take_short_press(&self) -> bool {
        Self::take(&self.short_press)
    }

    /// Observe and clear a pending long press
    pub fn take_long_press(&self) -> bool {
        Self::take(&self.long_press)
    }

    /// Observe and clear a pending next-pattern request
    pub fn take_next_pattern(&self) -> bool {
        Self::take(&self.next_pattern)
    }

    /// Re-arm button detection after handling an event
    pub fn acknowledge(&self) {
        self.acknowledged.store(true, Ordering::Release);
    }

    pub fn set_demo_mode(&self, enabled: bool) {
        self.demo_mode.store(enabled, Ordering::Release);
    }

    pub fn demo_mode(&self) -> bool {
        self.demo_mode.load(Ordering::Acquire)
    }

    fn take(flag: &AtomicBool) -> bool {
        if !flag.load(Ordering::Acquire) {
            return false;
        }
        flag.store(false, Ordering::Release);
        true
    }
}
