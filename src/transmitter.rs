//! One-wire LED protocol transmitter
//!
//! Every bit occupies a fixed 1.25 µs slot that starts high and ends low.
//! The length of the high phase encodes the bit:
//!
//! ```text
//! 1 bit:  +-----------+
//!         |   800 ns  |  450 ns
//!         +           +--------+
//!
//! 0 bit:  +-----+
//!         |400ns|     850 ns
//!         +     +--------------+
//! ```
//!
//! The high time of a `0` bit is the tight constraint; the trailing low
//! phase has the most slack. Colors go out green, red, blue per LED, most
//! significant bit first. A frame is latched by holding the line low for
//! more than 50 µs, which the frame period between transmissions provides.

use core::convert::Infallible;

use embedded_hal::digital::OutputPin;
use heapless::Vec;

use crate::{OutputDriver, color::Rgb};

/// High time of a `0` bit, in nanoseconds
pub const T0H_NS: u32 = 400;
/// High time of a `1` bit, in nanoseconds
pub const T1H_NS: u32 = 800;
/// Length of one bit slot, in nanoseconds
pub const BIT_PERIOD_NS: u32 = 1250;

/// Bits per LED on the wire
pub const BITS_PER_LED: usize = 24;

/// Busy-wait for an exact number of CPU cycles
///
/// Implementations must not yield or sleep; they are called with
/// interrupts masked.
pub trait CycleDelay {
    fn delay_cycles(&mut self, cycles: u32);
}

/// Cycle budget of each bit phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitTiming {
    /// High phase of a `0` bit
    pub zero_high: u32,
    /// Low phase of a `0` bit
    pub zero_low: u32,
    /// High phase of a `1` bit
    pub one_high: u32,
    /// Low phase of a `1` bit
    pub one_low: u32,
}

impl BitTiming {
    /// Budget for a core running at `cpu_hz`
    #[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
    pub const fn from_cpu_hz(cpu_hz: u32) -> Self {
        const fn cycles(ns: u32, cpu_hz: u32) -> u32 {
            ((ns as u64 * cpu_hz as u64) / 1_000_000_000) as u32
        }

        let zero_high = cycles(T0H_NS, cpu_hz);
        let one_high = cycles(T1H_NS, cpu_hz);
        let period = cycles(BIT_PERIOD_NS, cpu_hz);
        Self {
            zero_high,
            zero_low: period.saturating_sub(zero_high),
            one_high,
            one_low: period.saturating_sub(one_high),
        }
    }

    /// Remove `cycles` of instruction overhead from every phase.
    ///
    /// Pin writes and loop bookkeeping take cycles of their own; the delay
    /// only has to fill the rest of each phase.
    #[must_use]
    pub const fn with_overhead(self, cycles: u32) -> Self {
        Self {
            zero_high: self.zero_high.saturating_sub(cycles),
            zero_low: self.zero_low.saturating_sub(cycles),
            one_high: self.one_high.saturating_sub(cycles),
            one_low: self.one_low.saturating_sub(cycles),
        }
    }

    /// Cycles of one bit slot
    pub const fn period(&self) -> u32 {
        self.zero_high + self.zero_low
    }

    /// `(high, low)` cycles for one bit
    pub const fn phases(&self, bit: bool) -> (u32, u32) {
        if bit {
            (self.one_high, self.one_low)
        } else {
            (self.zero_high, self.zero_low)
        }
    }
}

impl Default for BitTiming {
    /// 20 MHz core: 8 / 16 / 25 cycles
    fn default() -> Self {
        Self::from_cpu_hz(20_000_000)
    }
}

/// Bytes of one LED in wire order
pub const fn wire_bytes(color: Rgb) -> [u8; 3] {
    [color.g, color.r, color.b]
}

/// Bits of a whole frame in transmission order
pub fn frame_bits(leds: &[Rgb]) -> impl Iterator<Item = bool> + '_ {
    leds.iter()
        .flat_map(|&color| wire_bytes(color))
        .flat_map(|byte| (0..8).rev().map(move |bit| byte & (1 << bit) != 0))
}

/// Bit-banged transmitter on a plain GPIO
///
/// The whole frame is sent inside a critical section. A frame of 18 LEDs
/// keeps interrupts masked for about 540 µs.
pub struct BitBangTransmitter<P, D> {
    pin: P,
    delay: D,
    timing: BitTiming,
}

impl<P, D> BitBangTransmitter<P, D>
where
    P: OutputPin<Error = Infallible>,
    D: CycleDelay,
{
    pub const fn new(pin: P, delay: D, timing: BitTiming) -> Self {
        Self { pin, delay, timing }
    }

    pub const fn timing(&self) -> BitTiming {
        self.timing
    }

    /// Release the pin and delay
    pub fn release(self) -> (P, D) {
        (self.pin, self.delay)
    }

    fn send_bit(&mut self, bit: bool) {
        let (high, low) = self.timing.phases(bit);
        let Ok(()) = self.pin.set_high();
        self.delay.delay_cycles(high);
        let Ok(()) = self.pin.set_low();
        self.delay.delay_cycles(low);
    }
}

impl<P, D> OutputDriver for BitBangTransmitter<P, D>
where
    P: OutputPin<Error = Infallible>,
    D: CycleDelay,
{
    fn transmit(&mut self, leds: &[Rgb]) {
        let Ok(()) = self.pin.set_low();

        critical_section::with(|_| {
            for bit in frame_bits(leds) {
                self.send_bit(bit);
            }
        });
    }
}

/// Logical transmitter that records the bits of the last frame
///
/// `BITS` must hold a whole frame (`BITS_PER_LED` per LED); bits past the
/// capacity are dropped and flagged by [`BitRecorder::is_truncated`].
#[derive(Debug, Default)]
pub struct BitRecorder<const BITS: usize> {
    bits: Vec<bool, BITS>,
    frames: usize,
    truncated: bool,
}

impl<const BITS: usize> BitRecorder<BITS> {
    pub const fn new() -> Self {
        Self {
            bits: Vec::new(),
            frames: 0,
            truncated: false,
        }
    }

    /// Bits of the last transmitted frame
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Number of frames transmitted so far
    pub const fn frames(&self) -> usize {
        self.frames
    }

    pub const fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Reassemble the last frame into bytes, in wire order
    pub fn bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.bits
            .chunks_exact(8)
            .map(|chunk| chunk.iter().fold(0u8, |byte, &bit| (byte << 1) | u8::from(bit)))
    }
}

impl<const BITS: usize> OutputDriver for BitRecorder<BITS> {
    fn transmit(&mut self, leds: &[Rgb]) {
        self.bits.clear();
        self.truncated = false;
        for bit in frame_bits(leds) {
            if self.bits.push(bit).is_err() {
                self.truncated = true;
                break;
            }
        }
        self.frames += 1;
    }
}
