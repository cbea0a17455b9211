//! Parallel-in/serial-out input transport (74HC165-class)

use paternoster_core::traits::{DelayMs, InputPin, OutputPin};

use super::InputRegister;

/// Latch-low settle time, long enough for the parallel load to complete
const LATCH_LOW_SETTLE_MS: u32 = 10;
/// Latch-high settle time before the first clock pulse
const LATCH_HIGH_SETTLE_MS: u32 = 1;

/// 8-bit parallel-load shift-in transport
///
/// Owns its (data, clock, latch) pin triple and delay source for the
/// life of the process. [`update`](Self::update) performs a full latch
/// cycle and capture; the captured byte persists until the next update,
/// so any number of per-bit reads within a tick see one consistent
/// snapshot.
pub struct ShiftRegisterInput<D, C, L, T> {
    data: D,
    clock: C,
    latch: L,
    delay: T,
    captured: u8,
}

impl<D, C, L, T> ShiftRegisterInput<D, C, L, T>
where
    D: InputPin,
    C: OutputPin,
    L: OutputPin,
    T: DelayMs,
{
    /// Create a new input transport
    ///
    /// The clock idles low and the latch idles high (register in shift
    /// mode) between updates.
    pub fn new(data: D, mut clock: C, mut latch: L, delay: T) -> Self {
        clock.set_low();
        latch.set_high();
        Self {
            data,
            clock,
            latch,
            delay,
            captured: 0,
        }
    }

    /// Latch the parallel inputs and shift in the full byte
    ///
    /// Pulses the latch low for the parallel load (held low 10 ms, then
    /// high 1 ms, letting the register settle on both sides of the load),
    /// then clocks in 8 bits MSB-first. This is the only mutator; bit
    /// reads are pure relative to the captured byte.
    pub fn update(&mut self) {
        self.latch.set_low();
        self.delay.delay_ms(LATCH_LOW_SETTLE_MS);
        self.latch.set_high();
        self.delay.delay_ms(LATCH_HIGH_SETTLE_MS);

        let mut byte = 0u8;
        for _ in 0..8 {
            self.clock.set_high();
            byte = (byte << 1) | u8::from(self.data.is_high());
            self.clock.set_low();
        }
        self.captured = byte;
    }

    /// The whole captured byte
    pub fn captured(&self) -> u8 {
        self.captured
    }
}

impl<D, C, L, T> InputRegister for ShiftRegisterInput<D, C, L, T>
where
    D: InputPin,
    C: OutputPin,
    L: OutputPin,
    T: DelayMs,
{
    fn read(&self, bit: u8) -> bool {
        assert!(bit < 8, "register bit index out of range");
        (self.captured >> bit) & 1 == 1
    }
}
