//! Shift-register transports
//!
//! Multiplexes up to 8 digital lines per register chip onto a
//! (data, clock, latch) pin triple. Input registers (74HC165-class)
//! parallel-load on a latch pulse and are then shifted in serially;
//! output registers (74HC595-class) are shifted out serially and made
//! visible on all parallel outputs at once by the latch pulse. Both
//! directions are most-significant-bit-first: bit *i* of a transported
//! byte corresponds to physical register line *i*, no matter how many
//! logical devices share the register.
//!
//! Several adapter pins ([`RegisterInputPin`], [`RegisterOutputPin`]) may
//! address different bits of one transport; the transport itself is
//! updated exactly once per control-loop tick.

mod input;
mod output;
mod pin;

pub use input::ShiftRegisterInput;
pub use output::ShiftRegisterOutput;
pub use pin::{RegisterInputPin, RegisterOutputPin};

/// Read side of a captured input register
///
/// Implemented by [`ShiftRegisterInput`]; the trait is the seam that lets
/// adapter pins (and tests) address a register without naming its pin
/// generics.
pub trait InputRegister {
    /// Level of register input `bit` (0-7) as of the last update
    fn read(&self, bit: u8) -> bool;
}

/// Write side of a pending output register
///
/// Implemented by [`ShiftRegisterOutput`]. Writes land in the pending
/// image and only reach the hardware on the transport's next update.
pub trait OutputRegister {
    /// Set or clear pending bit `bit`
    fn write(&mut self, bit: u8, on: bool);

    /// Current pending state of bit `bit`
    fn is_set(&self, bit: u8) -> bool;
}
