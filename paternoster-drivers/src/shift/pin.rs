//! Per-bit adapter pins over a shared transport
//!
//! A register transport is one physical chip, but the logical devices
//! wired to it (buttons, lamps) each care about a single bit. These
//! adapters expose one bit of a shared transport as an ordinary pin so
//! button logic and debouncers never know the line is multiplexed.
//!
//! The transport sits behind a `RefCell` because several adapters address
//! the same chip; the panel runs a single control loop, so interior
//! mutability is all the sharing discipline needed. The adapters also
//! implement the embedded-hal 1.0 digital traits (infallibly), so
//! third-party drivers can bind straight to a register bit.

use core::cell::RefCell;
use core::convert::Infallible;

use paternoster_core::traits::{InputPin, OutputPin};

use super::{InputRegister, OutputRegister};

/// One bit of a captured input register, read as a pin
///
/// Reads are snapshots of the transport's last capture; the adapter
/// itself is stateless.
pub struct RegisterInputPin<'a, R> {
    register: &'a RefCell<R>,
    bit: u8,
}

impl<'a, R: InputRegister> RegisterInputPin<'a, R> {
    /// Adapt bit `bit` of a shared input transport
    pub fn new(register: &'a RefCell<R>, bit: u8) -> Self {
        Self { register, bit }
    }
}

impl<R: InputRegister> InputPin for RegisterInputPin<'_, R> {
    fn is_high(&self) -> bool {
        self.register.borrow().read(self.bit)
    }
}

impl<R: InputRegister> embedded_hal::digital::ErrorType for RegisterInputPin<'_, R> {
    type Error = Infallible;
}

impl<R: InputRegister> embedded_hal::digital::InputPin for RegisterInputPin<'_, R> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(InputPin::is_high(self))
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(InputPin::is_low(self))
    }
}

/// One bit of a pending output register, written as a pin
///
/// Writes land in the transport's pending image and reach the hardware
/// on the transport's next commit; the adapter itself is stateless.
pub struct RegisterOutputPin<'a, R> {
    register: &'a RefCell<R>,
    bit: u8,
}

impl<'a, R: OutputRegister> RegisterOutputPin<'a, R> {
    /// Adapt bit `bit` of a shared output transport
    pub fn new(register: &'a RefCell<R>, bit: u8) -> Self {
        Self { register, bit }
    }
}

impl<R: OutputRegister> OutputPin for RegisterOutputPin<'_, R> {
    fn set_high(&mut self) {
        self.register.borrow_mut().write(self.bit, true);
    }

    fn set_low(&mut self) {
        self.register.borrow_mut().write(self.bit, false);
    }

    fn is_set_high(&self) -> bool {
        self.register.borrow().is_set(self.bit)
    }
}

impl<R: OutputRegister> embedded_hal::digital::ErrorType for RegisterOutputPin<'_, R> {
    type Error = Infallible;
}

impl<R: OutputRegister> embedded_hal::digital::OutputPin for RegisterOutputPin<'_, R> {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        OutputPin::set_high(self);
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        OutputPin::set_low(self);
        Ok(())
    }
}

impl<R: OutputRegister> embedded_hal::digital::StatefulOutputPin for RegisterOutputPin<'_, R> {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(OutputPin::is_set_high(self))
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(OutputPin::is_set_low(self))
    }
}
