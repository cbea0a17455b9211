//! Hardware abstraction traits
//!
//! These traits define the interface between the panel logic and
//! hardware-specific implementations. A "pin" here may be a real MCU
//! GPIO or one bit of a shift register; both implement the same trait
//! and the choice is made at construction time.

pub mod debounce;
pub mod delay;
pub mod gpio;

pub use debounce::DebouncedInput;
pub use delay::DelayMs;
pub use gpio::{InputPin, OutputPin};
