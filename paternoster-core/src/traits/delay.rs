//! Blocking delay abstraction
//!
//! Shift-register latch timing needs short busy-wait delays. Injecting
//! the delay as a capability keeps drivers testable with zero real delay
//! while production code uses the board's timer.

/// Millisecond-resolution blocking delay
pub trait DelayMs {
    /// Block for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
}
