//! Debounced input abstraction
//!
//! A debounced input turns a raw, possibly-bouncing line into a stable
//! pressed/released level with edge and duration tracking. Edges are
//! reported in *logical button* terms: [`rose`](DebouncedInput::rose)
//! means the debounced state became pressed, regardless of electrical
//! polarity. Active-low wiring is the implementation's concern.

/// Debounced button input
///
/// Implementations sample their raw source once per
/// [`update`](DebouncedInput::update) call; all other methods report the
/// state computed by the most recent update.
pub trait DebouncedInput {
    /// Take one raw sample and advance the debounce state
    fn update(&mut self);

    /// Current debounced level: is the button pressed?
    fn is_pressed(&self) -> bool;

    /// Did the debounced state transition to pressed on the last update?
    fn rose(&self) -> bool;

    /// Did the debounced state transition to released on the last update?
    fn fell(&self) -> bool;

    /// Milliseconds spent in the current debounced state
    fn duration_ms(&self) -> u32;
}
