//! Tick-based input debouncer
//!
//! Samples an input pin once per control-loop tick and keeps a short
//! history of raw samples; the debounced state only flips once the last
//! `settle_ticks` samples agree. Because the control loop is lock-step,
//! press duration is measured by counting ticks rather than reading a
//! clock.

use paternoster_core::traits::{DebouncedInput, InputPin};

/// Debouncer configuration
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebouncerConfig {
    /// Control-loop tick period in milliseconds
    pub tick_ms: u32,
    /// Consecutive agreeing samples required to flip the debounced
    /// state (1-8)
    pub settle_ticks: u8,
    /// If true, the electrical low level means pressed
    pub active_low: bool,
}

impl Default for DebouncerConfig {
    fn default() -> Self {
        Self {
            tick_ms: 10,
            settle_ticks: 4,
            active_low: true,
        }
    }
}

/// Sample-history debouncer over any input pin
///
/// The pin may be a direct MCU input or a
/// [`RegisterInputPin`](crate::shift::RegisterInputPin) addressing one
/// bit of a shift register; the debouncer cannot tell the difference.
pub struct TickDebouncer<P> {
    pin: P,
    config: DebouncerConfig,
    /// Raw pressed-samples, newest in bit 0
    history: u8,
    pressed: bool,
    rose: bool,
    fell: bool,
    /// Ticks spent in the current debounced state, counting the tick on
    /// which the state changed
    ticks_in_state: u32,
}

impl<P: InputPin> TickDebouncer<P> {
    /// Create a debouncer around a pin
    pub fn new(pin: P, config: DebouncerConfig) -> Self {
        debug_assert!((1..=8).contains(&config.settle_ticks));
        Self {
            pin,
            config,
            history: 0,
            pressed: false,
            rose: false,
            fell: false,
            ticks_in_state: 0,
        }
    }

    /// Get access to the underlying pin
    pub fn pin(&self) -> &P {
        &self.pin
    }

    fn window_mask(&self) -> u8 {
        if self.config.settle_ticks >= 8 {
            u8::MAX
        } else {
            (1 << self.config.settle_ticks) - 1
        }
    }
}

impl<P: InputPin> DebouncedInput for TickDebouncer<P> {
    fn update(&mut self) {
        let raw = self.pin.is_high();
        let active = raw != self.config.active_low;
        self.history = (self.history << 1) | u8::from(active);

        let window = self.history & self.window_mask();
        self.rose = false;
        self.fell = false;
        if !self.pressed && window == self.window_mask() {
            self.pressed = true;
            self.rose = true;
            self.ticks_in_state = 0;
        } else if self.pressed && window == 0 {
            self.pressed = false;
            self.fell = true;
            self.ticks_in_state = 0;
        }
        self.ticks_in_state = self.ticks_in_state.saturating_add(1);
    }

    fn is_pressed(&self) -> bool {
        self.pressed
    }

    fn rose(&self) -> bool {
        self.rose
    }

    fn fell(&self) -> bool {
        self.fell
    }

    fn duration_ms(&self) -> u32 {
        self.ticks_in_state.saturating_mul(self.config.tick_ms)
    }
}
