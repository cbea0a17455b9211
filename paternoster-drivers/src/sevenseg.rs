//! Two-digit seven-segment floor display
//!
//! The display is a pair of chained 74HC595-class registers, one byte per
//! digit. Segment bit positions follow the panel's physical wiring and
//! are not reorderable without rewiring the board.

use paternoster_core::traits::OutputPin;

use crate::shift::ShiftRegisterOutput;

/// Segment bit masks as wired on the display board
pub mod segments {
    /// Top bar
    pub const A: u8 = 0b0100_0000;
    /// Top right
    pub const B: u8 = 0b1000_0000;
    /// Bottom right
    pub const C: u8 = 0b0000_0001;
    /// Bottom bar
    pub const D: u8 = 0b0000_0010;
    /// Bottom left
    pub const E: u8 = 0b0000_0100;
    /// Top left
    pub const F: u8 = 0b0001_0000;
    /// Middle bar
    pub const G: u8 = 0b0000_1000;
    /// Decimal point
    pub const DP: u8 = 0b0010_0000;
}

/// Segment mask for a decimal digit
///
/// Total over all inputs: digits 0-9 map to their canonical seven-segment
/// patterns, anything else to the decimal-point-only mask, which doubles
/// as the blank/invalid sentinel.
pub const fn digit(number: u8) -> u8 {
    use segments::*;
    match number {
        0 => A | B | C | D | E | F,
        1 => B | C,
        2 => A | B | G | E | D,
        3 => A | B | C | D | G,
        4 => F | G | B | C,
        5 => A | F | G | C | D,
        6 => A | F | G | E | D | C,
        7 => A | B | C,
        8 => A | B | C | D | E | F | G,
        9 => A | B | C | D | F | G,
        _ => DP,
    }
}

/// Two-digit display over its own 2-byte output transport
///
/// Stores encoded masks in the transport's pending image; like any other
/// multiplexed output, nothing reaches the glass until
/// [`update`](Self::update) commits both digits at once.
pub struct SevenSegment<D, C, L> {
    register: ShiftRegisterOutput<D, C, L, 2>,
}

impl<D, C, L> SevenSegment<D, C, L>
where
    D: OutputPin,
    C: OutputPin,
    L: OutputPin,
{
    /// Create a display on a (data, clock, latch) pin triple
    pub fn new(data: D, clock: C, latch: L) -> Self {
        Self {
            register: ShiftRegisterOutput::new(data, clock, latch),
        }
    }

    /// Encode and store both digit positions
    pub fn set_digits(&mut self, left: u8, right: u8) {
        self.register.set_byte(0, digit(left));
        self.register.set_byte(1, digit(right));
    }

    /// Store a raw segment mask at one position
    pub fn set_raw(&mut self, position: usize, mask: u8) {
        self.register.set_byte(position, mask);
    }

    /// Store the blank sentinel at both positions
    pub fn blank(&mut self) {
        self.register.set_byte(0, segments::DP);
        self.register.set_byte(1, segments::DP);
    }

    /// Commit both digits to the glass
    pub fn update(&mut self) {
        self.register.update();
    }

    /// The pending segment masks, left then right
    pub fn pending(&self) -> &[u8; 2] {
        self.register.pending()
    }
}
