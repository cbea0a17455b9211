//! Serial-in/parallel-out output transport (74HC595-class)

use paternoster_core::traits::OutputPin;

use super::OutputRegister;

/// Shift-out transport driving `N` chained 8-bit registers
///
/// `N` is 1 for a plain LED register and 2 for the seven-segment display
/// chain. Writes accumulate in the pending image and reach the hardware
/// only on [`update`](Self::update), which makes every multi-bit change
/// visible on all parallel outputs atomically from the external
/// circuit's perspective.
pub struct ShiftRegisterOutput<D, C, L, const N: usize = 1> {
    data: D,
    clock: C,
    latch: L,
    pending: [u8; N],
}

impl<D, C, L, const N: usize> ShiftRegisterOutput<D, C, L, N>
where
    D: OutputPin,
    C: OutputPin,
    L: OutputPin,
{
    /// Create a new output transport with all pending bits clear
    pub fn new(mut data: D, mut clock: C, mut latch: L) -> Self {
        data.set_low();
        clock.set_low();
        latch.set_high();
        Self {
            data,
            clock,
            latch,
            pending: [0; N],
        }
    }

    /// Replace a whole pending byte
    ///
    /// Bytes shift out in index order, so `pending[0]` lands in the
    /// register furthest down the chain.
    pub fn set_byte(&mut self, index: usize, byte: u8) {
        self.pending[index] = byte;
    }

    /// Commit the pending image to the register chain
    ///
    /// Latch low, shift out every pending byte MSB-first, latch high. The
    /// parallel outputs change only on the final latch edge.
    pub fn update(&mut self) {
        self.latch.set_low();
        for i in 0..N {
            let byte = self.pending[i];
            for bit in (0..8).rev() {
                self.data.set_state((byte >> bit) & 1 == 1);
                self.clock.set_high();
                self.clock.set_low();
            }
        }
        self.latch.set_high();
    }

    /// The whole pending image
    pub fn pending(&self) -> &[u8; N] {
        &self.pending
    }
}

impl<D, C, L, const N: usize> OutputRegister for ShiftRegisterOutput<D, C, L, N>
where
    D: OutputPin,
    C: OutputPin,
    L: OutputPin,
{
    fn write(&mut self, bit: u8, on: bool) {
        assert!((bit as usize) < N * 8, "register bit index out of range");
        let mask = 1u8 << (bit % 8);
        let byte = &mut self.pending[bit as usize / 8];
        if on {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
    }

    fn is_set(&self, bit: u8) -> bool {
        assert!((bit as usize) < N * 8, "register bit index out of range");
        (self.pending[bit as usize / 8] >> (bit % 8)) & 1 == 1
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::vec::Vec;

    /// Shared recording of everything the transport put on the wire
    #[derive(Default)]
    pub(crate) struct Wire {
        pub data_high: bool,
        /// Data level sampled at each rising clock edge
        pub shifted: Vec<bool>,
        pub latch_pulses: usize,
        pub clock_edges_while_latch_high: usize,
        pub latch_low: bool,
    }

    impl Wire {
        /// Reassemble the bytes a chained register pair would hold after
        /// the last latch pulse, in shift order
        pub fn bytes(&self) -> Vec<u8> {
            self.shifted
                .chunks(8)
                .map(|chunk| chunk.iter().fold(0u8, |b, &hi| (b << 1) | u8::from(hi)))
                .collect()
        }
    }

    pub(crate) enum Role {
        Data,
        Clock,
        Latch,
    }

    pub(crate) struct WirePin {
        pub wire: Rc<RefCell<Wire>>,
        pub role: Role,
        pub high: bool,
    }

    impl WirePin {
        pub fn new(wire: &Rc<RefCell<Wire>>, role: Role) -> Self {
            Self {
                wire: Rc::clone(wire),
                role,
                high: false,
            }
        }
    }

    impl OutputPin for WirePin {
        fn set_high(&mut self) {
            let was_high = self.high;
            self.high = true;
            let mut wire = self.wire.borrow_mut();
            match self.role {
                Role::Data => wire.data_high = true,
                Role::Clock => {
                    if !was_high {
                        let level = wire.data_high;
                        wire.shifted.push(level);
                        if !wire.latch_low {
                            wire.clock_edges_while_latch_high += 1;
                        }
                    }
                }
                Role::Latch => {
                    if was_high != self.high {
                        wire.latch_low = false;
                        wire.latch_pulses += 1;
                    }
                }
            }
        }

        fn set_low(&mut self) {
            self.high = false;
            let mut wire = self.wire.borrow_mut();
            match self.role {
                Role::Data => wire.data_high = false,
                Role::Clock => {}
                Role::Latch => wire.latch_low = true,
            }
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    pub(crate) fn transport<const N: usize>() -> (
        ShiftRegisterOutput<WirePin, WirePin, WirePin, N>,
        Rc<RefCell<Wire>>,
    ) {
        let wire = Rc::new(RefCell::new(Wire::default()));
        let reg = ShiftRegisterOutput::new(
            WirePin::new(&wire, Role::Data),
            WirePin::new(&wire, Role::Clock),
            WirePin::new(&wire, Role::Latch),
        );
        // Constructor raises the latch once while idling the pins.
        wire.borrow_mut().latch_pulses = 0;
        (reg, wire)
    }

    #[test]
    fn shifts_pending_byte_msb_first() {
        let (mut reg, wire) = transport::<1>();
        reg.write(7, true);
        reg.write(1, true);
        reg.update();

        let wire = wire.borrow();
        assert_eq!(wire.shifted.len(), 8);
        assert_eq!(wire.bytes(), std::vec![0b1000_0010]);
    }

    #[test]
    fn writes_are_deferred_until_update() {
        let (mut reg, wire) = transport::<1>();
        reg.write(0, true);
        reg.write(3, true);
        reg.write(3, false);

        // Nothing on the wire yet: no clocking, no latch pulse.
        assert!(wire.borrow().shifted.is_empty());
        assert_eq!(wire.borrow().latch_pulses, 0);
        assert!(reg.is_set(0));
        assert!(!reg.is_set(3));

        reg.update();
        assert_eq!(wire.borrow().latch_pulses, 1);
        assert_eq!(wire.borrow().bytes(), std::vec![0b0000_0001]);
    }

    #[test]
    fn commit_is_atomic_all_clocking_happens_latched() {
        let (mut reg, wire) = transport::<1>();
        for bit in 0..8 {
            reg.write(bit, bit % 2 == 0);
        }
        reg.update();

        let wire = wire.borrow();
        // Every clock edge happened inside the latch-low window, so the
        // parallel outputs saw exactly one transition.
        assert_eq!(wire.clock_edges_while_latch_high, 0);
        assert_eq!(wire.latch_pulses, 1);
        assert_eq!(wire.bytes(), std::vec![0b0101_0101]);
    }

    #[test]
    fn two_byte_chain_shifts_in_index_order() {
        let (mut reg, wire) = transport::<2>();
        reg.set_byte(0, 0xA5);
        reg.set_byte(1, 0x3C);
        reg.update();

        assert_eq!(wire.borrow().shifted.len(), 16);
        assert_eq!(wire.borrow().bytes(), std::vec![0xA5, 0x3C]);
    }

    #[test]
    fn bit_writes_address_the_chain_across_bytes() {
        let (mut reg, _wire) = transport::<2>();
        reg.write(2, true);
        reg.write(9, true);
        assert_eq!(reg.pending(), &[0b0000_0100, 0b0000_0010]);
        assert!(reg.is_set(9));
        assert!(!reg.is_set(10));
    }

    #[test]
    #[should_panic(expected = "register bit index out of range")]
    fn out_of_range_bit_is_rejected() {
        let (mut reg, _wire) = transport::<1>();
        reg.write(8, true);
    }
}
