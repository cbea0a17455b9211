//! Board-agnostic panel I/O logic for the elevator controller
//!
//! This crate contains everything that does not touch concrete hardware:
//!
//! - Capability traits (digital pins, millisecond delay, debounced input)
//! - The press/hold/toggle button state machine
//!
//! Concrete transports (shift registers, debouncers, displays) live in
//! `paternoster-drivers` and implement the traits defined here.
//!
//! # Tick ordering
//!
//! The whole layer is poll-driven from a single control loop. Within one
//! tick, callers must capture all multiplexed inputs first, then run every
//! button's [`Button::update`](button::Button::update), then commit all
//! multiplexed outputs. Interleaving a partial capture or commit with
//! button logic produces torn reads/writes across lines that share one
//! register.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod button;
pub mod traits;
