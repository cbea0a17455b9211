//! Hardware driver implementations
//!
//! This crate provides the concrete I/O drivers behind the traits defined
//! in paternoster-core:
//!
//! - Shift-register transports (74HC165-class inputs, 74HC595-class
//!   outputs) and per-bit adapter pins
//! - Tick-based input debouncer
//! - Two-digit seven-segment display
//!
//! # Tick ordering
//!
//! One control-loop tick must run the phases in order: update every input
//! transport (capturing all multiplexed input bits at once), run all
//! button/controller logic, then update every output transport
//! (committing all multiplexed output bits at once). Splitting a capture
//! or commit around controller logic leaves some bits reflecting the old
//! register state and some the new.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod debounce;
pub mod sevenseg;
pub mod shift;
