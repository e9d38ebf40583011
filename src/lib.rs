//! Band plan channel / frequency mapping.
//!
//! Maps a radio network's logical channel numbers onto physical Tx/Rx
//! frequency pairs, given a band plan (base frequency, channel spacing,
//! input offset, bandwidth), and renders the identity table line consumed
//! by the wider network configuration tooling.
//
// https://github.com/rust-radio/bandplan
// Copyright 2021 Ryan Kurte

#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod plan;

pub mod channels;

pub mod error;

pub mod prelude;

/// Frequencies are signed 64-bit in Hz
pub type Hz = i64;

/// Maximum supported band span, 25.5 MHz above the base frequency
pub const MAX_FREQ_GAP_HZ: Hz = 25_500_000;

/// Hz per MHz
pub const HZ_PER_MHZ: f64 = 1_000_000.0;

/// Hz per KHz
pub const HZ_PER_KHZ: f64 = 1000.0;
