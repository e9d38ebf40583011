//! Validation errors for band plan queries.
//
// https://github.com/rust-radio/bandplan
// Copyright 2021 Ryan Kurte

use core::fmt;

use crate::{Hz, HZ_PER_MHZ};

/// Band plan query validation errors.
///
/// All variants are terminal for the invocation; no derivation runs once
/// validation has failed.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Neither or both of channel number and Tx frequency supplied
    AmbiguousQuery,

    /// Tx frequency below the band's base frequency
    FrequencyBelowBase { tx_hz: Hz, base_hz: Hz },

    /// Tx frequency more than 25.5 MHz above the base frequency
    FrequencyAboveMaxSpan { tx_hz: Hz, base_hz: Hz },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::AmbiguousQuery => {
                write!(f, "either a Tx frequency or a channel number must be specified (not both)")
            }
            ValidationError::FrequencyBelowBase { tx_hz, base_hz } => {
                write!(
                    f,
                    "Tx frequency ({:.5} MHz) is out of band range for base frequency ({:.5} MHz); Tx frequency must be greater than the base frequency",
                    *tx_hz as f64 / HZ_PER_MHZ,
                    *base_hz as f64 / HZ_PER_MHZ
                )
            }
            ValidationError::FrequencyAboveMaxSpan { tx_hz, base_hz } => {
                write!(
                    f,
                    "Tx frequency ({:.5} MHz) is out of band range for base frequency ({:.5} MHz); Tx frequency must be no more than 25.5 MHz higher than the base frequency",
                    *tx_hz as f64 / HZ_PER_MHZ,
                    *base_hz as f64 / HZ_PER_MHZ
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ValidationError {}
