//! Band plan definition and identity table rendering.
//
// https://github.com/rust-radio/bandplan
// Copyright 2021 Ryan Kurte

use core::fmt;

use crate::Hz;

/// A single radio band's channel addressing scheme.
///
/// The four parameters are always supplied together; between them they fix
/// the mapping from logical channel numbers to Tx/Rx frequency pairs.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct BandPlan {
    /// Lowest frequency of the band's allocated spectrum, in Hz
    pub base_freq_hz: Hz,

    /// Separation between adjacent logical channels, in KHz
    pub spacing_khz: f64,

    /// Fixed Tx to Rx frequency difference, in MHz (may be negative)
    pub offset_mhz: f64,

    /// Occupied spectral width of a single channel, in KHz
    pub bandwidth_khz: f64,
}

impl BandPlan {
    pub fn new(base_freq_hz: Hz, spacing_khz: f64, offset_mhz: f64, bandwidth_khz: f64) -> Self {
        Self {
            base_freq_hz,
            spacing_khz,
            offset_mhz,
            bandwidth_khz,
        }
    }

    /// Identity table line for this plan, for ingestion by the network
    /// configuration system
    pub fn identity(&self) -> IdentityDescriptor {
        IdentityDescriptor { plan: *self }
    }
}

/// Renders a band plan as the fixed comma-delimited identity table line.
///
/// Layout is `xx,<baseHz>,<spacingKHz>,<offsetMHz>,<bandwidthKHz>,` with a
/// leading `xx` placeholder for the table row identifier, the offset at fixed
/// 3-decimal precision, and a trailing empty field. The layout is opaque to
/// this crate; the consuming configuration system defines it.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct IdentityDescriptor {
    plan: BandPlan,
}

impl fmt::Display for IdentityDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "xx,{},{},{:.3},{},",
            self.plan.base_freq_hz,
            self.plan.spacing_khz,
            self.plan.offset_mhz,
            self.plan.bandwidth_khz
        )
    }
}

#[cfg(test)]
mod test {
    use std::string::ToString;

    use super::*;

    #[test]
    fn identity_line() {
        let plan = BandPlan::new(851_000_000, 12.5, -45.0, 12.5);

        assert_eq!(
            plan.identity().to_string(),
            "xx,851000000,12.5,-45.000,12.5,"
        );
    }

    #[test]
    fn identity_line_positive_offset() {
        let plan = BandPlan::new(762_000_000, 6.25, 30.0, 6.25);

        assert_eq!(
            plan.identity().to_string(),
            "xx,762000000,6.25,30.000,6.25,"
        );
    }
}
