//! Identity table calculator.
//!
//! Derives channel numbers and Tx/Rx frequency pairs for a band plan, and
//! prints the identity table line for the network configuration system.
//
// https://github.com/rust-radio/bandplan
// Copyright 2021 Ryan Kurte

use log::warn;

use structopt::StructOpt;

use bandplan::prelude::*;

#[derive(Debug, StructOpt)]
#[structopt(name = "iden-calc", about = "Band plan identity table calculator")]
struct Options {
    /// Base frequency (in Hz)
    #[structopt(long)]
    pub base: i64,

    /// Channel spacing (in KHz)
    #[structopt(long)]
    pub spacing: f64,

    /// Input offset (in MHz)
    #[structopt(long)]
    pub offset: f64,

    /// Bandwidth (in KHz)
    #[structopt(long)]
    pub bandwidth: f64,

    /// Transmit frequency (in Hz, within the band of the base frequency)
    #[structopt(long)]
    pub tx: Option<i64>,

    /// Logical channel number (hexadecimal, with or without 0x prefix)
    #[structopt(long = "ch-no", parse(try_from_str = parse_hex))]
    pub ch_no: Option<u32>,

    #[structopt(long, default_value = "info")]
    /// Configure log level
    pub log_level: simplelog::LevelFilter,
}

/// Parses a channel number from hexadecimal text, `0x` prefix optional
fn parse_hex(s: &str) -> Result<u32, std::num::ParseIntError> {
    let s = s.trim_start_matches("0x").trim_start_matches("0X");
    u32::from_str_radix(s, 16)
}

fn main() -> anyhow::Result<()> {
    // Load options
    let opts = Options::from_args();

    // Initialise logging
    let _ = simplelog::SimpleLogger::init(opts.log_level, simplelog::Config::default());

    println!("Band Plan Identity Table Calculator {}", env!("CARGO_PKG_VERSION"));

    let plan = BandPlan::new(opts.base, opts.spacing, opts.offset, opts.bandwidth);
    let query = ChannelQuery {
        channel: opts.ch_no,
        tx_freq_hz: opts.tx,
    };

    let result = match channels::resolve(&plan, &query) {
        Ok(r) => r,
        Err(e) => {
            println!("ERROR: {}", e);
            std::process::exit(1);
        }
    };

    println!();
    println!("Identity Data:");
    println!("Base Frequency: {:.5} MHz", plan.base_freq_hz as f64 / HZ_PER_MHZ);
    println!("Channel Spacing: {:.2} KHz", plan.spacing_khz);
    println!("Receive Offset: {:.3} MHz", plan.offset_mhz);
    println!("Channel Bandwidth: {:.2} KHz", plan.bandwidth_khz);

    println!();
    println!("Identity Table Line: \"{}\"", plan.identity());

    // The derivations accept channels mapping below the base frequency;
    // flag it since such a pair is unusable on the air
    if result.rx_freq_hz < plan.base_freq_hz && plan.offset_mhz < 0.0 {
        warn!(
            "Rx frequency ({:.5} MHz) is below the base frequency ({:.5} MHz)",
            result.rx_freq_hz as f64 / HZ_PER_MHZ,
            plan.base_freq_hz as f64 / HZ_PER_MHZ
        );
    }

    println!();
    println!("Channel Data:");
    println!("Channel Number: {:x}", result.channel);
    println!("Tx Frequency: {:.5} MHz", result.tx_freq_hz as f64 / HZ_PER_MHZ);
    println!("Rx Frequency: {:.5} MHz", result.rx_freq_hz as f64 / HZ_PER_MHZ);

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn hex_channel_parsing() {
        assert_eq!(parse_hex("0x01"), Ok(1));
        assert_eq!(parse_hex("2"), Ok(2));
        assert_eq!(parse_hex("ff"), Ok(255));
        assert_eq!(parse_hex("0XFF"), Ok(255));

        assert!(parse_hex("zz").is_err());
        assert!(parse_hex("").is_err());
    }
}
