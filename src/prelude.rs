//! Bandplan crate prelude
//
// https://github.com/rust-radio/bandplan
// Copyright 2021 Ryan Kurte

pub use crate::{Hz, HZ_PER_KHZ, HZ_PER_MHZ, MAX_FREQ_GAP_HZ};

pub use crate::plan::{BandPlan, IdentityDescriptor};

pub use crate::channels::{self, ChannelQuery, ChannelResult};

pub use crate::error::ValidationError;
