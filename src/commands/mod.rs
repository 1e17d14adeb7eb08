// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod reports;
pub mod seed;
pub mod settings;
pub mod transactions;

use anyhow::Result;
use chrono::NaiveDateTime;

use crate::utils::{now, parse_timestamp};

/// `--at` if given, otherwise the current local time.
pub(crate) fn reference_time(sub: &clap::ArgMatches) -> Result<NaiveDateTime> {
    match sub.get_one::<String>("at") {
        Some(s) => Ok(parse_timestamp(s)?),
        None => Ok(now()),
    }
}

pub(crate) fn required<'a>(sub: &'a clap::ArgMatches, name: &str) -> Result<&'a String> {
    sub.get_one::<String>(name)
        .ok_or_else(|| anyhow::anyhow!("Missing required argument --{}", name))
}
