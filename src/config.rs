// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Static configuration shared by the aggregation engine and the CLI.
//!
//! Every tunable number the charts depend on lives here so it can be
//! adjusted in one place.

use chrono::Weekday;
use once_cell::sync::Lazy;

/// Trailing window length, in calendar days.
pub const WEEK_WINDOW_DAYS: u64 = 7;
pub const MONTH_WINDOW_DAYS: u64 = 30;
pub const YEAR_WINDOW_DAYS: u64 = 365;

/// Number of chart buckets per period. Not derived from the window length.
pub const WEEK_BUCKETS: u32 = 7;
pub const MONTH_BUCKETS: u32 = 4;
pub const YEAR_BUCKETS: u32 = 12;

/// Number of distinct colors in the category palette.
pub const PALETTE_SIZE: usize = 13;

/// First day of a calendar week for month-view buckets. A display
/// convention: "Week N" buckets are aligned to this weekday whatever day
/// the reference date falls on.
pub const WEEK_START: Weekday = Weekday::Mon;

/// Category used when a transaction carries an empty label.
pub const FALLBACK_CATEGORY: &str = "Other";

pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Env var that overrides the on-disk database location.
pub const DB_PATH_ENV: &str = "SPENDSCOPE_DB";

pub static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Spendscope", "spendscope"));
