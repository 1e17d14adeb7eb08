// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Days, NaiveDateTime};

use crate::models::{TimePeriod, Transaction};

/// `reference` minus the period's day count, on the calendar.
pub fn window_start(period: TimePeriod, reference: NaiveDateTime) -> NaiveDateTime {
    reference
        .checked_sub_days(Days::new(period.days()))
        .unwrap_or(NaiveDateTime::MIN)
}

/// Transactions with `window_start <= timestamp <= reference`, in input order.
pub fn filter(
    transactions: &[Transaction],
    period: TimePeriod,
    reference: NaiveDateTime,
) -> Vec<&Transaction> {
    let start = window_start(period, reference);
    transactions
        .iter()
        .filter(|t| t.timestamp >= start && t.timestamp <= reference)
        .collect()
}
