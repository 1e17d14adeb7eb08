// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Income/expense bar-chart series over a trailing window.

use chrono::{Datelike, Days, Months, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

use crate::aggregation::window;
use crate::config;
use crate::models::{TimePeriod, TimeSeriesPoint, Transaction};

/// Half-open `[start, end)` chart bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub label: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Bucket {
    pub fn contains(&self, ts: NaiveDateTime) -> bool {
        ts >= self.start && ts < self.end
    }
}

/// One point per bucket, oldest first. Always `period.bucket_count()` points.
pub fn generate(
    transactions: &[Transaction],
    period: TimePeriod,
    reference: NaiveDateTime,
) -> Vec<TimeSeriesPoint> {
    let windowed = window::filter(transactions, period, reference);
    let points: Vec<TimeSeriesPoint> = buckets(period, reference)
        .into_iter()
        .map(|bucket| {
            let (income, expense) = totals(
                windowed
                    .iter()
                    .copied()
                    .filter(|t| bucket.contains(t.timestamp)),
            );
            TimeSeriesPoint {
                label: bucket.label,
                income,
                expense,
            }
        })
        .collect();
    tracing::debug!(
        %period,
        %reference,
        windowed = windowed.len(),
        points = points.len(),
        "generated time series"
    );
    points
}

/// Bucket edges for `period`, counted back from `reference`, oldest first.
pub fn buckets(period: TimePeriod, reference: NaiveDateTime) -> Vec<Bucket> {
    let day_start = reference.date().and_time(NaiveTime::MIN);
    let count = period.bucket_count();

    // Built newest to oldest, then flipped.
    let mut edges: Vec<(NaiveDateTime, NaiveDateTime)> = (0..count)
        .map(|i| match period {
            TimePeriod::Week => {
                let start = sub_days(day_start, u64::from(i));
                (start, add_days(start, 1))
            }
            TimePeriod::Month => {
                let start = sub_days(week_start(day_start), 7 * u64::from(i));
                (start, add_days(start, 7))
            }
            TimePeriod::Year => {
                let start = sub_months(month_start(day_start), i);
                (start, add_months(start, 1))
            }
        })
        .collect();
    edges.reverse();

    edges
        .into_iter()
        .enumerate()
        .map(|(pos, (start, end))| Bucket {
            label: label(period, pos, start),
            start,
            end,
        })
        .collect()
}

fn label(period: TimePeriod, pos: usize, start: NaiveDateTime) -> String {
    match period {
        TimePeriod::Week => start.format("%a").to_string(),
        // Positional, not the calendar week number.
        TimePeriod::Month => format!("Week {}", pos + 1),
        TimePeriod::Year => start.format("%b").to_string(),
    }
}

fn totals<'a>(transactions: impl Iterator<Item = &'a Transaction>) -> (Decimal, Decimal) {
    let mut income = Decimal::ZERO;
    let mut expense = Decimal::ZERO;
    for t in transactions {
        if t.amount > Decimal::ZERO {
            income = income.saturating_add(t.amount);
        } else if t.amount < Decimal::ZERO {
            expense = expense.saturating_add(t.amount);
        }
    }
    (income, expense.abs())
}

fn week_start(day_start: NaiveDateTime) -> NaiveDateTime {
    let offset = (day_start.weekday().num_days_from_monday() + 7
        - config::WEEK_START.num_days_from_monday())
        % 7;
    sub_days(day_start, u64::from(offset))
}

fn month_start(day_start: NaiveDateTime) -> NaiveDateTime {
    day_start
        .with_day(1)
        .unwrap_or(day_start)
}

fn sub_days(ts: NaiveDateTime, n: u64) -> NaiveDateTime {
    ts.checked_sub_days(Days::new(n))
        .unwrap_or(NaiveDateTime::MIN)
}

fn add_days(ts: NaiveDateTime, n: u64) -> NaiveDateTime {
    ts.checked_add_days(Days::new(n))
        .unwrap_or(NaiveDateTime::MAX)
}

fn sub_months(ts: NaiveDateTime, n: u32) -> NaiveDateTime {
    ts.checked_sub_months(Months::new(n))
        .unwrap_or(NaiveDateTime::MIN)
}

fn add_months(ts: NaiveDateTime, n: u32) -> NaiveDateTime {
    ts.checked_add_months(Months::new(n))
        .unwrap_or(NaiveDateTime::MAX)
}
