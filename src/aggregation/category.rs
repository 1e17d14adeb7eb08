// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Category breakdowns for pie charts.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::aggregation::window;
use crate::config;
use crate::models::{
    CategorySlice, CategorySummary, FlowDirection, TimePeriod, Transaction, saturating_sum,
};

/// Slices sorted by amount, largest first. Equal amounts keep the order in
/// which their category was first seen in `transactions`.
pub fn generate(
    transactions: &[Transaction],
    direction: FlowDirection,
    period: TimePeriod,
    reference: NaiveDateTime,
) -> Vec<CategorySlice> {
    let mut groups = group(transactions, direction, period, reference);
    let total = saturating_sum(groups.iter().map(|(_, amount)| *amount));
    groups.sort_by(|a, b| b.1.cmp(&a.1));

    let slices: Vec<CategorySlice> = groups
        .into_iter()
        .enumerate()
        .map(|(rank, (category, amount))| CategorySlice {
            percentage_of_total: percentage(amount, total),
            color_index: rank % config::PALETTE_SIZE,
            category,
            amount,
        })
        .collect();
    tracing::debug!(
        %direction,
        %period,
        %reference,
        %total,
        slices = slices.len(),
        "generated category slices"
    );
    slices
}

/// The first `n` slices of [`generate`].
pub fn top_slices(
    transactions: &[Transaction],
    direction: FlowDirection,
    period: TimePeriod,
    reference: NaiveDateTime,
    n: usize,
) -> Vec<CategorySlice> {
    let mut slices = generate(transactions, direction, period, reference);
    slices.truncate(n);
    slices
}

pub fn summary_stats(
    transactions: &[Transaction],
    direction: FlowDirection,
    period: TimePeriod,
    reference: NaiveDateTime,
) -> CategorySummary {
    let groups = group(transactions, direction, period, reference);
    CategorySummary {
        total_amount: saturating_sum(groups.iter().map(|(_, amount)| *amount)),
        category_count: groups.len(),
    }
}

/// Absolute totals per category, in first-seen order.
fn group(
    transactions: &[Transaction],
    direction: FlowDirection,
    period: TimePeriod,
    reference: NaiveDateTime,
) -> Vec<(String, Decimal)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(String, Decimal)> = Vec::new();

    for t in window::filter(transactions, period, reference)
        .into_iter()
        .filter(|t| direction.includes(t.amount))
    {
        let label = t.category_label();
        match index.get(label) {
            Some(&i) => groups[i].1 = groups[i].1.saturating_add(t.amount.abs()),
            None => {
                index.insert(label, groups.len());
                groups.push((label.to_string(), t.amount.abs()));
            }
        }
    }
    groups
}

fn percentage(amount: Decimal, total: Decimal) -> f64 {
    if total <= Decimal::ZERO {
        return 0.0;
    }
    amount
        .checked_div(total)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .and_then(|pct| pct.to_f64())
        .unwrap_or(0.0)
}
