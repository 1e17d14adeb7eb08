// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Presentation pipeline run on demand over an immutable snapshot:
//! `transactions -> filter_by_search -> group_by_day` for the list view and
//! `transactions -> summary_rows` for the dashboard header.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::aggregation::{category, window};
use crate::models::{
    DayGroup, FlowDirection, SummaryRow, SummaryValue, TimePeriod, Transaction, saturating_sum,
};
use crate::utils::fmt_money;

/// Case-insensitive substring match on note or category.
pub fn filter_by_search<'a>(transactions: &'a [Transaction], query: &str) -> Vec<&'a Transaction> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return transactions.iter().collect();
    }
    transactions
        .iter()
        .filter(|t| {
            t.note.to_lowercase().contains(&needle)
                || t.category_label().to_lowercase().contains(&needle)
        })
        .collect()
}

/// Newest day first; newest transaction first within a day.
pub fn group_by_day<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Vec<DayGroup> {
    let mut sorted: Vec<&Transaction> = transactions.into_iter().collect();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let mut days: Vec<DayGroup> = Vec::new();
    for t in sorted {
        match days.last_mut() {
            Some(day) if day.date == t.date() => day.transactions.push(t.clone()),
            _ => days.push(DayGroup {
                date: t.date(),
                transactions: vec![t.clone()],
            }),
        }
    }
    days
}

/// Header rows for the dashboard over the trailing window.
pub fn summary_rows(
    transactions: &[Transaction],
    period: TimePeriod,
    reference: NaiveDateTime,
) -> Vec<SummaryRow> {
    let windowed = window::filter(transactions, period, reference);
    let income: Decimal =
        saturating_sum(windowed.iter().filter(|t| t.is_income()).map(|t| t.amount));
    let expense: Decimal = saturating_sum(
        windowed
            .iter()
            .filter(|t| t.is_expense())
            .map(|t| t.amount.abs()),
    );
    let top = category::top_slices(transactions, FlowDirection::Expense, period, reference, 1)
        .into_iter()
        .next()
        .map(|s| s.category)
        .unwrap_or_else(|| "-".to_string());

    vec![
        row("Income", SummaryValue::Currency(income)),
        row("Expenses", SummaryValue::Currency(expense)),
        row("Net", SummaryValue::Currency(income - expense)),
        row("Transactions", SummaryValue::Count(windowed.len())),
        row("Top expense", SummaryValue::Text(top)),
    ]
}

fn row(title: &str, value: SummaryValue) -> SummaryRow {
    SummaryRow {
        title: title.to_string(),
        value,
    }
}

impl SummaryValue {
    pub fn render(&self, symbol: &str) -> String {
        match self {
            SummaryValue::Currency(d) => fmt_money(d, symbol),
            SummaryValue::Count(n) => n.to_string(),
            SummaryValue::Text(s) => s.clone(),
        }
    }
}
