// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::str::FromStr;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use spendscope::aggregation::category::{generate, summary_stats, top_slices};
use spendscope::config::PALETTE_SIZE;
use spendscope::models::{CategorySummary, FlowDirection, TimePeriod, Transaction};

fn reference() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 15)
        .unwrap()
        .and_hms_opt(18, 0, 0)
        .unwrap()
}

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn tx(amount: &str, category: &str) -> Transaction {
    Transaction::new(reference() - Duration::hours(2), dec(amount), "", category)
}

#[test]
fn expense_breakdown_sorted_with_percentages() {
    let txs = vec![tx("-10", "Food"), tx("-20", "Food"), tx("-5", "Transport")];
    let slices = generate(&txs, FlowDirection::Expense, TimePeriod::Week, reference());

    assert_eq!(slices.len(), 2);
    assert_eq!(slices[0].category, "Food");
    assert_eq!(slices[0].amount, dec("30"));
    assert!((slices[0].percentage_of_total - 85.71).abs() < 0.01);
    assert_eq!(slices[1].category, "Transport");
    assert_eq!(slices[1].amount, dec("5"));
    assert!((slices[1].percentage_of_total - 14.29).abs() < 0.01);

    let summary = summary_stats(&txs, FlowDirection::Expense, TimePeriod::Week, reference());
    assert_eq!(summary.category_count, 2);
    assert_eq!(summary.total_amount, dec("35"));
}

#[test]
fn percentages_sum_to_one_hundred() {
    let txs = vec![
        tx("-3", "A"),
        tx("-3", "B"),
        tx("-3", "C"),
        tx("-0.01", "D"),
        tx("-17.77", "E"),
    ];
    let slices = generate(&txs, FlowDirection::Expense, TimePeriod::Month, reference());
    let sum: f64 = slices.iter().map(|s| s.percentage_of_total).sum();
    assert!((sum - 100.0).abs() < 1e-6);
    let amount: Decimal = slices.iter().map(|s| s.amount).sum();
    assert_eq!(amount, dec("26.78"));
}

#[test]
fn wrong_direction_gives_empty_result_without_dividing_by_zero() {
    let txs = vec![tx("2500", "Salary"), tx("0", "Nothing")];
    let slices = generate(&txs, FlowDirection::Expense, TimePeriod::Week, reference());
    assert!(slices.is_empty());
    let summary = summary_stats(&txs, FlowDirection::Expense, TimePeriod::Week, reference());
    assert_eq!(summary, CategorySummary::default());
    assert_eq!(summary.total_amount, Decimal::ZERO);
    assert_eq!(summary.category_count, 0);
}

#[test]
fn income_direction_ignores_expenses_and_zeroes() {
    let txs = vec![tx("100", "Salary"), tx("-40", "Food"), tx("0", "Salary")];
    let slices = generate(&txs, FlowDirection::Income, TimePeriod::Week, reference());
    assert_eq!(slices.len(), 1);
    assert_eq!(slices[0].amount, dec("100"));
    assert_eq!(slices[0].percentage_of_total, 100.0);
}

#[test]
fn empty_category_merges_with_other() {
    let txs = vec![tx("-4", ""), tx("-6", "Other"), tx("-1", "Food")];
    let slices = generate(&txs, FlowDirection::Expense, TimePeriod::Week, reference());
    assert_eq!(slices[0].category, "Other");
    assert_eq!(slices[0].amount, dec("10"));
    assert_eq!(slices.len(), 2);
}

#[test]
fn emoji_prefixed_labels_are_distinct_categories() {
    let txs = vec![tx("-4", "☕ Coffee"), tx("-6", "Coffee")];
    let slices = generate(&txs, FlowDirection::Expense, TimePeriod::Week, reference());
    assert_eq!(slices.len(), 2);
}

// Ordering among equal amounts is implementation-defined; this crate keeps
// first-seen order.
#[test]
fn ties_keep_first_seen_order() {
    let txs = vec![tx("-5", "Books"), tx("-5", "Art"), tx("-9", "Rent"), tx("-5", "Cafe")];
    let slices = generate(&txs, FlowDirection::Expense, TimePeriod::Week, reference());
    let order: Vec<_> = slices.iter().map(|s| s.category.as_str()).collect();
    assert_eq!(order, ["Rent", "Books", "Art", "Cafe"]);
}

#[test]
fn color_index_wraps_around_palette() {
    let txs: Vec<Transaction> = (0..PALETTE_SIZE + 2)
        .map(|i| tx(&format!("-{}", 100 - i), &format!("C{i}")))
        .collect();
    let slices = generate(&txs, FlowDirection::Expense, TimePeriod::Week, reference());
    for (rank, s) in slices.iter().enumerate() {
        assert_eq!(s.color_index, rank % PALETTE_SIZE);
    }
    assert_eq!(slices[PALETTE_SIZE].color_index, 0);
}

#[test]
fn top_slices_is_a_prefix() {
    let txs = vec![tx("-1", "A"), tx("-3", "B"), tx("-2", "C")];
    let all = generate(&txs, FlowDirection::Expense, TimePeriod::Week, reference());
    let top = top_slices(&txs, FlowDirection::Expense, TimePeriod::Week, reference(), 2);
    assert_eq!(top, all[..2].to_vec());
    let more = top_slices(&txs, FlowDirection::Expense, TimePeriod::Week, reference(), 10);
    assert_eq!(more, all);
}

#[test]
fn out_of_window_transactions_are_ignored() {
    let mut old = tx("-50", "Food");
    old.timestamp = reference() - Duration::days(8);
    let txs = vec![old, tx("-5", "Food")];
    let summary = summary_stats(&txs, FlowDirection::Expense, TimePeriod::Week, reference());
    assert_eq!(summary.total_amount, dec("5"));
    let yearly = summary_stats(&txs, FlowDirection::Expense, TimePeriod::Year, reference());
    assert_eq!(yearly.total_amount, dec("55"));
}

#[test]
fn generating_twice_is_identical() {
    let txs = vec![tx("-5", "B"), tx("-5", "A"), tx("-7", "")];
    let first = generate(&txs, FlowDirection::Expense, TimePeriod::Week, reference());
    let second = generate(&txs, FlowDirection::Expense, TimePeriod::Week, reference());
    assert_eq!(first, second);
}

#[test]
fn totals_past_decimal_range_saturate() {
    let txs = vec![
        Transaction::new(reference() - Duration::hours(1), Decimal::MIN, "", "Huge"),
        Transaction::new(reference() - Duration::hours(2), Decimal::MIN, "", "Huge"),
    ];
    let slices = generate(&txs, FlowDirection::Expense, TimePeriod::Week, reference());
    assert_eq!(slices.len(), 1);
    assert_eq!(slices[0].amount, Decimal::MAX);
    assert_eq!(slices[0].percentage_of_total, 100.0);

    let summary = summary_stats(&txs, FlowDirection::Expense, TimePeriod::Week, reference());
    assert_eq!(summary.total_amount, Decimal::MAX);
    assert_eq!(summary.category_count, 1);
}
