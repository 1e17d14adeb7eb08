// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use spendscope::models::{SummaryValue, TimePeriod, Transaction};
use spendscope::pipeline::{filter_by_search, group_by_day, summary_rows};

fn at(d: u32, h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, d)
        .unwrap()
        .and_hms_opt(h, 0, 0)
        .unwrap()
}

fn sample() -> Vec<Transaction> {
    vec![
        Transaction::new(at(14, 8), Decimal::new(-450, 2), "Latte", "☕ Coffee"),
        Transaction::new(at(15, 9), Decimal::new(250000, 2), "March salary", "💼 Salary"),
        Transaction::new(at(14, 19), Decimal::new(-4567, 2), "Weekly shop", "🛒 Groceries"),
        Transaction::new(at(15, 12), Decimal::new(-1200, 2), "Lunch with team", ""),
    ]
}

#[test]
fn search_matches_note_or_category_case_insensitively() {
    let txs = sample();
    let hits: Vec<_> = filter_by_search(&txs, "COFFEE").iter().map(|t| t.note.clone()).collect();
    assert_eq!(hits, ["Latte"]);
    let hits: Vec<_> = filter_by_search(&txs, "shop").iter().map(|t| t.note.clone()).collect();
    assert_eq!(hits, ["Weekly shop"]);
    assert_eq!(filter_by_search(&txs, "other").len(), 1);
    assert_eq!(filter_by_search(&txs, "   ").len(), 4);
    assert!(filter_by_search(&txs, "rent").is_empty());
}

#[test]
fn groups_newest_day_first_with_totals() {
    let txs = sample();
    let days = group_by_day(&txs);
    assert_eq!(days.len(), 2);
    assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2025, 3, 15).unwrap());
    assert_eq!(days[0].transactions[0].note, "Lunch with team");
    assert_eq!(days[0].transactions[1].note, "March salary");
    assert_eq!(days[0].income(), Decimal::new(250000, 2));
    assert_eq!(days[0].expense(), Decimal::new(1200, 2));
    assert_eq!(days[0].net(), Decimal::new(248800, 2));
    assert_eq!(days[1].transactions[0].note, "Weekly shop");
    assert_eq!(days[1].expense(), Decimal::new(5017, 2));
}

#[test]
fn search_then_group() {
    let txs = sample();
    let days = group_by_day(filter_by_search(&txs, "salary"));
    assert_eq!(days.len(), 1);
    assert_eq!(days[0].transactions.len(), 1);
}

#[test]
fn summary_rows_use_tagged_values() {
    let txs = sample();
    let rows = summary_rows(&txs, TimePeriod::Week, at(15, 18));
    let titles: Vec<_> = rows.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, ["Income", "Expenses", "Net", "Transactions", "Top expense"]);
    assert_eq!(rows[0].value, SummaryValue::Currency(Decimal::new(250000, 2)));
    assert_eq!(rows[1].value, SummaryValue::Currency(Decimal::new(6217, 2)));
    assert_eq!(rows[3].value, SummaryValue::Count(4));
    assert_eq!(rows[4].value, SummaryValue::Text("🛒 Groceries".to_string()));

    let rendered: Vec<_> = rows.iter().map(|r| r.value.render("$")).collect();
    assert_eq!(rendered, ["$2500.00", "$62.17", "$2437.83", "4", "🛒 Groceries"]);
}

#[test]
fn summary_rows_on_empty_snapshot() {
    let rows = summary_rows(&[], TimePeriod::Month, at(15, 18));
    assert_eq!(rows[2].value.render("€"), "€0.00");
    assert_eq!(rows[3].value, SummaryValue::Count(0));
    assert_eq!(rows[4].value.render("€"), "-");
}

#[test]
fn huge_amounts_saturate_in_days_and_summary() {
    let txs = vec![
        Transaction::new(at(15, 9), Decimal::MIN, "a", "Huge"),
        Transaction::new(at(15, 10), Decimal::MIN, "b", "Huge"),
    ];
    let days = group_by_day(&txs);
    assert_eq!(days[0].expense(), Decimal::MAX);
    assert_eq!(days[0].net(), Decimal::MIN);
    assert_eq!(days[0].income(), Decimal::ZERO);

    let rows = summary_rows(&txs, TimePeriod::Week, at(15, 18));
    assert_eq!(rows[1].value, SummaryValue::Currency(Decimal::MAX));
    assert_eq!(rows[2].value, SummaryValue::Currency(-Decimal::MAX));
}
