// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use serde_json::json;

use crate::aggregation::{category, time_series};
use crate::commands::{reference_time, required};
use crate::db::{self, SqliteStore, TransactionStore};
use crate::models::{
    CategorySlice, CategorySummary, FlowDirection, SummaryRow, TimePeriod, TimeSeriesPoint,
};
use crate::pipeline::summary_rows;
use crate::utils::{fmt_money, fmt_percent, maybe_print_json, pretty_table};

pub fn handle(store: &SqliteStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("chart", sub)) => chart(store, sub)?,
        Some(("pie", sub)) => pie(store, sub)?,
        Some(("summary", sub)) => summary(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn period(sub: &clap::ArgMatches) -> Result<TimePeriod> {
    Ok(required(sub, "period")?.parse::<TimePeriod>()?)
}

fn direction(sub: &clap::ArgMatches) -> Result<FlowDirection> {
    Ok(required(sub, "direction")?.parse::<FlowDirection>()?)
}

/// Bar-chart points for `report chart`, oldest bucket first.
pub fn chart_points<S: TransactionStore>(
    store: &S,
    sub: &clap::ArgMatches,
) -> Result<Vec<TimeSeriesPoint>> {
    let period = period(sub)?;
    let reference = reference_time(sub)?;
    let snapshot = store.fetch_all().context("Failed to load transactions")?;
    Ok(time_series::generate(&snapshot, period, reference))
}

fn chart(store: &SqliteStore, sub: &clap::ArgMatches) -> Result<()> {
    let points = chart_points(store, sub)?;
    let payload: Vec<_> = points
        .iter()
        .map(|p| {
            json!({
                "label": p.label,
                "income": p.income,
                "expense": p.expense,
                "net": p.net(),
            })
        })
        .collect();
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &payload)? {
        return Ok(());
    }
    let symbol = db::get_currency_symbol(store.connection())?;
    let data = points
        .iter()
        .map(|p| {
            vec![
                p.label.clone(),
                fmt_money(&p.income, &symbol),
                fmt_money(&p.expense, &symbol),
                fmt_money(&p.net(), &symbol),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Period", "Income", "Expense", "Net"], data)
    );
    Ok(())
}

/// Category slices for `report pie`, honouring `--top`, plus the summary.
pub fn pie_slices<S: TransactionStore>(
    store: &S,
    sub: &clap::ArgMatches,
) -> Result<(Vec<CategorySlice>, CategorySummary)> {
    let period = period(sub)?;
    let direction = direction(sub)?;
    let reference = reference_time(sub)?;
    let snapshot = store.fetch_all().context("Failed to load transactions")?;
    let slices = match sub.get_one::<usize>("top") {
        Some(n) => category::top_slices(&snapshot, direction, period, reference, *n),
        None => category::generate(&snapshot, direction, period, reference),
    };
    let summary = category::summary_stats(&snapshot, direction, period, reference);
    Ok((slices, summary))
}

fn pie(store: &SqliteStore, sub: &clap::ArgMatches) -> Result<()> {
    let (slices, summary) = pie_slices(store, sub)?;
    let payload = json!({ "slices": slices, "summary": summary });
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &payload)? {
        return Ok(());
    }
    let symbol = db::get_currency_symbol(store.connection())?;
    let data = slices
        .iter()
        .map(|s| {
            vec![
                s.category.clone(),
                fmt_money(&s.amount, &symbol),
                fmt_percent(s.percentage_of_total),
                s.color_index.to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Category", "Amount", "Share", "Color"], data)
    );
    println!(
        "Total {} across {} categories",
        fmt_money(&summary.total_amount, &symbol),
        summary.category_count
    );
    Ok(())
}

/// Dashboard header rows for `report summary`.
pub fn summary_data<S: TransactionStore>(
    store: &S,
    sub: &clap::ArgMatches,
) -> Result<Vec<SummaryRow>> {
    let period = period(sub)?;
    let reference = reference_time(sub)?;
    let snapshot = store.fetch_all().context("Failed to load transactions")?;
    Ok(summary_rows(&snapshot, period, reference))
}

fn summary(store: &SqliteStore, sub: &clap::ArgMatches) -> Result<()> {
    let rows = summary_data(store, sub)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
        return Ok(());
    }
    let symbol = db::get_currency_symbol(store.connection())?;
    let data = rows
        .iter()
        .map(|r| vec![r.title.clone(), r.value.render(&symbol)])
        .collect();
    println!("{}", pretty_table(&["", "Value"], data));
    Ok(())
}
