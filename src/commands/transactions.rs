// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};

use crate::commands::{reference_time, required};
use crate::db::{self, SqliteStore, TransactionStore};
use crate::models::{DayGroup, Transaction};
use crate::pipeline::{filter_by_search, group_by_day};
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pretty_table};

pub fn handle(store: &mut SqliteStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("rm", sub)) => remove(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &mut SqliteStore, sub: &clap::ArgMatches) -> Result<()> {
    let tx = build_transaction(sub)?;
    let id = store.add(&tx)?;
    store.save().context("Failed to save transaction")?;
    let symbol = db::get_currency_symbol(store.connection())?;
    println!(
        "Recorded #{} {} on {} ({})",
        id,
        fmt_money(&tx.amount, &symbol),
        tx.timestamp.format("%Y-%m-%d %H:%M"),
        tx.category_label()
    );
    Ok(())
}

/// Builds the transaction described by `tx add` arguments.
pub fn build_transaction(sub: &clap::ArgMatches) -> Result<Transaction> {
    let amount = parse_decimal(required(sub, "amount")?)?;
    let category = sub
        .get_one::<String>("category")
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    let note = sub
        .get_one::<String>("note")
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    let timestamp = reference_time(sub)?;
    Ok(Transaction::new(timestamp, amount, note, category))
}

fn list(store: &mut SqliteStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let days = day_groups(&*store, sub)?;
    if maybe_print_json(json_flag, jsonl_flag, &days)? {
        return Ok(());
    }
    let symbol = db::get_currency_symbol(store.connection())?;
    let mut rows = Vec::new();
    for day in &days {
        rows.push(day_header_row(day, &symbol));
        for t in &day.transactions {
            rows.push(vec![
                t.timestamp.format("  %H:%M").to_string(),
                t.id.map(|id| id.to_string()).unwrap_or_default(),
                t.category_label().to_string(),
                t.note.clone(),
                fmt_money(&t.amount, &symbol),
            ]);
        }
    }
    println!(
        "{}",
        pretty_table(&["Date", "ID", "Category", "Note", "Amount"], rows)
    );
    Ok(())
}

/// Table row opening a day in `tx list`: date, day income and expense, net.
pub fn day_header_row(day: &DayGroup, symbol: &str) -> Vec<String> {
    vec![
        day.date.format("%a %Y-%m-%d").to_string(),
        String::new(),
        String::new(),
        format!(
            "in {} / out {}",
            fmt_money(&day.income(), symbol),
            fmt_money(&day.expense(), symbol)
        ),
        fmt_money(&day.net(), symbol),
    ]
}

/// Stored transactions matching `--search`, grouped by day, newest first.
pub fn day_groups<S: TransactionStore>(store: &S, sub: &clap::ArgMatches) -> Result<Vec<DayGroup>> {
    let all = store.fetch_all().context("Failed to load transactions")?;
    let query = sub.get_one::<String>("search").map(String::as_str).unwrap_or("");
    let mut days = group_by_day(filter_by_search(&all, query));
    if let Some(limit) = sub.get_one::<usize>("limit") {
        days.truncate(*limit);
    }
    tracing::debug!(total = all.len(), days = days.len(), "listed transactions");
    Ok(days)
}

fn remove(store: &mut SqliteStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub
        .get_one::<i64>("id")
        .ok_or_else(|| anyhow::anyhow!("Missing required argument --id"))?;
    let tx = db::find_transaction(store.connection(), id)?;
    store.delete(&tx)?;
    store.save().context("Failed to save deletion")?;
    println!("Removed transaction #{}", id);
    Ok(())
}
