// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};

use crate::commands::reference_time;
use crate::db::TransactionStore;
use crate::sample::sample_transactions;

/// Inserts the demo set and saves once. Returns how many rows were added.
pub fn handle<S: TransactionStore>(store: &mut S, sub: &clap::ArgMatches) -> Result<usize> {
    let reference = reference_time(sub)?;
    let samples = sample_transactions(reference);
    for tx in &samples {
        store.add(tx)?;
    }
    store.save().context("Failed to save sample data")?;
    tracing::info!(count = samples.len(), "seeded sample transactions");
    println!("Inserted {} sample transactions", samples.len());
    Ok(samples.len())
}
