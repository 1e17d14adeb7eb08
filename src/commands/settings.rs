// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::required;
use crate::db::{get_currency_symbol, set_currency_symbol};
use crate::utils::pretty_table;
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set-currency", sub)) => {
            let symbol = required(sub, "symbol")?.trim();
            if symbol.is_empty() {
                anyhow::bail!("Currency symbol must not be empty");
            }
            set_currency_symbol(conn, symbol)?;
            println!("Currency symbol set to '{}'", symbol);
        }
        Some(("show", _)) => {
            let symbol = get_currency_symbol(conn)?;
            println!(
                "{}",
                pretty_table(&["Setting", "Value"], vec![vec!["currency_symbol".into(), symbol]])
            );
        }
        _ => {}
    }
    Ok(())
}
