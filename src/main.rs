// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use spendscope::{cli, commands, db, utils};

fn main() -> Result<()> {
    utils::init_tracing();
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let mut store = db::open_or_init()?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", db::db_path()?.display());
        }
        Some(("tx", sub)) => commands::transactions::handle(&mut store, sub)?,
        Some(("report", sub)) => commands::reports::handle(&store, sub)?,
        Some(("seed", sub)) => {
            commands::seed::handle(&mut store, sub)?;
        }
        Some(("config", sub)) => commands::settings::handle(store.connection(), sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
