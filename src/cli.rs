// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

fn at_arg() -> Arg {
    Arg::new("at")
        .long("at")
        .value_name("WHEN")
        .help("Reference time: YYYY-MM-DD or YYYY-MM-DD HH:MM[:SS] (default: now)")
}

fn period_arg() -> Arg {
    Arg::new("period")
        .long("period")
        .short('p')
        .value_parser(["week", "month", "year"])
        .default_value("week")
}

pub fn build_cli() -> Command {
    Command::new("spendscope")
        .about("Track income and expenses, chart them by week, month or year")
        .version(clap::crate_version!())
        .subcommand(Command::new("init").about("Create the database"))
        .subcommand(
            Command::new("tx")
                .about("Record, list and remove transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction (negative amount = expense)")
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .allow_hyphen_values(true),
                        )
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("note").long("note"))
                        .arg(at_arg()),
                )
                .subcommand(json_args(
                    Command::new("list")
                        .about("List transactions grouped by day")
                        .arg(Arg::new("search").long("search").short('s'))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize))
                                .help("Show at most this many days"),
                        ),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction by id")
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        ),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Charts and breakdowns over a trailing window")
                .subcommand(json_args(
                    Command::new("chart")
                        .about("Income/expense per day, week or month")
                        .arg(period_arg())
                        .arg(at_arg()),
                ))
                .subcommand(json_args(
                    Command::new("pie")
                        .about("Category breakdown for income or expenses")
                        .arg(
                            Arg::new("direction")
                                .long("direction")
                                .short('d')
                                .value_parser(["income", "expense"])
                                .default_value("expense"),
                        )
                        .arg(period_arg())
                        .arg(
                            Arg::new("top")
                                .long("top")
                                .value_parser(value_parser!(usize)),
                        )
                        .arg(at_arg()),
                ))
                .subcommand(json_args(
                    Command::new("summary")
                        .about("Totals for the window")
                        .arg(period_arg())
                        .arg(at_arg()),
                )),
        )
        .subcommand(
            Command::new("seed")
                .about("Insert demo transactions")
                .arg(at_arg()),
        )
        .subcommand(
            Command::new("config")
                .about("Display preferences")
                .subcommand(
                    Command::new("set-currency")
                        .arg(Arg::new("symbol").long("symbol").required(true)),
                )
                .subcommand(Command::new("show")),
        )
}
