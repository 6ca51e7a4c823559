// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn filter_arg() -> Arg {
    Arg::new("filter")
        .long("filter")
        .default_value("month")
        .help("Time window: month|all")
}

fn search_arg() -> Arg {
    Arg::new("search")
        .long("search")
        .default_value("")
        .help("Case-insensitive substring match on descriptions")
}

fn json_flag() -> Arg {
    Arg::new("json").long("json").action(ArgAction::SetTrue)
}

fn jsonl_flag() -> Arg {
    Arg::new("jsonl").long("jsonl").action(ArgAction::SetTrue)
}

fn yes_flag() -> Arg {
    Arg::new("yes")
        .long("yes")
        .action(ArgAction::SetTrue)
        .help("Skip the confirmation prompt")
}

pub fn build_cli() -> Command {
    Command::new("pocketbook")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Personal income/expense tracking with a dashboard, charts, and local storage")
        .subcommand(Command::new("init").about("Initialize local storage and print its path"))
        .subcommand(
            Command::new("tx")
                .about("Record and browse transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(Arg::new("desc").long("desc").required(true))
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .help("Magnitude; the sign comes from --type"),
                        )
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("YYYY-MM-DD, defaults to today"),
                        )
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .default_value("income")
                                .help("income|expense"),
                        )
                        .arg(Arg::new("category").long("category").required(true)),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Edit a transaction; omitted fields keep their current values")
                        .arg(Arg::new("id").required(true))
                        .arg(Arg::new("desc").long("desc"))
                        .arg(Arg::new("amount").long("amount"))
                        .arg(Arg::new("date").long("date"))
                        .arg(Arg::new("type").long("type").help("income|expense"))
                        .arg(Arg::new("category").long("category")),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction")
                        .arg(Arg::new("id").required(true))
                        .arg(yes_flag()),
                )
                .subcommand(
                    Command::new("list")
                        .about("List the filtered view, newest first")
                        .arg(filter_arg())
                        .arg(search_arg())
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        )
                        .arg(json_flag())
                        .arg(jsonl_flag()),
                ),
        )
        .subcommand(
            Command::new("dashboard")
                .about("Balance, income and expense totals")
                .arg(filter_arg())
                .arg(search_arg())
                .arg(json_flag())
                .arg(jsonl_flag()),
        )
        .subcommand(
            Command::new("chart")
                .about("Chart-ready breakdowns")
                .subcommand(
                    Command::new("categories")
                        .about("Expenses by category, largest first")
                        .arg(filter_arg())
                        .arg(search_arg())
                        .arg(json_flag())
                        .arg(jsonl_flag()),
                )
                .subcommand(
                    Command::new("flow")
                        .about("Daily income/expense over the trailing 30 days")
                        .arg(json_flag())
                        .arg(jsonl_flag()),
                ),
        )
        .subcommand(
            Command::new("categories")
                .about("Suggested category tags and their icon keys")
                .arg(Arg::new("type").long("type").help("income|expense")),
        )
        .subcommand(
            Command::new("theme")
                .about("Show or flip the light/dark preference")
                .subcommand(Command::new("toggle").about("Flip and persist the theme")),
        )
        .subcommand(
            Command::new("export").about("Export data").subcommand(
                Command::new("transactions")
                    .about("Write the full collection to a file")
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .default_value("csv")
                            .help("csv|json"),
                    )
                    .arg(Arg::new("out").long("out").required(true)),
            ),
        )
        .subcommand(Command::new("doctor").about("Audit stored data for invariant violations"))
        .subcommand(
            Command::new("reset")
                .about("Erase ALL recorded data")
                .arg(yes_flag()),
        )
}
