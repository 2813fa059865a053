// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, ArgGroup, Command, crate_version, value_parser};

fn json_flag() -> Arg {
    Arg::new("json")
        .long("json")
        .help("Print as pretty JSON")
        .action(ArgAction::SetTrue)
}

fn jsonl_flag() -> Arg {
    Arg::new("jsonl")
        .long("jsonl")
        .help("Print as JSON lines")
        .action(ArgAction::SetTrue)
}

fn filter_args() -> [Arg; 3] {
    [
        Arg::new("search")
            .long("search")
            .value_name("TERM")
            .help("Case-insensitive substring match on description or category"),
        Arg::new("category")
            .long("category")
            .value_name("NAME")
            .help("Exact category match"),
        Arg::new("wallet")
            .long("wallet")
            .value_name("NAME")
            .help("Exact wallet match"),
    ]
}

pub fn build_cli() -> Command {
    Command::new("rielbook")
        .about("Dual-currency (KHR/USD) expense tracking, wallets, and CSV export")
        .version(crate_version!())
        .arg(
            Arg::new("input")
                .long("input")
                .value_name("FILE")
                .global(true)
                .help("Load session expenses from a CSV instead of the sample data"),
        )
        .subcommand(
            Command::new("expense")
                .about("Record, edit, and list expenses")
                .subcommand(
                    Command::new("add")
                        .about("Record an expense against a wallet")
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .value_name("YYYY-MM-DD")
                                .help("Defaults to today"),
                        )
                        .arg(
                            Arg::new("wallet")
                                .long("wallet")
                                .value_name("NAME")
                                .required(true),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .value_name("NAME")
                                .required(true),
                        )
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .value_name("DECIMAL")
                                .required(true),
                        )
                        .arg(
                            Arg::new("description")
                                .long("description")
                                .value_name("TEXT")
                                .default_value(""),
                        ),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Edit an expense by id")
                        .arg(Arg::new("id").required(true).value_parser(value_parser!(i64)))
                        .arg(Arg::new("date").long("date").value_name("YYYY-MM-DD"))
                        .arg(Arg::new("wallet").long("wallet").value_name("NAME"))
                        .arg(Arg::new("category").long("category").value_name("NAME"))
                        .arg(Arg::new("amount").long("amount").value_name("DECIMAL"))
                        .arg(
                            Arg::new("description")
                                .long("description")
                                .value_name("TEXT"),
                        ),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete an expense by id")
                        .arg(Arg::new("id").required(true).value_parser(value_parser!(i64))),
                )
                .subcommand(
                    Command::new("list")
                        .about("List expenses, optionally filtered")
                        .args(filter_args())
                        .arg(json_flag())
                        .arg(jsonl_flag()),
                ),
        )
        .subcommand(
            Command::new("wallet")
                .about("Manage wallets and balances")
                .subcommand(
                    Command::new("add")
                        .about("Add a wallet")
                        .arg(Arg::new("name").long("name").value_name("NAME").required(true))
                        .arg(
                            Arg::new("balance")
                                .long("balance")
                                .value_name("DECIMAL")
                                .required(true),
                        )
                        .arg(
                            Arg::new("currency")
                                .long("currency")
                                .value_name("CODE")
                                .required(true),
                        ),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Edit a wallet")
                        .arg(Arg::new("wallet").required(true).value_name("NAME"))
                        .arg(Arg::new("name").long("name").value_name("NEW-NAME"))
                        .arg(Arg::new("balance").long("balance").value_name("DECIMAL"))
                        .arg(Arg::new("currency").long("currency").value_name("CODE")),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a wallet with no recorded expenses")
                        .arg(Arg::new("wallet").required(true).value_name("NAME")),
                )
                .subcommand(
                    Command::new("adjust")
                        .about("Adjust a wallet's recorded balance")
                        .arg(Arg::new("wallet").required(true).value_name("NAME"))
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .value_name("DECIMAL")
                                .required(true),
                        )
                        .arg(
                            Arg::new("add")
                                .long("add")
                                .help("Deposit into the wallet")
                                .action(ArgAction::SetTrue),
                        )
                        .arg(
                            Arg::new("subtract")
                                .long("subtract")
                                .help("Withdraw from the wallet; with --reason an expense is recorded")
                                .action(ArgAction::SetTrue),
                        )
                        .group(
                            ArgGroup::new("direction")
                                .args(["add", "subtract"])
                                .required(true),
                        )
                        .arg(Arg::new("reason").long("reason").value_name("TEXT")),
                )
                .subcommand(
                    Command::new("list")
                        .about("List wallets with spending positions")
                        .arg(json_flag())
                        .arg(jsonl_flag()),
                ),
        )
        .subcommand(
            Command::new("category").about("The fixed category table").subcommand(
                Command::new("list").about("List categories").arg(json_flag()),
            ),
        )
        .subcommand(
            Command::new("report")
                .about("Aggregated views over the session expenses")
                .subcommand(
                    Command::new("summary")
                        .about("Totals per currency, unified total, record stats")
                        .arg(json_flag()),
                )
                .subcommand(
                    Command::new("by-category")
                        .about("Category breakdown in the base currency")
                        .arg(json_flag())
                        .arg(jsonl_flag()),
                )
                .subcommand(
                    Command::new("by-currency")
                        .about("Raw totals per currency with cross-quotes")
                        .arg(json_flag())
                        .arg(jsonl_flag()),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert an amount between table currencies")
                .arg(Arg::new("amount").required(true).value_name("DECIMAL"))
                .arg(Arg::new("from").long("from").value_name("CODE").required(true))
                .arg(Arg::new("to").long("to").value_name("CODE").required(true)),
        )
        .subcommand(
            Command::new("export")
                .about("Export expenses to CSV, optionally filtered")
                .args(filter_args())
                .arg(
                    Arg::new("out")
                        .long("out")
                        .value_name("PATH")
                        .help("Target file or directory; defaults to the working directory"),
                )
                .arg(
                    Arg::new("summary")
                        .long("summary")
                        .help("Print record statistics for the exported set")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("health")
                .about("Operational status of this process and the session ledger")
                .subcommand(Command::new("ping").about("Liveness payload"))
                .subcommand(
                    Command::new("detailed")
                        .about("Named checks; exit code 0 healthy, 1 degraded, 2 unhealthy"),
                ),
        )
}
