// Copyright (c) Pocketbook Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

fn with_json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("pocketbook")
        .about("Personal finance ledger with spending trends and insights")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand(Command::new("init").about("Initialize the ledger database"))
        .subcommand(
            Command::new("tx")
                .about("Record and inspect transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .help("Positive amount, e.g. 45.50"),
                        )
                        .arg(
                            Arg::new("description")
                                .long("description")
                                .required(true),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .required(true)
                                .help("Category key, see 'category list'"),
                        )
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .default_value("expense")
                                .help("expense or income"),
                        ),
                )
                .subcommand(with_json_flags(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(
                            Arg::new("filter")
                                .long("filter")
                                .default_value("all")
                                .help("all, expense or income"),
                        )
                        .arg(
                            Arg::new("match")
                                .long("match")
                                .help("Regex applied to descriptions"),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(
                    Command::new("rm").about("Delete a transaction by id").arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("category")
                .about("Category registry")
                .subcommand(Command::new("list").about("List known categories")),
        )
        .subcommand(
            Command::new("report")
                .about("Derived views over the ledger")
                .subcommand(with_json_flags(
                    Command::new("summary").about("Balance and current-month totals"),
                ))
                .subcommand(with_json_flags(
                    Command::new("trend").about("Expense totals for the last seven days"),
                ))
                .subcommand(with_json_flags(
                    Command::new("categories").about("Expense totals per category"),
                )),
        )
        .subcommand(with_json_flags(
            Command::new("insights").about("Heuristic observations about recent spending"),
        ))
        .subcommand(
            Command::new("export").about("Export ledger data").subcommand(
                Command::new("transactions")
                    .about("Write all transactions to a file")
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .default_value("csv")
                            .help("csv or json"),
                    )
                    .arg(Arg::new("out").long("out").required(true)),
            ),
        )
}
