// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};
use std::path::PathBuf;

fn id_arg() -> Arg {
    Arg::new("id")
        .long("id")
        .required(true)
        .value_parser(value_parser!(i64))
}

fn json_args() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl"),
        Arg::new("jsonl").long("jsonl").action(ArgAction::SetTrue),
    ]
}

fn text(id: &'static str) -> Arg {
    Arg::new(id).long(id).required(true)
}

pub fn build_cli() -> Command {
    Command::new("pefi")
        .about("Personal finance ledger: accounts, transactions, categories, bills and debts")
        .version(clap::crate_version!())
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .env("PEFI_DB")
                .value_parser(value_parser!(PathBuf))
                .help("Database file (default: per-user config dir)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Debug logging unless PEFI_LOG says otherwise"),
        )
        .subcommand(Command::new("init").about("Create or migrate the database"))
        .subcommand(
            Command::new("account")
                .about("Manage accounts")
                .subcommand(
                    Command::new("add")
                        .arg(text("name"))
                        .arg(text("type").help("Free-form, e.g. bank or debt")),
                )
                .subcommand(Command::new("list").args(json_args()))
                .subcommand(
                    Command::new("update")
                        .arg(id_arg())
                        .arg(text("name"))
                        .arg(text("type")),
                )
                .subcommand(Command::new("rm").arg(id_arg())),
        )
        .subcommand(
            Command::new("tx")
                .about("Record and list transactions")
                .subcommand(
                    Command::new("add")
                        .arg(
                            Arg::new("account")
                                .long("account")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(text("date"))
                        .arg(text("name"))
                        .arg(
                            text("amount")
                                .allow_hyphen_values(true)
                                .help("Signed decimal, e.g. -12.50"),
                        )
                        .arg(Arg::new("category").long("category").default_value(""))
                        .arg(Arg::new("notes").long("notes").default_value("")),
                )
                .subcommand(
                    Command::new("list")
                        .arg(
                            Arg::new("account")
                                .long("account")
                                .value_parser(value_parser!(i64)),
                        )
                        .args(json_args()),
                )
                .subcommand(Command::new("rm").arg(id_arg())),
        )
        .subcommand(
            Command::new("category")
                .about("Manage categories per type")
                .subcommand(Command::new("add").arg(text("type")).arg(text("name")))
                .subcommand(Command::new("list").arg(text("type")).args(json_args()))
                .subcommand(
                    Command::new("rename")
                        .arg(text("type"))
                        .arg(text("from"))
                        .arg(text("to")),
                )
                .subcommand(Command::new("rm").arg(text("type")).arg(text("name"))),
        )
        .subcommand(
            Command::new("bill")
                .about("Manage recurring bills")
                .subcommand(bill_fields(Command::new("add")))
                .subcommand(Command::new("list").args(json_args()))
                .subcommand(bill_fields(Command::new("update").arg(id_arg())))
                .subcommand(Command::new("rm").arg(id_arg())),
        )
        .subcommand(
            Command::new("debt")
                .about("Manage debts and their installment schedules")
                .subcommand(Command::new("add").arg(text("name")))
                .subcommand(Command::new("list").args(json_args()))
                .subcommand(Command::new("show").arg(id_arg()).args(json_args()))
                .subcommand(
                    Command::new("update")
                        .arg(id_arg())
                        .arg(text("name"))
                        .arg(text("amount").allow_hyphen_values(true))
                        .arg(Arg::new("notes").long("notes").default_value(""))
                        .arg(
                            Arg::new("installment")
                                .long("installment")
                                .action(ArgAction::Append)
                                .help("DUE:AMOUNT:STATUS[:PAID]; repeat for each, the full schedule replaces the old one"),
                        ),
                )
                .subcommand(Command::new("rm").arg(id_arg())),
        )
        .subcommand(
            Command::new("doctor")
                .about("Check balances and category references")
                .arg(
                    Arg::new("fix")
                        .long("fix")
                        .action(ArgAction::SetTrue)
                        .help("Recalculate every account balance"),
                ),
        )
}

fn bill_fields(cmd: Command) -> Command {
    cmd.arg(text("name"))
        .arg(text("amount").allow_hyphen_values(true))
        .arg(
            Arg::new("due_day")
                .long("due-day")
                .required(true)
                .value_parser(value_parser!(i64)),
        )
}
