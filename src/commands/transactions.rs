// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::utils::{fmt_amount, maybe_print_json, parse_amount, pretty_table, required, required_id};
use anyhow::Result;

pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(app, sub)?,
        Some(("list", sub)) => list(app, sub)?,
        Some(("rm", sub)) => {
            let id = required_id(sub, "id")?;
            app.delete_transaction(id)?;
            println!("Removed transaction {}", id);
        }
        _ => {}
    }
    Ok(())
}

fn add(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let account_id = required_id(sub, "account")?;
    let amount = parse_amount(required(sub, "amount")?)?;
    let category = sub.get_one::<String>("category").map(String::as_str).unwrap_or("");
    let notes = sub.get_one::<String>("notes").map(String::as_str).unwrap_or("");

    let tx = app.create_transaction(
        account_id,
        required(sub, "date")?,
        required(sub, "name")?,
        amount,
        category,
        notes,
    )?;
    let balance = app.account(account_id)?.balance;
    println!(
        "Recorded {} on {} '{}' (account {} balance now {})",
        fmt_amount(tx.amount),
        tx.date,
        tx.name,
        account_id,
        fmt_amount(balance)
    );
    Ok(())
}

fn list(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let data = match sub.get_one::<i64>("account") {
        Some(id) => app.transactions(*id)?,
        None => app.all_transactions()?,
    };
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows: Vec<Vec<String>> = data
            .into_iter()
            .map(|t| {
                vec![
                    t.id.to_string(),
                    t.date,
                    t.account_id.to_string(),
                    t.name,
                    fmt_amount(t.amount),
                    t.category,
                    t.notes,
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Date", "Account", "Name", "Amount", "Category", "Notes"],
                rows,
            )
        );
    }
    Ok(())
}
