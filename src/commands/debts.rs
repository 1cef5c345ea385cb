// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::models::Debt;
use crate::utils::{
    fmt_amount, maybe_print_json, parse_amount, parse_installment, pretty_table, required,
    required_id,
};
use anyhow::Result;

pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let debt = app.create_debt(required(sub, "name")?)?;
            println!("Added debt '{}' with id {}", debt.name, debt.id);
        }
        Some(("list", sub)) => {
            let data = app.debts()?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
                let rows = data.iter().map(summary_row).collect();
                println!(
                    "{}",
                    pretty_table(
                        &["ID", "Name", "Amount", "Paid", "Remaining", "Installments"],
                        rows
                    )
                );
            }
        }
        Some(("show", sub)) => {
            let debt = app.debt(required_id(sub, "id")?)?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &debt)? {
                show(&debt);
            }
        }
        Some(("update", sub)) => update(app, sub)?,
        Some(("rm", sub)) => {
            let id = required_id(sub, "id")?;
            app.delete_debt(id)?;
            println!("Removed debt {} and its installments", id);
        }
        _ => {}
    }
    Ok(())
}

fn update(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let id = required_id(sub, "id")?;
    let amount = parse_amount(required(sub, "amount")?)?;
    let notes = sub.get_one::<String>("notes").map(String::as_str).unwrap_or("");
    let installments = sub
        .get_many::<String>("installment")
        .into_iter()
        .flatten()
        .map(|s| parse_installment(s))
        .collect::<Result<Vec<_>>>()?;

    app.update_debt(id, required(sub, "name")?, amount, notes, &installments)?;
    println!(
        "Updated debt {} with {} installments",
        id,
        installments.len()
    );
    Ok(())
}

fn summary_row(d: &Debt) -> Vec<String> {
    vec![
        d.id.to_string(),
        d.name.clone(),
        fmt_amount(d.amount),
        fmt_amount(d.paid()),
        fmt_amount(d.remaining()),
        d.installments.len().to_string(),
    ]
}

fn show(d: &Debt) {
    println!(
        "{}",
        pretty_table(
            &["ID", "Name", "Amount", "Paid", "Remaining", "Installments"],
            vec![summary_row(d)]
        )
    );
    if !d.notes.is_empty() {
        println!("Notes: {}", d.notes);
    }
    let rows = d
        .installments
        .iter()
        .enumerate()
        .map(|(i, inst)| {
            vec![
                (i + 1).to_string(),
                inst.due_date.clone(),
                fmt_amount(inst.amount),
                inst.status.clone(),
                inst.paid_date.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["#", "Due", "Amount", "Status", "Paid on"], rows)
    );
}
