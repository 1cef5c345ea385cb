// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::utils::{fmt_amount, maybe_print_json, parse_amount, pretty_table, required, required_id};
use anyhow::Result;

pub fn handle(app: &App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = required(sub, "name")?;
            let amount = parse_amount(required(sub, "amount")?)?;
            let due_day = required_id(sub, "due_day")?;
            let bill = app.create_bill(name, amount, due_day)?;
            println!("Added bill '{}' due on day {} with id {}", bill.name, bill.due_day, bill.id);
        }
        Some(("list", sub)) => {
            let data = app.bills()?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
                let rows = data
                    .into_iter()
                    .map(|b| {
                        vec![
                            b.id.to_string(),
                            b.name,
                            fmt_amount(b.amount),
                            b.due_day.to_string(),
                        ]
                    })
                    .collect();
                println!("{}", pretty_table(&["ID", "Name", "Amount", "Due day"], rows));
            }
        }
        Some(("update", sub)) => {
            let id = required_id(sub, "id")?;
            let amount = parse_amount(required(sub, "amount")?)?;
            app.update_bill(id, required(sub, "name")?, amount, required_id(sub, "due_day")?)?;
            println!("Updated bill {}", id);
        }
        Some(("rm", sub)) => {
            let id = required_id(sub, "id")?;
            app.delete_bill(id)?;
            println!("Removed bill {}", id);
        }
        _ => {}
    }
    Ok(())
}
