// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::utils::{fmt_amount, maybe_print_json, pretty_table, required, required_id};
use anyhow::Result;

pub fn handle(app: &App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = required(sub, "name")?;
            let typ = required(sub, "type")?;
            let acct = app.create_account(name, typ)?;
            println!("Added account '{}' ({}) with id {}", acct.name, acct.r#type, acct.id);
        }
        Some(("list", sub)) => {
            let data = app.accounts()?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
                let rows = data
                    .into_iter()
                    .map(|a| vec![a.id.to_string(), a.name, a.r#type, fmt_amount(a.balance)])
                    .collect();
                println!("{}", pretty_table(&["ID", "Name", "Type", "Balance"], rows));
            }
        }
        Some(("update", sub)) => {
            let id = required_id(sub, "id")?;
            app.update_account(id, required(sub, "name")?, required(sub, "type")?)?;
            println!("Updated account {}", id);
        }
        Some(("rm", sub)) => {
            let id = required_id(sub, "id")?;
            app.delete_account(id)?;
            println!("Removed account {} and its transactions", id);
        }
        _ => {}
    }
    Ok(())
}
