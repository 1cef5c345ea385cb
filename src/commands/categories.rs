// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::utils::{maybe_print_json, pretty_table, required};
use anyhow::Result;

pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let typ = required(sub, "type")?;
            let name = required(sub, "name")?;
            app.add_category(typ, name)?;
            println!("Added {} category '{}'", typ, name);
        }
        Some(("list", sub)) => {
            let data = app.categories(required(sub, "type")?)?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
                let rows = data.into_iter().map(|n| vec![n]).collect();
                println!("{}", pretty_table(&["Category"], rows));
            }
        }
        Some(("rename", sub)) => {
            let typ = required(sub, "type")?;
            let from = required(sub, "from")?;
            let to = required(sub, "to")?;
            let moved = app.rename_category(typ, from, to)?;
            println!(
                "Renamed {} category '{}' to '{}' ({} transactions updated)",
                typ, from, to, moved
            );
        }
        Some(("rm", sub)) => {
            let typ = required(sub, "type")?;
            let name = required(sub, "name")?;
            app.delete_category(typ, name)?;
            println!("Removed {} category '{}'", typ, name);
        }
        _ => {}
    }
    Ok(())
}
