// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use std::path::PathBuf;

use pefi::{App, cli, commands, db, logging};

fn main() -> Result<()> {
    let matches = cli::build_cli().get_matches();
    logging::init(matches.get_flag("verbose"));

    let path = match matches.get_one::<PathBuf>("db") {
        Some(p) => p.clone(),
        None => db::default_db_path()?,
    };
    let mut app =
        App::open(&path).with_context(|| format!("Open database at {}", path.display()))?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", path.display());
        }
        Some(("account", sub)) => commands::accounts::handle(&app, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&mut app, sub)?,
        Some(("category", sub)) => commands::categories::handle(&mut app, sub)?,
        Some(("bill", sub)) => commands::bills::handle(&app, sub)?,
        Some(("debt", sub)) => commands::debts::handle(&mut app, sub)?,
        Some(("doctor", sub)) => commands::doctor::handle(&mut app, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
