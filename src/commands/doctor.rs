// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::models::IssueKind;
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    if m.get_flag("fix") {
        let n = app.recalculate_all_balances()?;
        println!("Recalculated balances for {} accounts", n);
    }

    let issues = app.check_consistency()?;
    if issues.is_empty() {
        println!("doctor: no issues found");
    } else {
        let rows = issues
            .into_iter()
            .map(|i| {
                let kind = match i.kind {
                    IssueKind::BalanceDrift => "balance_drift",
                    IssueKind::UnknownCategory => "unknown_category",
                };
                vec![kind.to_string(), i.detail]
            })
            .collect();
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
