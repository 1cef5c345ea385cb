// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{accounts, atomically};
use crate::error::{Error, Result};
use crate::models::{Issue, IssueKind};
use rusqlite::Connection;

pub fn check(conn: &Connection) -> Result<Vec<Issue>> {
    let mut issues = Vec::new();

    // 1) Stored balance disagrees with the transaction sum
    let mut stmt = conn
        .prepare(
            "SELECT id, name, balance, expected FROM (
                SELECT a.id, a.name, a.balance,
                       (SELECT COALESCE(SUM(t.amount), 0) FROM transactions t WHERE t.account_id = a.id) AS expected
                FROM accounts a
             ) WHERE balance != expected ORDER BY id",
        )
        .map_err(Error::storage("check balances"))?;
    let mut cur = stmt.query([]).map_err(Error::storage("check balances"))?;
    while let Some(r) = cur.next().map_err(Error::storage("check balances"))? {
        let id: i64 = r.get(0).map_err(Error::storage("check balances"))?;
        let name: String = r.get(1).map_err(Error::storage("check balances"))?;
        let stored: i64 = r.get(2).map_err(Error::storage("check balances"))?;
        let expected: i64 = r.get(3).map_err(Error::storage("check balances"))?;
        issues.push(Issue {
            kind: IssueKind::BalanceDrift,
            detail: format!("account {id} '{name}': stored {stored}, transactions sum {expected}"),
        });
    }

    // 2) Category text that names no category of any type
    let mut stmt2 = conn
        .prepare(
            "SELECT t.id, t.category FROM transactions t
             WHERE t.category != ''
               AND NOT EXISTS (SELECT 1 FROM categories c WHERE c.name = t.category)
             ORDER BY t.id",
        )
        .map_err(Error::storage("check categories"))?;
    let mut cur2 = stmt2.query([]).map_err(Error::storage("check categories"))?;
    while let Some(r) = cur2.next().map_err(Error::storage("check categories"))? {
        let id: i64 = r.get(0).map_err(Error::storage("check categories"))?;
        let category: String = r.get(1).map_err(Error::storage("check categories"))?;
        issues.push(Issue {
            kind: IssueKind::UnknownCategory,
            detail: format!("transaction {id} references '{category}'"),
        });
    }

    Ok(issues)
}

/// Rewrite every balance from its transactions in one atomic scope.
pub fn repair_balances(conn: &mut Connection) -> Result<usize> {
    atomically(conn, "recalculate balances", |tx| accounts::recalculate_all(tx))
}
