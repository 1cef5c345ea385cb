// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{accounts, atomically};
use crate::error::{Error, Result, is_foreign_key_violation};
use crate::models::{NewTransaction, Transaction};
use rusqlite::{Connection, OptionalExtension, Row, params};
use tracing::debug;

const SELECT: &str = "SELECT id, account_id, date, name, amount, category, notes FROM transactions";

fn from_row(r: &Row<'_>) -> rusqlite::Result<Transaction> {
    Ok(Transaction {
        id: r.get(0)?,
        account_id: r.get(1)?,
        date: r.get(2)?,
        name: r.get(3)?,
        amount: r.get(4)?,
        category: r.get(5)?,
        notes: r.get(6)?,
    })
}

fn query(conn: &Connection, sql: &str, account_id: Option<i64>) -> Result<Vec<Transaction>> {
    let mut stmt = conn.prepare(sql).map_err(Error::storage("list transactions"))?;
    let rows = match account_id {
        Some(id) => stmt.query_map(params![id], from_row),
        None => stmt.query_map([], from_row),
    }
    .map_err(Error::storage("list transactions"))?;
    rows.collect::<rusqlite::Result<Vec<_>>>()
        .map_err(Error::storage("list transactions"))
}

/// Newest first.
pub fn all(conn: &Connection) -> Result<Vec<Transaction>> {
    query(conn, &format!("{SELECT} ORDER BY date DESC, id DESC"), None)
}

pub fn for_account(conn: &Connection, account_id: i64) -> Result<Vec<Transaction>> {
    query(
        conn,
        &format!("{SELECT} WHERE account_id=?1 ORDER BY date DESC, id DESC"),
        Some(account_id),
    )
}

pub fn get(conn: &Connection, id: i64) -> Result<Transaction> {
    conn.query_row(&format!("{SELECT} WHERE id=?1"), params![id], from_row)
        .optional()
        .map_err(Error::storage("get transaction"))?
        .ok_or_else(|| Error::not_found("transaction", id))
}

/// Insert a transaction and recompute its account's balance, atomically.
pub fn create(conn: &mut Connection, new: &NewTransaction) -> Result<Transaction> {
    atomically(conn, "create transaction", |tx| {
        tx.execute(
            "INSERT INTO transactions(account_id, date, name, amount, category, notes)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                new.account_id,
                new.date,
                new.name,
                new.amount,
                new.category,
                new.notes
            ],
        )
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                Error::not_found("account", new.account_id)
            } else {
                Error::constraint("insert transaction", "transaction")(e)
            }
        })?;
        let id = tx.last_insert_rowid();
        let balance = accounts::recalculate_balance(tx, new.account_id)?;
        debug!(id, account_id = new.account_id, balance, "transaction created");
        Ok(Transaction {
            id,
            account_id: new.account_id,
            date: new.date.clone(),
            name: new.name.clone(),
            amount: new.amount,
            category: new.category.clone(),
            notes: new.notes.clone(),
        })
    })
}

/// Delete a transaction and recompute its former account's balance, atomically.
pub fn delete(conn: &mut Connection, id: i64) -> Result<()> {
    atomically(conn, "delete transaction", |tx| {
        let account_id: i64 = tx
            .query_row(
                "SELECT account_id FROM transactions WHERE id=?1",
                params![id],
                |r| r.get(0),
            )
            .optional()
            .map_err(Error::storage("find transaction account"))?
            .ok_or_else(|| Error::not_found("transaction", id))?;
        tx.execute("DELETE FROM transactions WHERE id=?1", params![id])
            .map_err(Error::constraint("delete transaction", "transaction"))?;
        let balance = accounts::recalculate_balance(tx, account_id)?;
        debug!(id, account_id, balance, "transaction deleted");
        Ok(())
    })
}
