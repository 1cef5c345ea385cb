// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::expect_row;
use crate::error::{Error, Result};
use crate::models::Account;
use rusqlite::{Connection, OptionalExtension, Row, params};
use tracing::debug;

fn from_row(r: &Row<'_>) -> rusqlite::Result<Account> {
    Ok(Account {
        id: r.get(0)?,
        name: r.get(1)?,
        r#type: r.get(2)?,
        balance: r.get(3)?,
    })
}

pub fn all(conn: &Connection) -> Result<Vec<Account>> {
    let mut stmt = conn
        .prepare("SELECT id, name, type, balance FROM accounts ORDER BY name, id")
        .map_err(Error::storage("list accounts"))?;
    let rows = stmt
        .query_map([], from_row)
        .map_err(Error::storage("list accounts"))?;
    rows.collect::<rusqlite::Result<Vec<_>>>()
        .map_err(Error::storage("list accounts"))
}

pub fn get(conn: &Connection, id: i64) -> Result<Account> {
    conn.query_row(
        "SELECT id, name, type, balance FROM accounts WHERE id=?1",
        params![id],
        from_row,
    )
    .optional()
    .map_err(Error::storage("get account"))?
    .ok_or_else(|| Error::not_found("account", id))
}

/// New accounts start at zero; balance only moves through transactions.
pub fn create(conn: &Connection, name: &str, typ: &str) -> Result<Account> {
    conn.execute(
        "INSERT INTO accounts(name, type, balance) VALUES (?1, ?2, 0)",
        params![name, typ],
    )
    .map_err(Error::constraint("create account", "account"))?;
    Ok(Account {
        id: conn.last_insert_rowid(),
        name: name.to_string(),
        r#type: typ.to_string(),
        balance: 0,
    })
}

pub fn update(conn: &Connection, id: i64, name: &str, typ: &str) -> Result<()> {
    let changed = conn
        .execute(
            "UPDATE accounts SET name=?1, type=?2 WHERE id=?3",
            params![name, typ, id],
        )
        .map_err(Error::constraint("update account", "account"))?;
    expect_row(changed, "account", id)
}

/// Removes the account and, by cascade, its transactions.
pub fn delete(conn: &Connection, id: i64) -> Result<()> {
    let changed = conn
        .execute("DELETE FROM accounts WHERE id=?1", params![id])
        .map_err(Error::constraint("delete account", "account"))?;
    expect_row(changed, "account", id)
}

/// Recompute the stored balance from scratch as the sum of the account's
/// transactions and persist it. Returns the new balance.
pub fn recalculate_balance(conn: &Connection, account_id: i64) -> Result<i64> {
    let changed = conn
        .execute(
            "UPDATE accounts
             SET balance = (SELECT COALESCE(SUM(amount), 0) FROM transactions WHERE account_id=?1)
             WHERE id=?1",
            params![account_id],
        )
        .map_err(Error::constraint("recalculate balance", "account"))?;
    expect_row(changed, "account", account_id)?;
    let balance: i64 = conn
        .query_row(
            "SELECT balance FROM accounts WHERE id=?1",
            params![account_id],
            |r| r.get(0),
        )
        .map_err(Error::storage("recalculate balance"))?;
    debug!(account_id, balance, "balance recalculated");
    Ok(balance)
}

/// Recompute every account's balance. Returns the number of accounts touched.
pub fn recalculate_all(conn: &Connection) -> Result<usize> {
    conn.execute(
        "UPDATE accounts
         SET balance = (SELECT COALESCE(SUM(t.amount), 0) FROM transactions t WHERE t.account_id = accounts.id)",
        [],
    )
    .map_err(Error::constraint("recalculate balances", "account"))
}
