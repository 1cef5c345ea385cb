// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::expect_row;
use crate::error::{Error, Result};
use crate::models::Bill;
use rusqlite::{Connection, OptionalExtension, Row, params};

fn from_row(r: &Row<'_>) -> rusqlite::Result<Bill> {
    Ok(Bill {
        id: r.get(0)?,
        name: r.get(1)?,
        amount: r.get(2)?,
        due_day: r.get(3)?,
    })
}

/// Ordered by day of month so the list reads like a calendar.
pub fn all(conn: &Connection) -> Result<Vec<Bill>> {
    let mut stmt = conn
        .prepare("SELECT id, name, amount, due_day FROM bills ORDER BY due_day, name, id")
        .map_err(Error::storage("list bills"))?;
    let rows = stmt
        .query_map([], from_row)
        .map_err(Error::storage("list bills"))?;
    rows.collect::<rusqlite::Result<Vec<_>>>()
        .map_err(Error::storage("list bills"))
}

pub fn get(conn: &Connection, id: i64) -> Result<Bill> {
    conn.query_row(
        "SELECT id, name, amount, due_day FROM bills WHERE id=?1",
        params![id],
        from_row,
    )
    .optional()
    .map_err(Error::storage("get bill"))?
    .ok_or_else(|| Error::not_found("bill", id))
}

pub fn create(conn: &Connection, name: &str, amount: i64, due_day: i64) -> Result<Bill> {
    conn.execute(
        "INSERT INTO bills(name, amount, due_day) VALUES (?1, ?2, ?3)",
        params![name, amount, due_day],
    )
    .map_err(Error::constraint("create bill", "bill"))?;
    Ok(Bill {
        id: conn.last_insert_rowid(),
        name: name.to_string(),
        amount,
        due_day,
    })
}

pub fn update(conn: &Connection, id: i64, name: &str, amount: i64, due_day: i64) -> Result<()> {
    let changed = conn
        .execute(
            "UPDATE bills SET name=?1, amount=?2, due_day=?3 WHERE id=?4",
            params![name, amount, due_day, id],
        )
        .map_err(Error::constraint("update bill", "bill"))?;
    expect_row(changed, "bill", id)
}

pub fn delete(conn: &Connection, id: i64) -> Result<()> {
    let changed = conn
        .execute("DELETE FROM bills WHERE id=?1", params![id])
        .map_err(Error::constraint("delete bill", "bill"))?;
    expect_row(changed, "bill", id)
}
