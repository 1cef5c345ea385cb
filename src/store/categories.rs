// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{atomically, expect_row};
use crate::error::{Error, Result};
use crate::models::Category;
use rusqlite::{Connection, OptionalExtension, params};
use tracing::debug;

fn key(typ: &str, name: &str) -> String {
    format!("{typ}/{name}")
}

pub fn by_type(conn: &Connection, typ: &str) -> Result<Vec<String>> {
    let mut stmt = conn
        .prepare("SELECT name FROM categories WHERE type=?1 ORDER BY name")
        .map_err(Error::storage("list categories"))?;
    let rows = stmt
        .query_map(params![typ], |r| r.get::<_, String>(0))
        .map_err(Error::storage("list categories"))?;
    rows.collect::<rusqlite::Result<Vec<_>>>()
        .map_err(Error::storage("list categories"))
}

pub fn get(conn: &Connection, typ: &str, name: &str) -> Result<Category> {
    conn.query_row(
        "SELECT type, name FROM categories WHERE type=?1 AND name=?2",
        params![typ, name],
        |r| {
            Ok(Category {
                r#type: r.get(0)?,
                name: r.get(1)?,
            })
        },
    )
    .optional()
    .map_err(Error::storage("get category"))?
    .ok_or_else(|| Error::not_found("category", key(typ, name)))
}

pub fn add(conn: &Connection, typ: &str, name: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO categories(type, name) VALUES (?1, ?2)",
        params![typ, name],
    )
    .map_err(Error::constraint("add category", "category"))?;
    Ok(())
}

/// Transactions keep whatever category text they already carry.
pub fn delete(conn: &Connection, typ: &str, name: &str) -> Result<()> {
    let changed = conn
        .execute(
            "DELETE FROM categories WHERE type=?1 AND name=?2",
            params![typ, name],
        )
        .map_err(Error::constraint("delete category", "category"))?;
    expect_row(changed, "category", key(typ, name))
}

/// Rename `(typ, old_name)` to `new_name` and carry every transaction that
/// referenced `old_name` along, in one atomic scope.
///
/// Returns the number of transactions updated by the cascade.
pub fn rename(conn: &mut Connection, typ: &str, old_name: &str, new_name: &str) -> Result<usize> {
    atomically(conn, "rename category", |tx| {
        let renamed = tx
            .execute(
                "UPDATE categories SET name=?1 WHERE type=?2 AND name=?3",
                params![new_name, typ, old_name],
            )
            .map_err(Error::constraint("rename category", "category"))?;
        expect_row(renamed, "category", key(typ, old_name))?;

        let cascaded = tx
            .execute(
                "UPDATE transactions SET category=?1 WHERE category=?2",
                params![new_name, old_name],
            )
            .map_err(Error::constraint("rename category in transactions", "transaction"))?;
        debug!(typ, old_name, new_name, cascaded, "category renamed");
        Ok(cascaded)
    })
}
