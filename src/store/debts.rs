// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{atomically, expect_row};
use crate::error::{Error, Result};
use crate::models::{Debt, Installment};
use rusqlite::{Connection, OptionalExtension, params};
use tracing::debug;

/// Insertion order is the schedule order.
pub fn installments(conn: &Connection, debt_id: i64) -> Result<Vec<Installment>> {
    let mut stmt = conn
        .prepare(
            "SELECT due_date, amount, status, paid_date FROM installments
             WHERE debt_id=?1 ORDER BY id",
        )
        .map_err(Error::storage("list installments"))?;
    let rows = stmt
        .query_map(params![debt_id], |r| {
            Ok(Installment {
                due_date: r.get(0)?,
                amount: r.get(1)?,
                status: r.get(2)?,
                paid_date: r.get(3)?,
            })
        })
        .map_err(Error::storage("list installments"))?;
    rows.collect::<rusqlite::Result<Vec<_>>>()
        .map_err(Error::storage("list installments"))
}

pub fn all(conn: &Connection) -> Result<Vec<Debt>> {
    let mut stmt = conn
        .prepare("SELECT id, name, amount, notes FROM debts ORDER BY id")
        .map_err(Error::storage("list debts"))?;
    let rows = stmt
        .query_map([], |r| {
            Ok((
                r.get::<_, i64>(0)?,
                r.get::<_, String>(1)?,
                r.get::<_, i64>(2)?,
                r.get::<_, String>(3)?,
            ))
        })
        .map_err(Error::storage("list debts"))?;

    let mut out = Vec::new();
    for row in rows {
        let (id, name, amount, notes) = row.map_err(Error::storage("list debts"))?;
        out.push(Debt {
            id,
            name,
            amount,
            notes,
            installments: installments(conn, id)?,
        });
    }
    Ok(out)
}

pub fn get(conn: &Connection, id: i64) -> Result<Debt> {
    let (name, amount, notes): (String, i64, String) = conn
        .query_row(
            "SELECT name, amount, notes FROM debts WHERE id=?1",
            params![id],
            |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
        )
        .optional()
        .map_err(Error::storage("get debt"))?
        .ok_or_else(|| Error::not_found("debt", id))?;
    Ok(Debt {
        id,
        name,
        amount,
        notes,
        installments: installments(conn, id)?,
    })
}

/// A fresh debt has no amount, notes or schedule yet.
pub fn create(conn: &Connection, name: &str) -> Result<Debt> {
    conn.execute(
        "INSERT INTO debts(name, amount, notes) VALUES (?1, 0, '')",
        params![name],
    )
    .map_err(Error::constraint("create debt", "debt"))?;
    Ok(Debt {
        id: conn.last_insert_rowid(),
        name: name.to_string(),
        amount: 0,
        notes: String::new(),
        installments: Vec::new(),
    })
}

/// Update the scalar fields and replace the whole installment schedule with
/// `installments`, atomically. Not a merge: the caller supplies the full list.
pub fn update(
    conn: &mut Connection,
    id: i64,
    name: &str,
    amount: i64,
    notes: &str,
    installments: &[Installment],
) -> Result<()> {
    atomically(conn, "update debt", |tx| {
        let changed = tx
            .execute(
                "UPDATE debts SET name=?1, amount=?2, notes=?3 WHERE id=?4",
                params![name, amount, notes, id],
            )
            .map_err(Error::constraint("update debt", "debt"))?;
        expect_row(changed, "debt", id)?;

        let removed = tx
            .execute("DELETE FROM installments WHERE debt_id=?1", params![id])
            .map_err(Error::constraint("clear installments", "installment"))?;

        let mut insert = tx
            .prepare(
                "INSERT INTO installments(debt_id, due_date, amount, status, paid_date)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )
            .map_err(Error::storage("insert installment"))?;
        for inst in installments {
            insert
                .execute(params![
                    id,
                    inst.due_date,
                    inst.amount,
                    inst.status,
                    inst.paid_date
                ])
                .map_err(Error::constraint("insert installment", "installment"))?;
        }
        debug!(id, removed, inserted = installments.len(), "debt updated");
        Ok(())
    })
}

/// Installments go with it through the foreign key cascade.
pub fn delete(conn: &Connection, id: i64) -> Result<()> {
    let changed = conn
        .execute("DELETE FROM debts WHERE id=?1", params![id])
        .map_err(Error::constraint("delete debt", "debt"))?;
    expect_row(changed, "debt", id)
}
