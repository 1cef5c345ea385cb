// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Embedded, ordered schema migrations.
//!
//! Each script is applied once inside its own transaction and recorded in
//! `schema_migrations`; rerunning on every launch is a no-op.

use crate::error::{Error, Result};
use rusqlite::{Connection, OptionalExtension, params};
use tracing::{debug, info};

pub struct Migration {
    pub version: &'static str,
    pub sql: &'static str,
}

pub const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "001_accounts_transactions",
        sql: include_str!("../migrations/001_accounts_transactions.sql"),
    },
    Migration {
        version: "002_categories",
        sql: include_str!("../migrations/002_categories.sql"),
    },
    Migration {
        version: "003_bills",
        sql: include_str!("../migrations/003_bills.sql"),
    },
    Migration {
        version: "004_debts_installments",
        sql: include_str!("../migrations/004_debts_installments.sql"),
    },
];

/// Apply every pending migration in order. Returns how many were applied.
pub fn apply_migrations(conn: &mut Connection) -> Result<usize> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_migrations(
            version TEXT PRIMARY KEY,
            applied_at TEXT NOT NULL
        )",
        [],
    )
    .map_err(|e| Error::unavailable("create schema_migrations", e))?;

    let mut applied = 0;
    for migration in MIGRATIONS {
        if apply_one(conn, migration)? {
            applied += 1;
        }
    }
    if applied > 0 {
        info!(applied, "schema migrations applied");
    }
    Ok(applied)
}

fn apply_one(conn: &mut Connection, migration: &Migration) -> Result<bool> {
    let done: Option<i64> = conn
        .query_row(
            "SELECT 1 FROM schema_migrations WHERE version=?1",
            params![migration.version],
            |r| r.get(0),
        )
        .optional()
        .map_err(|e| Error::unavailable(format!("check migration {}", migration.version), e))?;
    if done.is_some() {
        return Ok(false);
    }

    let context = || format!("apply migration {}", migration.version);
    let tx = conn
        .transaction()
        .map_err(|e| Error::unavailable(context(), e))?;
    tx.execute_batch(migration.sql)
        .map_err(|e| Error::unavailable(context(), e))?;
    tx.execute(
        "INSERT INTO schema_migrations(version, applied_at) VALUES (?1, ?2)",
        params![migration.version, chrono::Utc::now().to_rfc3339()],
    )
    .map_err(|e| Error::unavailable(context(), e))?;
    tx.commit().map_err(|e| Error::unavailable(context(), e))?;
    debug!(version = migration.version, "migration applied");
    Ok(true)
}

pub fn applied_versions(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn
        .prepare("SELECT version FROM schema_migrations ORDER BY version")
        .map_err(Error::storage("list migrations"))?;
    let rows = stmt
        .query_map([], |r| r.get::<_, String>(0))
        .map_err(Error::storage("list migrations"))?;
    rows.collect::<rusqlite::Result<Vec<_>>>()
        .map_err(Error::storage("list migrations"))
}
