// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{Error, Result};
use crate::migrations::apply_migrations;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com", "pefi", "pefi"));

pub const DB_FILE: &str = "pefi.db";

/// `<per-user config dir>/pefi.db`, creating the directory on first use.
pub fn default_db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2).ok_or_else(|| {
        Error::unavailable(
            "resolve config dir",
            "could not determine platform-specific config dir",
        )
    })?;
    let config_dir = proj.config_dir();
    fs::create_dir_all(config_dir)
        .map_err(|e| Error::unavailable(format!("create {}", config_dir.display()), e))?;
    Ok(config_dir.join(DB_FILE))
}

/// Open (creating if absent) the database at `path` and bring its schema up to date.
pub fn open(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| Error::unavailable(format!("create {}", parent.display()), e))?;
    }
    let mut conn = Connection::open(path)
        .map_err(|e| Error::unavailable(format!("open {}", path.display()), e))?;
    init(&mut conn)?;
    info!(path = %path.display(), "database ready");
    Ok(conn)
}

pub fn open_in_memory() -> Result<Connection> {
    let mut conn = Connection::open_in_memory()
        .map_err(|e| Error::unavailable("open in-memory database", e))?;
    init(&mut conn)?;
    Ok(conn)
}

fn init(conn: &mut Connection) -> Result<()> {
    // must run outside any transaction to take effect
    conn.execute_batch("PRAGMA foreign_keys = ON;")
        .map_err(|e| Error::unavailable("enable foreign keys", e))?;
    apply_migrations(conn)?;
    Ok(())
}
