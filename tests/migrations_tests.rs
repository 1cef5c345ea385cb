// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use pefi::{App, db, migrations};
use tempfile::tempdir;

#[test]
fn reopening_file_is_idempotent_and_keeps_data() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join(db::DB_FILE);

    {
        let mut app = App::open(&path).unwrap();
        let a = app.create_account("Checking", "bank").unwrap();
        app.create_transaction(a.id, "2025-01-01", "x", 250, "", "")
            .unwrap();
    }

    let app = App::open(&path).unwrap();
    assert_eq!(app.accounts().unwrap()[0].balance, 250);
    let versions = migrations::applied_versions(app.connection()).unwrap();
    assert_eq!(versions.len(), migrations::MIGRATIONS.len());
    assert_eq!(versions[0], "001_accounts_transactions");
}

#[test]
fn foreign_keys_enabled_on_open() {
    let dir = tempdir().unwrap();
    let conn = db::open(&dir.path().join(db::DB_FILE)).unwrap();
    let on: i64 = conn
        .query_row("PRAGMA foreign_keys", [], |r| r.get(0))
        .unwrap();
    assert_eq!(on, 1);
}

#[test]
fn unopenable_path_is_storage_unavailable() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"not a directory").unwrap();
    let err = App::open(&blocker.join(db::DB_FILE)).err().unwrap();
    assert!(matches!(err, pefi::Error::StorageUnavailable { .. }), "{err:?}");
}
