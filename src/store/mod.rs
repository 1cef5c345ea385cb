// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod accounts;
pub mod bills;
pub mod categories;
pub mod debts;
pub mod integrity;
pub mod transactions;

use crate::error::{Error, Result};
use rusqlite::{Connection, Transaction, TransactionBehavior};
use std::fmt::Display;
use tracing::{debug, warn};

/// Run `f` inside one write transaction.
///
/// Commits when `f` returns `Ok`. On `Err` the transaction is rolled back
/// before the error is returned wrapped in [`Error::TransactionAborted`].
/// A panic inside `f` drops the transaction, which also rolls back.
pub fn atomically<T>(
    conn: &mut Connection,
    op: &'static str,
    f: impl FnOnce(&Transaction<'_>) -> Result<T>,
) -> Result<T> {
    let tx = conn
        .transaction_with_behavior(TransactionBehavior::Immediate)
        .map_err(Error::storage(op))?;
    match f(&tx) {
        Ok(value) => {
            tx.commit()
                .map_err(|e| Error::aborted(op, Error::Storage { op, source: e }))?;
            debug!(op, "committed");
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback() {
                warn!(op, error = %rollback_err, "explicit rollback failed");
            }
            warn!(op, error = %err, "rolled back");
            Err(Error::aborted(op, err))
        }
    }
}

/// Zero affected rows on a keyed update/delete means the key was absent.
pub(crate) fn expect_row(changed: usize, entity: &'static str, key: impl Display) -> Result<()> {
    if changed == 0 {
        return Err(Error::not_found(entity, key));
    }
    Ok(())
}
