// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Error taxonomy for the data layer.
//!
//! Every storage failure is surfaced to the caller, tagged with the logical
//! operation that produced it. Failures inside an atomic scope are wrapped in
//! [`Error::TransactionAborted`] only after the rollback has run.

use rusqlite::ffi;
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum Error {
    /// A referenced id or key does not exist.
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    /// A uniqueness or other schema constraint rejected the write.
    #[error("{entity} conflict: {detail}")]
    Conflict {
        entity: &'static str,
        detail: String,
    },

    /// The database could not be located, opened or migrated.
    #[error("storage unavailable: {context}")]
    StorageUnavailable {
        context: String,
        #[source]
        source: BoxError,
    },

    /// A multi-statement operation failed and was rolled back.
    #[error("{op} aborted, changes rolled back")]
    TransactionAborted {
        op: &'static str,
        #[source]
        source: Box<Error>,
    },

    #[error("{op} failed")]
    Storage {
        op: &'static str,
        #[source]
        source: rusqlite::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    pub fn unavailable(context: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::StorageUnavailable {
            context: context.into(),
            source: source.into(),
        }
    }

    pub(crate) fn aborted(op: &'static str, source: Error) -> Self {
        Self::TransactionAborted {
            op,
            source: Box::new(source),
        }
    }

    /// Plain storage failure, no constraint classification.
    pub(crate) fn storage(op: &'static str) -> impl FnOnce(rusqlite::Error) -> Error {
        move |source| Error::Storage { op, source }
    }

    /// Storage failure where constraint violations become [`Error::Conflict`].
    pub(crate) fn constraint(
        op: &'static str,
        entity: &'static str,
    ) -> impl FnOnce(rusqlite::Error) -> Error {
        move |source| {
            if is_constraint_violation(&source) {
                Error::Conflict {
                    entity,
                    detail: source.to_string(),
                }
            } else {
                Error::Storage { op, source }
            }
        }
    }

    /// The innermost error, looking through any `TransactionAborted` layers.
    pub fn root(&self) -> &Error {
        match self {
            Self::TransactionAborted { source, .. } => source.root(),
            other => other,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.root(), Self::NotFound { .. })
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self.root(), Self::Conflict { .. })
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::TransactionAborted { .. })
    }
}

fn extended_code(err: &rusqlite::Error) -> Option<i32> {
    match err {
        rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::ConstraintViolation => {
            Some(e.extended_code)
        }
        _ => None,
    }
}

pub(crate) fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    extended_code(err).is_some()
}

pub(crate) fn is_foreign_key_violation(err: &rusqlite::Error) -> bool {
    extended_code(err) == Some(ffi::SQLITE_CONSTRAINT_FOREIGNKEY)
}
