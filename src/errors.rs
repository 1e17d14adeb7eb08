// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Unknown period '{0}', expected week|month|year")]
    UnknownPeriod(String),
    #[error("Unknown direction '{0}', expected income|expense")]
    UnknownDirection(String),
    #[error("Invalid amount '{0}'")]
    InvalidAmount(String),
    #[error("Invalid timestamp '{0}', expected YYYY-MM-DD or YYYY-MM-DD HH:MM[:SS]")]
    InvalidTimestamp(String),
    #[error("Transaction has not been stored yet")]
    NotPersisted,
    #[error("Transaction {0} not found")]
    NotFound(i64),
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}

pub type LedgerResult<T> = Result<T, LedgerError>;
