// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use directories::ProjectDirs;
use rusqlite::{Connection, OptionalExtension, params};
use rust_decimal::Decimal;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{self, APP};
use crate::errors::{LedgerError, LedgerResult};
use crate::models::Transaction;

/// Persistence boundary for transactions. Aggregation never calls this; the
/// command layer fetches once and hands the snapshot over.
pub trait TransactionStore {
    fn fetch_all(&self) -> LedgerResult<Vec<Transaction>>;
    /// Stages an insert and returns the new row id.
    fn add(&mut self, tx: &Transaction) -> LedgerResult<i64>;
    fn delete(&mut self, tx: &Transaction) -> LedgerResult<()>;
    /// Makes staged mutations durable.
    fn save(&mut self) -> LedgerResult<()>;
}

pub fn db_path() -> Result<PathBuf> {
    if let Ok(p) = std::env::var(config::DB_PATH_ENV) {
        if !p.trim().is_empty() {
            return Ok(PathBuf::from(p));
        }
    }
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("spendscope.sqlite"))
}

pub fn open_or_init() -> Result<SqliteStore> {
    let path = db_path()?;
    SqliteStore::open(&path)
}

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: &Path) -> Result<Self> {
        let conn =
            Connection::open(path).with_context(|| format!("Open DB at {}", path.display()))?;
        init_schema(&conn).context("Failed to initialize schema")?;
        tracing::debug!(path = %path.display(), "opened store");
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        init_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// True while mutations are staged but not yet saved.
    pub fn has_pending_changes(&self) -> bool {
        !self.conn.is_autocommit()
    }

    fn begin_if_needed(&self) -> LedgerResult<()> {
        if self.conn.is_autocommit() {
            self.conn.execute_batch("BEGIN")?;
        }
        Ok(())
    }
}

impl TransactionStore for SqliteStore {
    fn fetch_all(&self) -> LedgerResult<Vec<Transaction>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, occurred_at, amount, note, category
             FROM transactions
             ORDER BY occurred_at DESC, id DESC",
        )?;
        let rows = stmt.query_map([], |r| {
            Ok((
                r.get::<_, i64>(0)?,
                r.get::<_, NaiveDateTime>(1)?,
                r.get::<_, String>(2)?,
                r.get::<_, String>(3)?,
                r.get::<_, String>(4)?,
            ))
        })?;
        let mut out = Vec::new();
        for row in rows {
            let (id, timestamp, amount_s, note, category) = row?;
            let amount = amount_s
                .parse::<Decimal>()
                .map_err(|_| LedgerError::InvalidAmount(amount_s.clone()))?;
            out.push(Transaction {
                id: Some(id),
                timestamp,
                amount,
                note,
                category,
            });
        }
        Ok(out)
    }

    fn add(&mut self, tx: &Transaction) -> LedgerResult<i64> {
        self.begin_if_needed()?;
        self.conn.execute(
            "INSERT INTO transactions(occurred_at, amount, note, category) VALUES (?1, ?2, ?3, ?4)",
            params![tx.timestamp, tx.amount.to_string(), tx.note, tx.category],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, amount = %tx.amount, "staged transaction insert");
        Ok(id)
    }

    fn delete(&mut self, tx: &Transaction) -> LedgerResult<()> {
        let id = tx.id.ok_or(LedgerError::NotPersisted)?;
        self.begin_if_needed()?;
        let n = self
            .conn
            .execute("DELETE FROM transactions WHERE id=?1", params![id])?;
        if n == 0 {
            return Err(LedgerError::NotFound(id));
        }
        tracing::debug!(id, "staged transaction delete");
        Ok(())
    }

    fn save(&mut self) -> LedgerResult<()> {
        if !self.conn.is_autocommit() {
            self.conn.execute_batch("COMMIT")?;
            tracing::info!("saved pending changes");
        }
        Ok(())
    }
}

pub fn find_transaction(conn: &Connection, id: i64) -> LedgerResult<Transaction> {
    let row = conn
        .query_row(
            "SELECT occurred_at, amount, note, category FROM transactions WHERE id=?1",
            params![id],
            |r| {
                Ok((
                    r.get::<_, NaiveDateTime>(0)?,
                    r.get::<_, String>(1)?,
                    r.get::<_, String>(2)?,
                    r.get::<_, String>(3)?,
                ))
            },
        )
        .optional()?;
    let (timestamp, amount_s, note, category) = row.ok_or(LedgerError::NotFound(id))?;
    let amount = amount_s
        .parse::<Decimal>()
        .map_err(|_| LedgerError::InvalidAmount(amount_s.clone()))?;
    Ok(Transaction {
        id: Some(id),
        timestamp,
        amount,
        note,
        category,
    })
}

pub fn get_currency_symbol(conn: &Connection) -> LedgerResult<String> {
    let v: Option<String> = conn
        .query_row(
            "SELECT value FROM settings WHERE key='currency_symbol'",
            [],
            |r| r.get(0),
        )
        .optional()?;
    Ok(v.unwrap_or_else(|| config::DEFAULT_CURRENCY_SYMBOL.to_string()))
}

pub fn set_currency_symbol(conn: &Connection, symbol: &str) -> LedgerResult<()> {
    conn.execute(
        "INSERT INTO settings(key, value) VALUES('currency_symbol', ?1)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![symbol],
    )?;
    Ok(())
}

fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS settings(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS transactions(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        occurred_at TEXT NOT NULL,
        amount TEXT NOT NULL,
        note TEXT NOT NULL DEFAULT '',
        category TEXT NOT NULL DEFAULT '',
        created_at TEXT NOT NULL DEFAULT (datetime('now'))
    );
    CREATE INDEX IF NOT EXISTS idx_transactions_occurred_at ON transactions(occurred_at);
    "#,
    )
}
