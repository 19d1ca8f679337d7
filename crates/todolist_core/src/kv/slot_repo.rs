//! Durable key-value slot contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable get/set APIs over the canonical `slots` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `get` returns `None` for a key that was never written, never an error.
//! - `set` replaces the whole value for a key atomically.
//! - Construction rejects connections whose schema was not bootstrapped.

use crate::db::{migrations::latest_version, DbError};
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type KvResult<T> = Result<T, KvError>;

/// Persistence error for slot read/write operations.
#[derive(Debug)]
pub enum KvError {
    Db(DbError),
    /// Connection was opened without running schema bootstrap.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Schema version matches but a required table is absent.
    MissingRequiredTable(&'static str),
}

impl Display for KvError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection not bootstrapped: schema version {actual_version}, expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
        }
    }
}

impl Error for KvError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
            Self::MissingRequiredTable(_) => None,
        }
    }
}

impl From<DbError> for KvError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for KvError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable, string-keyed slot storage.
///
/// This is the full external surface the store layer consumes: one read and
/// one whole-value replace. Durability, capacity and eviction policy belong
/// to the implementation.
pub trait KvStore {
    /// Reads the current value of `key`, or `None` when never written.
    fn get(&self, key: &str) -> KvResult<Option<String>>;

    /// Replaces the value of `key`, creating the slot when absent.
    fn set(&self, key: &str, value: &str) -> KvResult<()>;
}

/// SQLite-backed slot storage over the `slots` table.
pub struct SqliteKvStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKvStore<'conn> {
    /// Wraps a bootstrapped connection, verifying the expected schema.
    ///
    /// # Errors
    /// - [`KvError::UninitializedConnection`] when `PRAGMA user_version`
    ///   does not match the latest migration.
    /// - [`KvError::MissingRequiredTable`] when the `slots` table is absent.
    pub fn try_new(conn: &'conn Connection) -> KvResult<Self> {
        let expected_version = latest_version();
        let actual_version: u32 =
            conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        if actual_version != expected_version {
            return Err(KvError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        let slots_exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'slots'
            );",
            [],
            |row| row.get(0),
        )?;
        if slots_exists != 1 {
            return Err(KvError::MissingRequiredTable("slots"));
        }

        Ok(Self { conn })
    }
}

impl KvStore for SqliteKvStore<'_> {
    fn get(&self, key: &str) -> KvResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM slots WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> KvResult<()> {
        self.conn.execute(
            "INSERT INTO slots (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }
}
