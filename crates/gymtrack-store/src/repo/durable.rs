//! Durable store adapter
//!
//! Async bulk interface over the SQLite repository. The connection is opened
//! at most once per adapter: `initialize` is guarded by a once-cell, so late
//! or repeated calls reuse the existing handle. Blocking SQLite work runs on
//! the tokio blocking pool.

#![allow(clippy::result_large_err)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use async_trait::async_trait;
use gymtrack_core::errors::{ExError, ExErrorKind};
use gymtrack_core::model::Snapshot;
use gymtrack_core::{log_op_end, log_op_error, log_op_start};
use rusqlite::Connection;
use tokio::sync::OnceCell;

use crate::db;
use crate::errors::{initialization_error, io_error, transaction_error, Result};
use crate::migrations;
use crate::repo::hydration;
use crate::repo::sqlite_repo::SqliteRepo;

/// Bulk persistence interface used by the sync bridge
#[async_trait]
pub trait DurableStore: Send + Sync {
    /// Open the engine and create the schema if absent
    ///
    /// Idempotent.
    ///
    /// # Errors
    /// Returns an `Initialization` error if the engine is unavailable or the
    /// schema cannot be created.
    async fn initialize(&self) -> Result<()>;

    /// Read every exercise and day list
    ///
    /// # Errors
    /// Returns `Initialization` before a successful `initialize`, otherwise a
    /// `Transaction` or `Serialization` error if reading fails.
    async fn load_all(&self) -> Result<Snapshot>;

    /// Replace the whole persisted state with `snapshot`, all-or-nothing
    ///
    /// # Errors
    /// Returns `Initialization` before a successful `initialize`, otherwise a
    /// `Transaction` error; the previous contents are left intact.
    async fn save_all(&self, snapshot: Snapshot) -> Result<()>;
}

/// Where the SQLite database lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbLocation {
    File(PathBuf),
    Memory,
}

/// `DurableStore` backed by a single SQLite connection
pub struct SqliteDurableStore {
    location: DbLocation,
    conn: OnceCell<Arc<Mutex<Connection>>>,
}

impl SqliteDurableStore {
    /// Adapter for a database file; nothing is opened until `initialize`
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(DbLocation::File(path.into()))
    }

    /// Adapter for a private in-memory database (for testing)
    pub fn in_memory() -> Self {
        Self::new(DbLocation::Memory)
    }

    pub fn new(location: DbLocation) -> Self {
        Self {
            location,
            conn: OnceCell::new(),
        }
    }

    pub fn location(&self) -> &DbLocation {
        &self.location
    }

    pub fn is_initialized(&self) -> bool {
        self.conn.initialized()
    }

    fn connection(&self) -> Result<Arc<Mutex<Connection>>> {
        self.conn
            .get()
            .cloned()
            .ok_or_else(|| initialization_error("durable store used before initialize()"))
    }

    /// Run `f` against the connection on the blocking pool
    async fn with_connection<T, F>(&self, op: &'static str, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Connection) -> Result<T> + Send + 'static,
    {
        let conn = self.connection()?;
        tokio::task::spawn_blocking(move || {
            let mut guard = conn
                .lock()
                .map_err(|_| transaction_error(op, "connection lock poisoned"))?;
            f(&mut guard)
        })
        .await
        .map_err(|e| {
            ExError::new(ExErrorKind::Internal)
                .with_op(op)
                .with_message(format!("blocking task failed: {e}"))
        })?
    }
}

/// Open the database, configure it, and apply migrations
fn open_and_migrate(location: &DbLocation) -> Result<Connection> {
    let mut conn = match location {
        DbLocation::Memory => db::open_in_memory(),
        DbLocation::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| io_error("create_db_dir", e))?;
            }
            db::open(path)
        }
    }?;
    db::configure(&conn)?;
    migrations::apply_migrations(&mut conn)?;
    Ok(conn)
}

#[async_trait]
impl DurableStore for SqliteDurableStore {
    async fn initialize(&self) -> Result<()> {
        let location = self.location.clone();
        self.conn
            .get_or_try_init(|| async move {
                let started = Instant::now();
                log_op_start!("durable_initialize");

                let opened = tokio::task::spawn_blocking(move || open_and_migrate(&location))
                    .await
                    .map_err(|e| initialization_error(format!("open task failed: {e}")))
                    .and_then(|r| r);

                match opened {
                    Ok(conn) => {
                        log_op_end!(
                            "durable_initialize",
                            duration_ms = started.elapsed().as_millis() as u64
                        );
                        Ok(Arc::new(Mutex::new(conn)))
                    }
                    Err(err) => {
                        let err = initialization_error("could not open structured storage")
                            .with_source(err);
                        log_op_error!(
                            "durable_initialize",
                            err.clone(),
                            duration_ms = started.elapsed().as_millis() as u64
                        );
                        Err(err)
                    }
                }
            })
            .await?;
        Ok(())
    }

    async fn load_all(&self) -> Result<Snapshot> {
        self.with_connection("load_all", |conn| hydration::load_snapshot(conn))
            .await
    }

    async fn save_all(&self, snapshot: Snapshot) -> Result<()> {
        self.with_connection("save_all", move |conn| {
            SqliteRepo::replace_all(conn, &snapshot)
        })
        .await
    }
}
