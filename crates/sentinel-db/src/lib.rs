//! # sentinel-db
//!
//! libSQL persistence for NetSentinel.
//!
//! Holds the device inventory and the inspection history: one
//! `inspection_tasks` row per batch run and its `inspection_details` rows
//! (one per device plus the reserved analysis report row). A batch is written
//! in a single transaction, so readers never observe a partial run.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;

use error::DatabaseError;
use libsql::Builder;

/// Database handle owning the libSQL database and its connection.
pub struct SentinelDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl SentinelDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let sentinel_db = Self { db, conn };
        sentinel_db.run_migrations().await?;
        tracing::debug!(path, "database opened");
        Ok(sentinel_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}
