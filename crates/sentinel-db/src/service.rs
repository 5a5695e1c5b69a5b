//! Persistence component wrapping the database handle.
//!
//! `SentinelService` is constructed once per process with an injected
//! `SentinelDb` and dropped (or explicitly closed) at shutdown. All repo
//! methods are implemented as `impl SentinelService` blocks in `repos`.

use crate::SentinelDb;
use crate::error::DatabaseError;

pub struct SentinelService {
    db: SentinelDb,
}

impl SentinelService {
    /// Open a local database and wrap it.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = SentinelDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Wrap an already opened database.
    #[must_use]
    pub const fn from_db(db: SentinelDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &SentinelDb {
        &self.db
    }

    /// Release the database. Pending transactions have already committed or
    /// rolled back by the time any repo method returns.
    pub fn close(self) {
        drop(self.db);
        tracing::debug!("database closed");
    }
}
