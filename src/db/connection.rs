use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use crate::errors::DirectoryError;

/// Shared handle to the report store. Clones share one connection.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Open (or create) a database file, creating missing parent directories.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)
            .map_err(|e| DirectoryError::Database(format!("Failed to open {}: {}", path.display(), e)))?;
        conn.busy_timeout(Duration::from_secs(5))
            .map_err(|e| DirectoryError::Database(format!("Failed to set busy timeout: {}", e)))?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .map_err(|e| DirectoryError::Database(format!("Failed to set pragmas: {}", e)))?;

        Self::with_connection(conn)
    }

    pub fn in_memory() -> Result<Self, DirectoryError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| DirectoryError::Database(format!("Failed to open in-memory db: {}", e)))?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self, DirectoryError> {
        conn.execute_batch(super::schema::CREATE_TABLES)
            .map_err(|e| DirectoryError::Database(format!("Failed to create tables: {}", e)))?;
        Ok(Self { conn: Arc::new(Mutex::new(conn)) })
    }

    pub(crate) fn lock(&self) -> Result<MutexGuard<'_, Connection>, DirectoryError> {
        self.conn
            .lock()
            .map_err(|_| DirectoryError::Database("Connection mutex poisoned".into()))
    }
}
