//! SQLite-backed key-value store for the marketplace tables.
//!
//! The store holds three logical tables (`users`, `ads`, `session`), each
//! persisted as one serialized JSON blob, mirroring the browser-profile
//! layout this data layer replaces. Every mutation rewrites a whole table;
//! the connection mutex serializes individual statements, but a concurrent
//! read-modify-write sequence is still last-writer-wins. That is accepted:
//! the store targets a single-user, single-process environment.

use anyhow::{Context, Result};
use rusqlite::Connection;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Logical table holding the list of registered accounts.
pub const TABLE_USERS: &str = "users";
/// Logical table holding all ads.
pub const TABLE_ADS: &str = "ads";
/// Singleton slot identifying the currently authenticated user.
pub const TABLE_SESSION: &str = "session";

const SCHEMA_VERSION: i32 = 1;

/// Durable key-value substrate backing all reads and writes.
///
/// Constructed explicitly and handed to the repositories, so tests can run
/// against isolated in-memory instances.
pub struct Store {
    conn: Arc<Mutex<Connection>>,
    path: Option<PathBuf>,
}

impl Store {
    /// Create or open the store at the default location.
    pub fn open() -> Result<Self> {
        Self::open_at(Self::default_path())
    }

    /// Create an in-memory store (isolated, useful for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
            path: None,
        };
        store.init()?;
        Ok(store)
    }

    /// Create or open the store at a specific path.
    pub fn open_at(path: PathBuf) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(&path)?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
            path: Some(path),
        };
        store.init()?;
        if let Some(path) = &store.path {
            log::info!("opened store at {}", path.display());
        }
        Ok(store)
    }

    /// Default database path, overridable via `SOUQ_DB_PATH`.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("SOUQ_DB_PATH") {
            return PathBuf::from(path);
        }
        crate::infra::app_config::app_data_dir().join("db.sqlite")
    }

    fn init(&self) -> Result<()> {
        let conn = self.conn.lock().unwrap();

        let existing_version: i32 =
            conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

        if existing_version == 0 {
            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS kv (
                    tbl   TEXT PRIMARY KEY,
                    value TEXT NOT NULL
                );",
            )?;
            conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
        }

        Ok(())
    }

    /// Read and deserialize a whole table.
    ///
    /// Returns `None` if the table was never written (or was cleared);
    /// callers supply the type-appropriate default.
    pub fn read<T: DeserializeOwned>(&self, table: &str) -> Result<Option<T>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare("SELECT value FROM kv WHERE tbl = ?1")?;
        let mut rows = stmt.query([table])?;
        match rows.next()? {
            Some(row) => {
                let raw: String = row.get(0)?;
                let value = serde_json::from_str(&raw)
                    .with_context(|| format!("deserialize `{table}` table"))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Serialize and overwrite a whole table in one statement.
    ///
    /// Atomic from the caller's perspective; last writer wins, no merge.
    pub fn write<T: Serialize + ?Sized>(&self, table: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)
            .with_context(|| format!("serialize `{table}` table"))?;
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT OR REPLACE INTO kv (tbl, value) VALUES (?1, ?2)",
            (table, &raw),
        )?;
        Ok(())
    }

    /// Remove a table's entry entirely (used for logout and resets).
    pub fn clear(&self, table: &str) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute("DELETE FROM kv WHERE tbl = ?1", [table])?;
        Ok(())
    }

    /// Path backing this store, `None` for in-memory instances.
    pub fn path(&self) -> Option<PathBuf> {
        self.path.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_table_is_none() -> Result<()> {
        let store = Store::open_in_memory()?;
        let value: Option<Vec<String>> = store.read("nothing")?;
        assert!(value.is_none());
        Ok(())
    }

    #[test]
    fn test_write_read_clear_round_trip() -> Result<()> {
        let store = Store::open_in_memory()?;
        store.write(TABLE_USERS, &vec!["a".to_string(), "b".to_string()])?;
        let value: Option<Vec<String>> = store.read(TABLE_USERS)?;
        assert_eq!(value, Some(vec!["a".to_string(), "b".to_string()]));

        store.clear(TABLE_USERS)?;
        let value: Option<Vec<String>> = store.read(TABLE_USERS)?;
        assert!(value.is_none());
        Ok(())
    }

    #[test]
    fn test_write_overwrites_whole_table() -> Result<()> {
        let store = Store::open_in_memory()?;
        store.write(TABLE_ADS, &vec![1, 2, 3])?;
        store.write(TABLE_ADS, &vec![9])?;
        let value: Option<Vec<i32>> = store.read(TABLE_ADS)?;
        assert_eq!(value, Some(vec![9]));
        Ok(())
    }

    #[test]
    fn test_empty_list_is_distinct_from_missing() -> Result<()> {
        let store = Store::open_in_memory()?;
        store.write(TABLE_ADS, &Vec::<i32>::new())?;
        let value: Option<Vec<i32>> = store.read(TABLE_ADS)?;
        assert_eq!(value, Some(vec![]));
        Ok(())
    }

    #[test]
    fn test_store_survives_reopen() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("db.sqlite");
        {
            let store = Store::open_at(path.clone())?;
            store.write(TABLE_SESSION, &"someone")?;
        }
        let store = Store::open_at(path)?;
        let value: Option<String> = store.read(TABLE_SESSION)?;
        assert_eq!(value.as_deref(), Some("someone"));
        Ok(())
    }
}
