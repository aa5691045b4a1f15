//! SQLite-based cache storage
//!
//! Entries live in a private in-memory database for the lifetime of the
//! process. Expiry timestamps are kept in milliseconds so short TTLs behave.

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, params};
use std::time::Duration;

use crate::error::CacheError;

type Result<T> = std::result::Result<T, CacheError>;

/// SQLite-backed cache storage
pub struct CacheStorage {
    conn: Connection,
}

impl CacheStorage {
    /// Open a fresh, empty in-memory cache
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;

        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS cache_entries (
                cache_key TEXT PRIMARY KEY NOT NULL,
                data TEXT NOT NULL,
                created_at INTEGER NOT NULL,
                expires_at INTEGER NOT NULL,
                size_bytes INTEGER NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_expires_at ON cache_entries(expires_at);
            "#,
        )?;

        Ok(Self { conn })
    }

    /// Get cached data if present and not expired.
    ///
    /// An expired row is deleted on the way out.
    pub fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let now = Utc::now().timestamp_millis();

        let row: Option<(String, i64)> = self
            .conn
            .query_row(
                "SELECT data, expires_at FROM cache_entries WHERE cache_key = ?1",
                params![key],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;

        match row {
            Some((data, expires_at)) if expires_at > now => Ok(Some(data.into_bytes())),
            Some(_) => {
                self.delete_by_key(key)?;
                Ok(None)
            }
            None => Ok(None),
        }
    }

    /// Store data with TTL, replacing any previous entry and its expiry
    pub fn put(&self, key: &str, data: &[u8], ttl: Duration) -> Result<()> {
        let now = Utc::now().timestamp_millis();
        let ttl_ms = i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX);
        let expires = now.saturating_add(ttl_ms);

        let text = std::str::from_utf8(data)
            .map_err(|e| CacheError::Serialization(format!("Cache payload is not UTF-8: {}", e)))?;

        self.conn.execute(
            "INSERT OR REPLACE INTO cache_entries
             (cache_key, data, created_at, expires_at, size_bytes)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![key, text, now, expires, data.len()],
        )?;
        Ok(())
    }

    /// Delete a specific cache entry by key
    pub fn delete_by_key(&self, key: &str) -> Result<bool> {
        let deleted = self
            .conn
            .execute("DELETE FROM cache_entries WHERE cache_key = ?1", [key])?;
        Ok(deleted > 0)
    }

    /// Get cache statistics
    pub fn stats(&self) -> Result<CacheStats> {
        let now = Utc::now().timestamp_millis();

        let total_entries: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM cache_entries", [], |r| r.get(0))?;

        let valid_entries: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM cache_entries WHERE expires_at > ?1",
            [now],
            |r| r.get(0),
        )?;

        let total_size: i64 = self.conn.query_row(
            "SELECT COALESCE(SUM(size_bytes), 0) FROM cache_entries",
            [],
            |r| r.get(0),
        )?;

        Ok(CacheStats {
            total_entries: total_entries as usize,
            valid_entries: valid_entries as usize,
            expired_entries: (total_entries - valid_entries) as usize,
            total_size_bytes: total_size as usize,
        })
    }
}

/// Statistics about cache state
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    pub total_entries: usize,
    pub valid_entries: usize,
    pub expired_entries: usize,
    pub total_size_bytes: usize,
}
