use crate::error::Result;
use crate::storage::PersistenceGateway;
use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use tokio::sync::Mutex;

/// Key-value snapshots in a single SQLite table.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub async fn open(db_path: &Path) -> Result<Self> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = db_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let conn = Connection::open(db_path)?;
        let store = Self {
            conn: Mutex::new(conn),
        };

        store.init_schema().await?;
        tracing::debug!("Opened snapshot store at {}", db_path.display());
        Ok(store)
    }

    pub async fn open_in_memory() -> Result<Self> {
        let store = Self {
            conn: Mutex::new(Connection::open_in_memory()?),
        };
        store.init_schema().await?;
        Ok(store)
    }

    async fn init_schema(&self) -> Result<()> {
        let conn = self.conn.lock().await;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS snapshots (
                key TEXT PRIMARY KEY,
                value BLOB NOT NULL,
                updated_at INTEGER NOT NULL
            )",
            [],
        )?;

        Ok(())
    }
}

#[async_trait]
impl PersistenceGateway for SqliteStore {
    async fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let conn = self.conn.lock().await;

        let value = conn
            .query_row(
                "SELECT value FROM snapshots WHERE key = ?1",
                params![key],
                |row| row.get::<_, Vec<u8>>(0),
            )
            .optional()?;

        Ok(value)
    }

    async fn save(&self, key: &str, blob: &[u8]) -> Result<()> {
        let conn = self.conn.lock().await;

        conn.execute(
            "INSERT OR REPLACE INTO snapshots (key, value, updated_at)
             VALUES (?1, ?2, ?3)",
            params![key, blob, Utc::now().timestamp()],
        )?;

        Ok(())
    }
}
