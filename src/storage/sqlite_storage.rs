use crate::{domain::Board, error::Result, storage::StateGateway};
use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::Value;
use std::path::Path;
use tokio::sync::Mutex;

/// SQLite-backed key-value gateway for the board
pub struct SqliteGateway {
    connection: Mutex<Connection>,
    key: String,
}

impl SqliteGateway {
    pub const DEFAULT_KEY: &'static str = "tasks-board";

    /// Opens (or creates) the database at `database_path`
    pub fn new(database_path: impl AsRef<Path>, key: impl Into<String>) -> Result<Self> {
        Self::with_connection(Connection::open(database_path)?, key)
    }

    /// Opens a private in-memory database
    pub fn in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?, Self::DEFAULT_KEY)
    }

    fn with_connection(connection: Connection, key: impl Into<String>) -> Result<Self> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS board_state (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;

        Ok(Self {
            connection: Mutex::new(connection),
            key: key.into(),
        })
    }
}

#[async_trait]
impl StateGateway for SqliteGateway {
    async fn load(&self) -> Result<Option<Value>> {
        let connection = self.connection.lock().await;
        let raw: Option<String> = connection
            .query_row(
                "SELECT value FROM board_state WHERE key = ?1",
                params![self.key],
                |row| row.get(0),
            )
            .optional()?;

        match raw {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, board: &Board) -> Result<()> {
        let json = serde_json::to_string(board)?;
        let connection = self.connection.lock().await;
        connection.execute(
            "INSERT INTO board_state (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![self.key, json],
        )?;

        tracing::debug!(key = %self.key, "Saved board");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{add_task, create_board, validate_board};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_empty_database_loads_nothing() {
        let gateway = SqliteGateway::in_memory().unwrap();
        assert!(gateway.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_board_save_and_load() {
        let gateway = SqliteGateway::in_memory().unwrap();
        let board = add_task(&create_board(), "TODO", "Stored").unwrap();

        gateway.save(&board).await.unwrap();
        gateway.save(&board).await.unwrap();

        let raw = gateway.load().await.unwrap().unwrap();
        assert_eq!(validate_board(&raw).unwrap(), board);
    }

    #[tokio::test]
    async fn test_keys_are_isolated() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("board.db");

        let first = SqliteGateway::new(&path, "first").unwrap();
        first.save(&create_board()).await.unwrap();

        let second = SqliteGateway::new(&path, "second").unwrap();
        assert!(second.load().await.unwrap().is_none());
        assert!(first.load().await.unwrap().is_some());
    }
}
