use crate::{domain::Board, error::Result, storage::StateGateway};
use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::fs;

/// File-based gateway storing the board as pretty-printed JSON
pub struct FileGateway {
    root_path: PathBuf,
}

impl FileGateway {
    const DATA_DIR: &'static str = ".taskboard";
    const BOARD_FILE: &'static str = "board.json";

    /// Creates a new FileGateway for the given project root
    pub fn new(project_root: impl AsRef<Path>) -> Self {
        Self {
            root_path: project_root.as_ref().join(Self::DATA_DIR),
        }
    }

    pub fn board_file(&self) -> PathBuf {
        self.root_path.join(Self::BOARD_FILE)
    }

    async fn ensure_directory_exists(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl StateGateway for FileGateway {
    async fn load(&self) -> Result<Option<Value>> {
        let board_file = self.board_file();

        if !board_file.exists() {
            tracing::debug!(path = %board_file.display(), "No saved board");
            return Ok(None);
        }

        let contents = fs::read_to_string(&board_file).await?;
        let value: Value = serde_json::from_str(&contents)?;

        Ok(Some(value))
    }

    async fn save(&self, board: &Board) -> Result<()> {
        self.ensure_directory_exists(&self.root_path).await?;

        let json = serde_json::to_string_pretty(board)?;
        fs::write(self.board_file(), json).await?;

        tracing::debug!(path = %self.board_file().display(), "Saved board");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{add_task, create_board, validate_board};
    use crate::error::BoardError;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_without_saved_board() {
        let temp_dir = TempDir::new().unwrap();
        let gateway = FileGateway::new(temp_dir.path());

        assert!(gateway.load().await.unwrap().is_none());
        assert!(!gateway.board_file().exists());
    }

    #[tokio::test]
    async fn test_board_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let gateway = FileGateway::new(temp_dir.path());

        let board = add_task(&create_board(), "BACKLOG", "Persist me").unwrap();
        gateway.save(&board).await.unwrap();

        let raw = gateway.load().await.unwrap().unwrap();
        assert_eq!(raw["columns"][0]["tasks"][0]["text"], "Persist me");
        assert_eq!(validate_board(&raw).unwrap(), board);
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_board() {
        let temp_dir = TempDir::new().unwrap();
        let gateway = FileGateway::new(temp_dir.path());

        let first = add_task(&create_board(), "TODO", "First").unwrap();
        gateway.save(&first).await.unwrap();
        gateway.save(&create_board()).await.unwrap();

        let raw = gateway.load().await.unwrap().unwrap();
        assert_eq!(validate_board(&raw).unwrap(), create_board());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let gateway = FileGateway::new(temp_dir.path());

        fs::create_dir_all(temp_dir.path().join(".taskboard"))
            .await
            .unwrap();
        fs::write(gateway.board_file(), "{invalid json").await.unwrap();

        let err = gateway.load().await.unwrap_err();
        assert!(matches!(err, BoardError::SerializationError(_)));
    }
}
