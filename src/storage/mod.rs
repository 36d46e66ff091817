use crate::{domain::Board, error::Result};
use async_trait::async_trait;
use serde_json::Value;

pub mod file_storage;
pub mod memory_storage;

#[cfg(feature = "sqlite-storage")]
pub mod sqlite_storage;

pub use file_storage::FileGateway;
pub use memory_storage::MemoryGateway;

#[cfg(feature = "sqlite-storage")]
pub use sqlite_storage::SqliteGateway;

/// Load/save capability for the persisted board
///
/// Implementations hand back raw, unvalidated data; callers must pass it
/// through [`validate_board`](crate::domain::validate_board) before use.
#[async_trait]
pub trait StateGateway: Send + Sync {
    /// Loads the previously persisted value, or `None` when nothing was saved
    async fn load(&self) -> Result<Option<Value>>;

    /// Persists the board
    async fn save(&self, board: &Board) -> Result<()>;
}

#[async_trait]
impl<G: StateGateway + ?Sized> StateGateway for Box<G> {
    async fn load(&self) -> Result<Option<Value>> {
        (**self).load().await
    }

    async fn save(&self, board: &Board) -> Result<()> {
        (**self).save(board).await
    }
}
