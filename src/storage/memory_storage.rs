use crate::{domain::Board, error::Result, storage::StateGateway};
use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

/// In-memory gateway holding the last saved board as raw JSON
#[derive(Default)]
pub struct MemoryGateway {
    slot: Mutex<Option<Value>>,
    saves: Mutex<usize>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a gateway that will hand back `value` on load
    pub fn with_value(value: Value) -> Self {
        Self {
            slot: Mutex::new(Some(value)),
            saves: Mutex::new(0),
        }
    }

    /// Returns the currently stored raw value
    pub async fn stored(&self) -> Option<Value> {
        self.slot.lock().await.clone()
    }

    /// Number of times `save` has been called
    pub async fn save_count(&self) -> usize {
        *self.saves.lock().await
    }
}

#[async_trait]
impl StateGateway for MemoryGateway {
    async fn load(&self) -> Result<Option<Value>> {
        Ok(self.slot.lock().await.clone())
    }

    async fn save(&self, board: &Board) -> Result<()> {
        let value = serde_json::to_value(board)?;
        *self.slot.lock().await = Some(value);
        *self.saves.lock().await += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::create_board;

    #[tokio::test]
    async fn test_empty_gateway_loads_nothing() {
        let gateway = MemoryGateway::new();
        assert!(gateway.load().await.unwrap().is_none());
        assert_eq!(gateway.save_count().await, 0);
    }

    #[tokio::test]
    async fn test_save_replaces_value() {
        let gateway = MemoryGateway::with_value(serde_json::json!({ "columns": [] }));

        gateway.save(&create_board()).await.unwrap();

        let stored = gateway.stored().await.unwrap();
        assert_eq!(stored, serde_json::to_value(create_board()).unwrap());
        assert_eq!(gateway.save_count().await, 1);
    }
}
