use crate::{
    error::{BoardError, Result},
    storage::{FileGateway, MemoryGateway, StateGateway},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Where the board is persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum StorageConfig {
    /// JSON file under `<root>/.taskboard/`
    File { root: PathBuf },
    /// Process-local, lost on exit
    Memory,
    #[cfg(feature = "sqlite-storage")]
    Sqlite {
        path: PathBuf,
        #[serde(default = "default_sqlite_key")]
        key: String,
    },
}

#[cfg(feature = "sqlite-storage")]
fn default_sqlite_key() -> String {
    crate::storage::SqliteGateway::DEFAULT_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::File {
            root: PathBuf::from("."),
        }
    }
}

/// Runtime configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Config {
    /// Reads a JSON configuration file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).await.map_err(|err| {
            BoardError::ConfigError(format!("cannot read {}: {}", path.display(), err))
        })?;

        serde_json::from_str(&contents).map_err(|err| {
            BoardError::ConfigError(format!("invalid config {}: {}", path.display(), err))
        })
    }

    /// Builds the gateway selected by this configuration
    pub fn open_gateway(&self) -> Result<Box<dyn StateGateway>> {
        let gateway: Box<dyn StateGateway> = match &self.storage {
            StorageConfig::File { root } => Box::new(FileGateway::new(root)),
            StorageConfig::Memory => Box::new(MemoryGateway::new()),
            #[cfg(feature = "sqlite-storage")]
            StorageConfig::Sqlite { path, key } => {
                Box::new(crate::storage::SqliteGateway::new(path, key.clone())?)
            }
        };

        tracing::debug!(storage = ?self.storage, "Opened board gateway");
        Ok(gateway)
    }
}
