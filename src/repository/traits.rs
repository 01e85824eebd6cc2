//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for settings storage.
//! Implementations can use a JSON file, memory, etc.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::AppSettings;

/// Storage-level errors
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stored settings are malformed: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Persistence for the settings document
///
/// All operations are async to support various backends.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Load stored settings; `None` when nothing has been saved yet
    async fn load(&self) -> RepositoryResult<Option<AppSettings>>;

    /// Replace stored settings
    async fn save(&self, settings: &AppSettings) -> RepositoryResult<()>;
}
