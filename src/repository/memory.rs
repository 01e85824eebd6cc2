//! In-memory settings storage, for tests and throwaway sessions.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::AppSettings;
use super::traits::{RepositoryResult, SettingsRepository};

#[derive(Default)]
pub struct InMemorySettingsRepository {
    settings: Mutex<Option<AppSettings>>,
    saves: Mutex<usize>,
}

impl InMemorySettingsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: AppSettings) -> Self {
        Self {
            settings: Mutex::new(Some(settings)),
            saves: Mutex::new(0),
        }
    }

    /// Number of successful saves
    pub async fn save_count(&self) -> usize {
        *self.saves.lock().await
    }
}

#[async_trait]
impl SettingsRepository for InMemorySettingsRepository {
    async fn load(&self) -> RepositoryResult<Option<AppSettings>> {
        Ok(self.settings.lock().await.clone())
    }

    async fn save(&self, settings: &AppSettings) -> RepositoryResult<()> {
        *self.settings.lock().await = Some(settings.clone());
        *self.saves.lock().await += 1;
        Ok(())
    }
}
