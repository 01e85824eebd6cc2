//! JSON File Settings Storage
//!
//! Stores the settings document under the `appSettings` key of a JSON
//! object, the same shape the dashboard keeps in browser local storage.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::domain::AppSettings;
use super::traits::{RepositoryResult, SettingsRepository};

/// Storage key for the settings document
pub const SETTINGS_KEY: &str = "appSettings";

/// File-backed implementation of [`SettingsRepository`]
pub struct JsonFileSettingsRepository {
    path: PathBuf,
}

impl JsonFileSettingsRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_store(&self) -> RepositoryResult<Option<Map<String, Value>>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        if raw.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&raw)?))
    }
}

#[async_trait]
impl SettingsRepository for JsonFileSettingsRepository {
    async fn load(&self) -> RepositoryResult<Option<AppSettings>> {
        let Some(mut store) = self.read_store().await? else {
            return Ok(None);
        };
        match store.remove(SETTINGS_KEY) {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, settings: &AppSettings) -> RepositoryResult<()> {
        // Keep other keys sharing the file; refuse to overwrite one we cannot read
        let mut store = self.read_store().await?.unwrap_or_default();
        store.insert(SETTINGS_KEY.to_string(), serde_json::to_value(settings)?);

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(dir).await?;
        }

        let tmp = self.path.with_extension("json.tmp");
        let body = serde_json::to_string_pretty(&Value::Object(store))?;
        tokio::fs::write(&tmp, body).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        log::debug!("saved settings to {}", self.path.display());
        Ok(())
    }
}
