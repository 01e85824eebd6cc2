//! Repository Integration Tests
//!
//! Tests for the settings repositories against a temporary directory.

#[cfg(test)]
mod tests {
    use crate::domain::{AppSettings, MenuItem};
    use crate::repository::{
        InMemorySettingsRepository, JsonFileSettingsRepository, RepositoryError,
        SettingsRepository, SETTINGS_KEY,
    };

    fn setup_file_repo() -> (tempfile::TempDir, JsonFileSettingsRepository) {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let repo = JsonFileSettingsRepository::new(dir.path().join("store").join("settings.json"));
        (dir, repo)
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let (_dir, repo) = setup_file_repo();
        let loaded = repo.load().await.expect("Load failed");
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let (_dir, repo) = setup_file_repo();

        let mut settings = AppSettings::default();
        settings.app_title = "Pengadaan".to_string();
        settings.menu_items.push(MenuItem::new("reports", "Reports", "FileText").with_order(7));

        repo.save(&settings).await.expect("Save failed");
        let loaded = repo.load().await.expect("Load failed").expect("Nothing stored");
        assert_eq!(loaded, settings);
    }

    #[tokio::test]
    async fn test_save_keeps_other_keys() {
        let (_dir, repo) = setup_file_repo();
        tokio::fs::create_dir_all(repo.path().parent().unwrap()).await.unwrap();
        tokio::fs::write(repo.path(), r#"{"loginSettings":{"title":"Masuk"}}"#)
            .await
            .unwrap();

        repo.save(&AppSettings::default()).await.expect("Save failed");

        let raw = tokio::fs::read_to_string(repo.path()).await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["loginSettings"]["title"], "Masuk");
        assert_eq!(value[SETTINGS_KEY]["menuItems"][2]["parentId"], "data-management");
    }

    #[tokio::test]
    async fn test_malformed_file_is_an_error() {
        let (_dir, repo) = setup_file_repo();
        tokio::fs::create_dir_all(repo.path().parent().unwrap()).await.unwrap();
        tokio::fs::write(repo.path(), "{not json").await.unwrap();

        let err = repo.load().await.unwrap_err();
        assert!(matches!(err, RepositoryError::Serde(_)));
    }

    #[tokio::test]
    async fn test_save_over_malformed_file_leaves_it_alone() {
        let (_dir, repo) = setup_file_repo();
        tokio::fs::create_dir_all(repo.path().parent().unwrap()).await.unwrap();
        let original = r#"{"loginSettings":{"title":"Masuk"},}"#;
        tokio::fs::write(repo.path(), original).await.unwrap();

        assert!(repo.load().await.is_err());
        let err = repo.save(&AppSettings::default()).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Serde(_)));

        let raw = tokio::fs::read_to_string(repo.path()).await.unwrap();
        assert_eq!(raw, original);
    }

    #[tokio::test]
    async fn test_save_over_empty_file() {
        let (_dir, repo) = setup_file_repo();
        tokio::fs::create_dir_all(repo.path().parent().unwrap()).await.unwrap();
        tokio::fs::write(repo.path(), "").await.unwrap();

        repo.save(&AppSettings::default()).await.expect("Save failed");
        assert_eq!(repo.load().await.unwrap(), Some(AppSettings::default()));
    }

    #[tokio::test]
    async fn test_in_memory_repository() {
        let repo = InMemorySettingsRepository::new();
        assert!(repo.load().await.unwrap().is_none());

        repo.save(&AppSettings::default()).await.unwrap();
        assert_eq!(repo.save_count().await, 1);
        assert_eq!(repo.load().await.unwrap(), Some(AppSettings::default()));
    }
}
