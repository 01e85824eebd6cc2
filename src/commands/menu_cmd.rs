//! Menu Commands
//!
//! The settings collaborator: owns the authoritative flat menu, runs
//! engine operations against it and persists every committed change.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;

use crate::domain::{AppSettings, MenuError, MenuItem, MenuItemPatch, MenuNode, MenuResult, NewMenuItem};
use crate::hierarchy;
use crate::navigation::{self, NavigationPolicy, Role};
use crate::repository::{RepositoryError, SettingsRepository};

/// Errors surfaced to the editing UI
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Menu(#[from] MenuError),

    #[error(transparent)]
    Storage(#[from] RepositoryError),
}

pub type CommandResult<T> = Result<T, CommandError>;

/// Application state shared across commands
pub struct MenuState {
    repo: Arc<dyn SettingsRepository>,
    settings: Mutex<AppSettings>,
    policy: NavigationPolicy,
}

impl MenuState {
    /// Load settings from `repo`, seeding and saving defaults on first run
    pub async fn load(repo: Arc<dyn SettingsRepository>) -> CommandResult<Self> {
        let settings = match repo.load().await? {
            Some(settings) => settings,
            None => {
                log::info!("no stored settings, seeding default menu");
                let settings = AppSettings::default();
                repo.save(&settings).await?;
                settings
            }
        };

        Ok(Self {
            repo,
            settings: Mutex::new(settings),
            policy: NavigationPolicy::default(),
        })
    }

    pub fn with_policy(mut self, policy: NavigationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Snapshot of the current settings
    pub async fn settings(&self) -> AppSettings {
        self.settings.lock().await.clone()
    }

    pub async fn menu_items(&self) -> Vec<MenuItem> {
        self.settings.lock().await.menu_items.clone()
    }

    /// Replace the whole settings document (appearance dialog "save")
    pub async fn update_settings(&self, settings: AppSettings) -> CommandResult<()> {
        let mut current = self.settings.lock().await;
        self.repo.save(&settings).await?;
        *current = settings;
        Ok(())
    }

    /// Apply `op` to the menu and persist the result.
    ///
    /// State is replaced only after a successful save.
    async fn commit<F>(&self, action: &str, op: F) -> CommandResult<Vec<MenuItem>>
    where
        F: FnOnce(&[MenuItem]) -> MenuResult<Vec<MenuItem>>,
    {
        let mut current = self.settings.lock().await;
        let menu_items = op(&current.menu_items).map_err(|e| {
            log::warn!("{} rejected: {}", action, e);
            e
        })?;

        let next = AppSettings {
            menu_items,
            ..current.clone()
        };
        self.repo.save(&next).await.map_err(|e| {
            log::error!("{} could not be saved: {}", action, e);
            e
        })?;

        *current = next;
        log::info!("{} committed", action);
        Ok(current.menu_items.clone())
    }

    /// Add a menu entry
    pub async fn add_menu_item(&self, new_item: NewMenuItem) -> CommandResult<MenuItem> {
        let items = self
            .commit("add menu item", |items| hierarchy::add_item(items, new_item))
            .await?;
        items
            .last()
            .cloned()
            .ok_or_else(|| MenuError::NotFound("new menu item".to_string()).into())
    }

    /// Rename / re-icon an entry
    pub async fn update_menu_item(
        &self,
        id: &str,
        label: Option<String>,
        icon: Option<String>,
    ) -> CommandResult<MenuItem> {
        let patch = MenuItemPatch { label, icon };
        let items = self
            .commit("update menu item", |items| hierarchy::update_item(items, id, patch))
            .await?;
        find(&items, id)
    }

    /// Delete an entry and all of its submenus
    pub async fn remove_menu_item(&self, id: &str) -> CommandResult<()> {
        self.commit("remove menu item", |items| hierarchy::remove_item(items, id))
            .await?;
        Ok(())
    }

    /// Drop an entry onto another one (it becomes a child)
    pub async fn reparent_menu_item(&self, id: &str, new_parent_id: Option<&str>) -> CommandResult<MenuItem> {
        let items = self
            .commit("reparent menu item", |items| hierarchy::reparent(items, id, new_parent_id))
            .await?;
        find(&items, id)
    }

    /// Promote an entry to the top level
    pub async fn make_root(&self, id: &str) -> CommandResult<MenuItem> {
        self.reparent_menu_item(id, None).await
    }

    /// Drop an entry between siblings at `position`
    pub async fn move_menu_item(
        &self,
        id: &str,
        new_parent_id: Option<&str>,
        position: usize,
    ) -> CommandResult<MenuItem> {
        let items = self
            .commit("move menu item", |items| {
                hierarchy::move_to(items, id, new_parent_id, position)
            })
            .await?;
        find(&items, id)
    }

    /// Rewrite every `order` to consecutive positions (build then flatten)
    pub async fn normalize_order(&self) -> CommandResult<Vec<MenuItem>> {
        self.commit("normalize menu order", |items| {
            Ok(hierarchy::flatten_tree(&hierarchy::build_tree(items)))
        })
        .await
    }

    /// The full menu tree, as the editor shows it
    pub async fn menu_tree(&self) -> Vec<MenuNode> {
        hierarchy::build_tree(&self.settings.lock().await.menu_items)
    }

    /// The menu tree as the navbar shows it to `role`
    pub async fn visible_menu(&self, role: Role) -> Vec<MenuNode> {
        navigation::visible_menu(&self.menu_tree().await, role, &self.policy)
    }
}

fn find(items: &[MenuItem], id: &str) -> CommandResult<MenuItem> {
    items
        .iter()
        .find(|item| item.id == id)
        .cloned()
        .ok_or_else(|| MenuError::NotFound(id.to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::repository::{InMemorySettingsRepository, RepositoryResult};

    /// Has stored settings but refuses every save
    struct ReadOnlyRepository;

    #[async_trait]
    impl SettingsRepository for ReadOnlyRepository {
        async fn load(&self) -> RepositoryResult<Option<AppSettings>> {
            Ok(Some(AppSettings::default()))
        }

        async fn save(&self, _settings: &AppSettings) -> RepositoryResult<()> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only").into())
        }
    }

    async fn setup_state() -> (Arc<InMemorySettingsRepository>, MenuState) {
        let repo = Arc::new(InMemorySettingsRepository::new());
        let state = MenuState::load(repo.clone()).await.expect("Failed to load state");
        (repo, state)
    }

    #[tokio::test]
    async fn test_load_seeds_defaults() {
        let (repo, state) = setup_state().await;
        assert_eq!(state.menu_items().await.len(), 15);
        assert_eq!(repo.save_count().await, 1);
    }

    #[tokio::test]
    async fn test_add_persists() {
        let (repo, state) = setup_state().await;
        let added = state
            .add_menu_item(NewMenuItem::new("reports", "Laporan", "FileText").under("none"))
            .await
            .expect("Add failed");
        assert_eq!(added.order, 7);

        let stored = repo.load().await.unwrap().unwrap();
        assert!(stored.menu_items.iter().any(|i| i.id == "reports"));
    }

    #[tokio::test]
    async fn test_rejected_command_changes_nothing() {
        let (repo, state) = setup_state().await;
        let before = state.menu_items().await;

        let err = state.reparent_menu_item("settings", Some("users")).await.unwrap_err();
        assert!(matches!(err, CommandError::Menu(MenuError::Cycle { .. })));

        let err = state
            .add_menu_item(NewMenuItem::new("dashboard", "Again", "Home"))
            .await
            .unwrap_err();
        assert!(matches!(err, CommandError::Menu(MenuError::DuplicateId(_))));

        assert_eq!(state.menu_items().await, before);
        assert_eq!(repo.save_count().await, 1);
    }

    #[tokio::test]
    async fn test_remove_takes_submenus() {
        let (_repo, state) = setup_state().await;
        state.remove_menu_item("settings").await.expect("Remove failed");
        let items = state.menu_items().await;
        assert_eq!(items.len(), 11);
        assert!(items.iter().all(|i| i.parent_id.as_deref() != Some("settings")));
    }

    #[tokio::test]
    async fn test_move_and_make_root() {
        let (_repo, state) = setup_state().await;
        state.move_menu_item("chat", Some("settings"), 0).await.expect("Move failed");

        let tree = state.menu_tree().await;
        let settings = tree.iter().find(|n| n.id == "settings").unwrap();
        assert_eq!(settings.children[0].id, "chat");

        let chat = state.make_root("chat").await.expect("Make root failed");
        assert!(chat.is_root());
    }

    #[tokio::test]
    async fn test_update_and_visible_menu() {
        let (_repo, state) = setup_state().await;
        let updated = state
            .update_menu_item("dashboard", Some("Beranda".to_string()), Some("Home".to_string()))
            .await
            .expect("Update failed");
        assert_eq!(updated.label, "Beranda");

        let visible = state.visible_menu(Role::User).await;
        assert!(visible.iter().all(|n| n.find("users").is_none()));
        let admin = state.visible_menu(Role::Administrator).await;
        assert!(admin.iter().any(|n| n.find("users").is_some()));
    }

    #[tokio::test]
    async fn test_normalize_order() {
        let (_repo, state) = setup_state().await;
        state
            .add_menu_item(NewMenuItem::new("late", "Late", "Bell").at_order(40))
            .await
            .unwrap();
        let items = state.normalize_order().await.expect("Normalize failed");
        let late = items.iter().find(|i| i.id == "late").unwrap();
        assert_eq!(late.order, 7);
    }

    #[tokio::test]
    async fn test_update_settings_persists() {
        let (repo, state) = setup_state().await;
        let mut settings = state.settings().await;
        settings.app_title = "Pengadaan Barang".to_string();
        settings.navbar_style = "dark".to_string();

        state.update_settings(settings.clone()).await.expect("Update failed");
        assert_eq!(state.settings().await, settings);
        assert_eq!(repo.load().await.unwrap(), Some(settings));
        assert_eq!(repo.save_count().await, 2);
    }

    #[tokio::test]
    async fn test_failed_save_keeps_state() {
        let state = MenuState::load(Arc::new(ReadOnlyRepository))
            .await
            .expect("Failed to load state");
        let before = state.settings().await;

        let mut settings = before.clone();
        settings.app_title = "Lost".to_string();
        let err = state.update_settings(settings).await.unwrap_err();
        assert!(matches!(err, CommandError::Storage(RepositoryError::Io(_))));

        let err = state.remove_menu_item("settings").await.unwrap_err();
        assert!(matches!(err, CommandError::Storage(_)));

        assert_eq!(state.settings().await, before);
    }

    #[tokio::test]
    async fn test_custom_policy_hides_more() {
        let repo = Arc::new(InMemorySettingsRepository::new());
        let state = MenuState::load(repo)
            .await
            .expect("Failed to load state")
            .with_policy(NavigationPolicy {
                admin_only: vec!["users".to_string(), "chat".to_string()],
            });

        let user = state.visible_menu(Role::User).await;
        assert!(user.iter().all(|n| n.find("chat").is_none()));
        assert!(user.iter().all(|n| n.find("users").is_none()));

        let admin = state.visible_menu(Role::Administrator).await;
        assert!(admin.iter().any(|n| n.find("chat").is_some()));
    }
}
