//! Application Settings
//!
//! The document the settings layer persists: branding plus the flat menu.

use serde::{Deserialize, Serialize};
use super::menu_item::MenuItem;

/// Dashboard settings, camelCase on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    #[serde(default = "default_title")]
    pub app_title: String,
    #[serde(default = "default_primary_color")]
    pub primary_color: String,
    #[serde(default = "default_background_color")]
    pub background_color: String,
    #[serde(default = "default_navbar_style")]
    pub navbar_style: String,
    #[serde(default)]
    pub menu_items: Vec<MenuItem>,
}

fn default_title() -> String {
    "Sistem Manajemen Data".to_string()
}

fn default_primary_color() -> String {
    "blue".to_string()
}

fn default_background_color() -> String {
    "white".to_string()
}

fn default_navbar_style() -> String {
    "default".to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            app_title: default_title(),
            primary_color: default_primary_color(),
            background_color: default_background_color(),
            navbar_style: default_navbar_style(),
            menu_items: default_menu_items(),
        }
    }
}

/// The seeded dashboard navigation
pub fn default_menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem::new("dashboard", "Dashboard", "BarChart3").with_order(1),
        MenuItem::new("data-management", "Data Management", "Database").with_order(2),
        MenuItem::new_child("data", "View Data", "Database", "data-management", 1),
        MenuItem::new_child("add", "Tambah Data", "Plus", "data-management", 2),
        MenuItem::new("import-export", "Import/Export", "Upload").with_order(3),
        MenuItem::new_child("import", "Import Data", "Upload", "import-export", 1),
        MenuItem::new_child("export", "Export Data", "Download", "import-export", 2),
        MenuItem::new("backup-system", "Backup System", "Archive").with_order(4),
        MenuItem::new_child("backup", "Backup Data", "Archive", "backup-system", 1),
        MenuItem::new("communication", "Communication", "MessageSquare").with_order(5),
        MenuItem::new_child("chat", "Chat System", "MessageSquare", "communication", 1),
        MenuItem::new("settings", "Settings", "Settings").with_order(6),
        MenuItem::new_child("login-settings", "Login Customization", "Palette", "settings", 1),
        MenuItem::new_child("users", "User Management", "Users", "settings", 2),
        MenuItem::new_child("app-settings", "App Settings", "Settings", "settings", 3),
    ]
}
