//! Menu Item Entity
//!
//! The flat, persisted form of a navigation entry. Hierarchy is expressed
//! through `parent_id` back-references; see [`crate::hierarchy`] for the
//! tree view.

use serde::{Deserialize, Serialize};

/// Parent values the editing UI uses to mean "top level"
pub const NO_PARENT_TOKENS: [&str; 2] = ["none", ""];

/// A single menu entry as stored in settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Unique identifier, also the navigation target
    pub id: String,
    /// Display text
    pub label: String,
    /// Symbolic icon name, resolved by an [`crate::icon::IconResolver`]
    pub icon: String,
    /// Parent item ID (None = root level)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Sort key within siblings; ties keep input order
    #[serde(default)]
    pub order: i32,
    /// System entries are not editable and cannot be removed
    #[serde(default)]
    pub editable: bool,
}

impl MenuItem {
    /// Create a new editable root item
    pub fn new(id: impl Into<String>, label: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: icon.into(),
            parent_id: None,
            order: 0,
            editable: true,
        }
    }

    /// Create a new editable child item under a parent
    pub fn new_child(
        id: impl Into<String>,
        label: impl Into<String>,
        icon: impl Into<String>,
        parent_id: impl Into<String>,
        order: i32,
    ) -> Self {
        Self {
            parent_id: Some(parent_id.into()),
            order,
            ..Self::new(id, label, icon)
        }
    }

    /// Set the sibling order
    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    /// Mark as a protected system entry
    pub fn locked(mut self) -> Self {
        self.editable = false;
        self
    }

    /// Check if this is a root item (no parent)
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Input for adding a menu entry from the editor dialog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMenuItem {
    pub id: String,
    pub label: String,
    pub icon: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    /// Explicit order; defaults to the end of the sibling group
    #[serde(default)]
    pub order: Option<i32>,
}

impl NewMenuItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: icon.into(),
            parent_id: None,
            order: None,
        }
    }

    pub fn under(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn at_order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }
}

/// Label/icon changes for an existing entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItemPatch {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

impl MenuItemPatch {
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            icon: None,
        }
    }

    pub fn icon(icon: impl Into<String>) -> Self {
        Self {
            label: None,
            icon: Some(icon.into()),
        }
    }
}

/// Map the editor's "no parent" sentinels to `None`
pub fn normalize_parent(parent_id: Option<&str>) -> Option<String> {
    match parent_id.map(str::trim) {
        Some(pid) if !NO_PARENT_TOKENS.contains(&pid) => Some(pid.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_item_creation() {
        let item = MenuItem::new("dashboard", "Dashboard", "BarChart3");
        assert_eq!(item.id, "dashboard");
        assert!(item.editable);
        assert!(item.is_root());
    }

    #[test]
    fn test_child_item_creation() {
        let child = MenuItem::new_child("data", "View Data", "Database", "data-management", 1);
        assert_eq!(child.parent_id.as_deref(), Some("data-management"));
        assert!(!child.is_root());
    }

    #[test]
    fn test_persisted_field_names() {
        let child = MenuItem::new_child("data", "View Data", "Database", "data-management", 1);
        let json = serde_json::to_value(&child).unwrap();
        assert_eq!(json["parentId"], "data-management");
        assert_eq!(json["order"], 1);
        assert_eq!(json["editable"], true);
    }

    #[test]
    fn test_missing_optional_fields_use_defaults() {
        let item: MenuItem =
            serde_json::from_str(r#"{"id":"x","label":"X","icon":"Home"}"#).unwrap();
        assert_eq!(item.parent_id, None);
        assert_eq!(item.order, 0);
        assert!(!item.editable);
    }

    #[test]
    fn test_normalize_parent() {
        assert_eq!(normalize_parent(Some("none")), None);
        assert_eq!(normalize_parent(Some("")), None);
        assert_eq!(normalize_parent(None), None);
        assert_eq!(normalize_parent(Some("settings")), Some("settings".to_string()));
    }
}
