//! Domain Layer
//!
//! Contains the menu entities and core abstractions.
//! This layer has NO dependencies beyond serde and thiserror.

mod error;
mod menu_item;
mod menu_node;
mod settings;

pub use error::{MenuError, MenuResult};
pub use menu_item::{normalize_parent, MenuItem, MenuItemPatch, NewMenuItem, NO_PARENT_TOKENS};
pub use menu_node::MenuNode;
pub use settings::{default_menu_items, AppSettings};
