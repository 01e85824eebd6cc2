//! Menu Tree Node
//!
//! Derived, in-memory view of the menu. Never persisted.

use serde::{Deserialize, Serialize};

/// One node of the rendered menu tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuNode {
    pub id: String,
    pub label: String,
    pub icon: String,
    pub editable: bool,
    pub order: i32,
    /// Always present; empty for leaves
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    /// Number of nodes in this subtree, including self
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(MenuNode::size).sum::<usize>()
    }

    /// Depth-first search for a node by id
    pub fn find(&self, id: &str) -> Option<&MenuNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }
}
