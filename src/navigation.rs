//! Navigation Helpers
//!
//! Role filtering and active-item lookups for the navbar.

use serde::{Deserialize, Serialize};

use crate::domain::MenuNode;

/// Dashboard user role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Role {
    Administrator,
    #[default]
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Administrator => "Administrator",
            Role::User => "User",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "Administrator" => Role::Administrator,
            _ => Role::User,
        }
    }
}

/// Which menu entries are reserved for administrators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationPolicy {
    pub admin_only: Vec<String>,
}

impl Default for NavigationPolicy {
    fn default() -> Self {
        Self {
            admin_only: vec!["users".to_string()],
        }
    }
}

/// The tree a user with `role` is allowed to see.
///
/// Admin-only entries are dropped with their whole subtree.
pub fn visible_menu(tree: &[MenuNode], role: Role, policy: &NavigationPolicy) -> Vec<MenuNode> {
    if role == Role::Administrator {
        return tree.to_vec();
    }

    fn prune(nodes: &[MenuNode], policy: &NavigationPolicy) -> Vec<MenuNode> {
        nodes
            .iter()
            .filter(|node| !policy.admin_only.contains(&node.id))
            .map(|node| MenuNode {
                children: prune(&node.children, policy),
                ..node.clone()
            })
            .collect()
    }

    prune(tree, policy)
}

/// True when `active_id` is this node or anywhere below it
pub fn is_active(node: &MenuNode, active_id: &str) -> bool {
    node.id == active_id || node.children.iter().any(|child| is_active(child, active_id))
}

/// Root-to-node breadcrumb for `active_id`; empty if it is not in the tree
pub fn active_path<'a>(tree: &'a [MenuNode], active_id: &str) -> Vec<&'a MenuNode> {
    for node in tree {
        if node.id == active_id {
            return vec![node];
        }
        let mut path = active_path(&node.children, active_id);
        if !path.is_empty() {
            path.insert(0, node);
            return path;
        }
    }
    Vec::new()
}
