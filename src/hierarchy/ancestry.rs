//! Ancestry Queries
//!
//! Parent-chain and descendant walks over the flat list. All walks are
//! bounded so a corrupted (cyclic) list yields an answer instead of hanging.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::domain::MenuItem;

/// id -> parent id, first occurrence wins
fn parent_map(items: &[MenuItem]) -> HashMap<&str, Option<&str>> {
    let mut parents = HashMap::with_capacity(items.len());
    for item in items {
        parents
            .entry(item.id.as_str())
            .or_insert(item.parent_id.as_deref());
    }
    parents
}

/// Ids from the immediate parent of `id` up to its root.
///
/// Stops at a missing parent, and after `items.len()` steps.
pub fn ancestor_chain(items: &[MenuItem], id: &str) -> Vec<String> {
    let parents = parent_map(items);
    let mut chain = Vec::new();
    let mut current = parents.get(id).copied().flatten();

    while let Some(pid) = current {
        if chain.len() >= items.len() {
            break;
        }
        chain.push(pid.to_string());
        current = parents.get(pid).copied().flatten();
    }
    chain
}

/// True if `candidate_ancestor_id` is a proper ancestor of `node_id`.
pub fn is_ancestor(items: &[MenuItem], candidate_ancestor_id: &str, node_id: &str) -> bool {
    let parents = parent_map(items);
    let mut current = parents.get(node_id).copied().flatten();
    let mut steps = 0;

    while let Some(pid) = current {
        if pid == candidate_ancestor_id {
            return true;
        }
        steps += 1;
        if steps > items.len() {
            return false;
        }
        current = parents.get(pid).copied().flatten();
    }
    false
}

/// All transitive children of `id`, breadth first, excluding `id` itself.
pub fn descendant_ids(items: &[MenuItem], id: &str) -> Vec<String> {
    let mut children_map: HashMap<&str, Vec<&str>> = HashMap::new();
    for item in items {
        if let Some(pid) = item.parent_id.as_deref() {
            children_map.entry(pid).or_default().push(item.id.as_str());
        }
    }

    let mut seen: HashSet<&str> = HashSet::from([id]);
    let mut result = Vec::new();
    let mut to_visit = VecDeque::from([id]);

    while let Some(current) = to_visit.pop_front() {
        for &child in children_map.get(current).into_iter().flatten() {
            if seen.insert(child) {
                result.push(child.to_string());
                to_visit.push_back(child);
            }
        }
    }
    result
}
