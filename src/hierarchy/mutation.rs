//! Mutation Operations
//!
//! Add, update, remove and move entries. Each operation takes the current
//! flat list and returns a new one; on error the input is left as it was.

use std::collections::HashSet;

use crate::domain::{normalize_parent, MenuError, MenuItem, MenuItemPatch, MenuResult, NewMenuItem};
use super::ancestry::{descendant_ids, is_ancestor};
use super::tree::resolved_parent;

fn position_of(items: &[MenuItem], id: &str) -> MenuResult<usize> {
    items
        .iter()
        .position(|item| item.id == id)
        .ok_or_else(|| MenuError::NotFound(id.to_string()))
}

/// Append a new editable entry.
pub fn add_item(items: &[MenuItem], new_item: NewMenuItem) -> MenuResult<Vec<MenuItem>> {
    let id = new_item.id.trim();
    let label = new_item.label.trim();

    if id.is_empty() {
        return Err(MenuError::Validation("menu id is required".to_string()));
    }
    if label.is_empty() {
        return Err(MenuError::Validation("menu label is required".to_string()));
    }
    if items.iter().any(|item| item.id == id) {
        return Err(MenuError::DuplicateId(id.to_string()));
    }

    let parent_id = normalize_parent(new_item.parent_id.as_deref());
    let order = new_item.order.unwrap_or_else(|| {
        let siblings = items
            .iter()
            .filter(|item| item.parent_id == parent_id)
            .count();
        siblings as i32 + 1
    });

    let mut result = items.to_vec();
    result.push(MenuItem {
        id: id.to_string(),
        label: label.to_string(),
        icon: new_item.icon,
        parent_id,
        order,
        editable: true,
    });
    log::debug!("added menu item '{}' at order {}", id, order);
    Ok(result)
}

/// Change the label and/or icon of an entry.
///
/// A missing id is reported as `NotFound` rather than ignored.
pub fn update_item(items: &[MenuItem], id: &str, patch: MenuItemPatch) -> MenuResult<Vec<MenuItem>> {
    let index = position_of(items, id)?;
    if !items[index].editable {
        return Err(MenuError::NotEditable(id.to_string()));
    }

    let label = match patch.label {
        Some(label) if label.trim().is_empty() => {
            return Err(MenuError::Validation("menu label is required".to_string()));
        }
        Some(label) => Some(label.trim().to_string()),
        None => None,
    };

    let mut result = items.to_vec();
    let item = &mut result[index];
    if let Some(label) = label {
        item.label = label;
    }
    if let Some(icon) = patch.icon {
        item.icon = icon;
    }
    Ok(result)
}

/// Remove an entry together with its whole subtree.
///
/// Only the target's `editable` flag is checked; descendants go with it.
pub fn remove_item(items: &[MenuItem], id: &str) -> MenuResult<Vec<MenuItem>> {
    let index = position_of(items, id)?;
    if !items[index].editable {
        return Err(MenuError::NotEditable(id.to_string()));
    }

    let mut doomed: HashSet<String> = descendant_ids(items, id).into_iter().collect();
    doomed.insert(id.to_string());

    let result: Vec<MenuItem> = items
        .iter()
        .filter(|item| !doomed.contains(&item.id))
        .cloned()
        .collect();
    log::debug!("removed menu item '{}' and {} descendants", id, doomed.len() - 1);
    Ok(result)
}

/// Move an entry under a new parent (`None` makes it a root).
///
/// Rejects the move with `Cycle` when the new parent is the item itself or
/// one of its descendants. Sibling orders are left untouched.
pub fn reparent(items: &[MenuItem], moved_id: &str, new_parent_id: Option<&str>) -> MenuResult<Vec<MenuItem>> {
    let index = position_of(items, moved_id)?;

    if let Some(target) = new_parent_id {
        position_of(items, target)?;
        if target == moved_id || is_ancestor(items, moved_id, target) {
            log::warn!("rejected moving menu '{}' under its descendant '{}'", moved_id, target);
            return Err(MenuError::Cycle {
                moved: moved_id.to_string(),
                target: target.to_string(),
            });
        }
    }

    let mut result = items.to_vec();
    result[index].parent_id = new_parent_id.map(str::to_string);
    Ok(result)
}

/// Move an entry to `position` (0-based, clamped) inside the sibling group
/// of `new_parent_id`, then renumber that group 1..=n.
pub fn move_to(
    items: &[MenuItem],
    id: &str,
    new_parent_id: Option<&str>,
    position: usize,
) -> MenuResult<Vec<MenuItem>> {
    let mut result = reparent(items, id, new_parent_id)?;

    // Group by resolved parent so dangling parents count as roots, as in build_tree
    let ids: HashSet<&str> = result.iter().map(|item| item.id.as_str()).collect();
    let mut siblings: Vec<usize> = result
        .iter()
        .enumerate()
        .filter(|(_, item)| resolved_parent(item, &ids) == new_parent_id && item.id != id)
        .map(|(i, _)| i)
        .collect();
    siblings.sort_by_key(|&i| result[i].order);

    let moved = position_of(&result, id)?;
    siblings.insert(position.min(siblings.len()), moved);

    for (order, &i) in siblings.iter().enumerate() {
        result[i].order = order as i32 + 1;
    }
    Ok(result)
}
