//! Tree Conversions
//!
//! Flat list <-> tree. The flat list stays the source of truth; the tree is
//! rebuilt from it on every call.

use std::collections::{HashMap, HashSet};

use crate::domain::{MenuItem, MenuNode};

/// Build the menu tree from the flat list.
///
/// Items whose parent is absent or dangling become roots. Siblings are sorted
/// by `order` with a stable sort, so ties keep input order. In a corrupted
/// list, items left unreachable by a parent cycle are promoted to root one at
/// a time (first in input order) until every item is placed.
pub fn build_tree(items: &[MenuItem]) -> Vec<MenuNode> {
    // First occurrence owns the id
    let mut index_of: HashMap<&str, usize> = HashMap::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        index_of.entry(item.id.as_str()).or_insert(i);
    }

    let mut parent_of: Vec<Option<usize>> = items
        .iter()
        .map(|item| {
            item.parent_id
                .as_deref()
                .and_then(|pid| index_of.get(pid).copied())
        })
        .collect();

    let mut placed = vec![false; items.len()];
    let mut roots: Vec<usize> = parent_of
        .iter()
        .enumerate()
        .filter(|(_, parent)| parent.is_none())
        .map(|(i, _)| i)
        .collect();
    for &root in &roots {
        mark_subtree(root, &parent_of, &mut placed);
    }

    // Anything still unplaced hangs off a cycle
    for (i, item) in items.iter().enumerate() {
        if !placed[i] {
            log::warn!(
                "menu item '{}' is part of a parent cycle, showing it at root",
                item.id
            );
            parent_of[i] = None;
            roots.push(i);
            mark_subtree(i, &parent_of, &mut placed);
        }
    }

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); items.len()];
    for (i, parent) in parent_of.iter().enumerate() {
        if let Some(p) = parent {
            children[*p].push(i);
        }
    }

    // Stable: equal orders keep input order
    roots.sort_by_key(|&i| items[i].order);
    for siblings in children.iter_mut() {
        siblings.sort_by_key(|&i| items[i].order);
    }

    fn to_node(i: usize, items: &[MenuItem], children: &[Vec<usize>]) -> MenuNode {
        let item = &items[i];
        MenuNode {
            id: item.id.clone(),
            label: item.label.clone(),
            icon: item.icon.clone(),
            editable: item.editable,
            order: item.order,
            children: children[i]
                .iter()
                .map(|&c| to_node(c, items, children))
                .collect(),
        }
    }

    roots
        .into_iter()
        .map(|i| to_node(i, items, &children))
        .collect()
}

/// Mark `root` and everything below it (under the current `parent_of`) as placed
fn mark_subtree(root: usize, parent_of: &[Option<usize>], placed: &mut [bool]) {
    let mut to_visit = vec![root];
    placed[root] = true;
    while let Some(current) = to_visit.pop() {
        for (i, parent) in parent_of.iter().enumerate() {
            if *parent == Some(current) && !placed[i] {
                placed[i] = true;
                to_visit.push(i);
            }
        }
    }
}

/// Flatten a tree back into the persisted form.
///
/// Pre-order; `parent_id` is the enclosing node, `order` the 1-based position
/// among siblings.
pub fn flatten_tree(tree: &[MenuNode]) -> Vec<MenuItem> {
    fn collect(nodes: &[MenuNode], parent_id: Option<&str>, result: &mut Vec<MenuItem>) {
        for (index, node) in nodes.iter().enumerate() {
            result.push(MenuItem {
                id: node.id.clone(),
                label: node.label.clone(),
                icon: node.icon.clone(),
                parent_id: parent_id.map(str::to_string),
                order: index as i32 + 1,
                editable: node.editable,
            });
            collect(&node.children, Some(&node.id), result);
        }
    }

    let mut result = Vec::new();
    collect(tree, None, &mut result);
    result
}

/// Render items as an indented list using recursive DFS.
///
/// Returns (item, depth) pairs in display order; children of collapsed ids
/// are skipped. Each returned item carries its resolved parent.
pub fn render_rows(items: &[MenuItem], collapsed: &HashSet<String>) -> Vec<(MenuItem, usize)> {
    fn collect(
        nodes: &[MenuNode],
        parent_id: Option<&str>,
        depth: usize,
        collapsed: &HashSet<String>,
        result: &mut Vec<(MenuItem, usize)>,
    ) {
        for node in nodes {
            result.push((
                MenuItem {
                    id: node.id.clone(),
                    label: node.label.clone(),
                    icon: node.icon.clone(),
                    parent_id: parent_id.map(str::to_string),
                    order: node.order,
                    editable: node.editable,
                },
                depth,
            ));
            if !collapsed.contains(&node.id) {
                collect(&node.children, Some(&node.id), depth + 1, collapsed, result);
            }
        }
    }

    let tree = build_tree(items);
    let mut result = Vec::new();
    collect(&tree, None, 0, collapsed, &mut result);
    result
}

/// Parent as `build_tree` sees it: a dangling parent id counts as root
pub(super) fn resolved_parent<'a>(item: &'a MenuItem, ids: &HashSet<&str>) -> Option<&'a str> {
    item.parent_id
        .as_deref()
        .filter(|pid| ids.contains(pid))
}

/// Renumber one sibling group to 1..=n, keeping its current order.
pub fn reindex_siblings(items: &[MenuItem], parent_id: Option<&str>) -> Vec<MenuItem> {
    let ids: HashSet<&str> = items.iter().map(|item| item.id.as_str()).collect();
    let mut group: Vec<usize> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| resolved_parent(item, &ids) == parent_id)
        .map(|(i, _)| i)
        .collect();
    group.sort_by_key(|&i| items[i].order);

    let mut result = items.to_vec();
    for (position, &i) in group.iter().enumerate() {
        result[i].order = position as i32 + 1;
    }
    result
}
