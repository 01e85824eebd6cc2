//! Menu Hierarchy Engine
//!
//! Pure functions over the flat menu list, split into:
//! - tree: flat <-> tree conversions and display rows
//! - ancestry: parent-chain and descendant walks
//! - mutation: add, update, remove, reparent, move
//!
//! Nothing here keeps state between calls. Callers pass the current list
//! and store whatever comes back.

mod ancestry;
mod mutation;
mod tree;

pub use ancestry::{ancestor_chain, descendant_ids, is_ancestor};
pub use mutation::{add_item, move_to, remove_item, reparent, update_item};
pub use tree::{build_tree, flatten_tree, reindex_siblings, render_rows};
