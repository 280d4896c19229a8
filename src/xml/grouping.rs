//! Grouping transform for depth-1 records
//!
//! Callers that only care about a handful of top-level node types can pass
//! those type labels as an allow-list. Every other direct child of the root
//! is then re-parented under one synthetic `Extra` record, keeping the tree
//! shallow where it matters. Relative order is preserved on both sides of
//! the partition and the `Extra` node always comes last among the root's
//! children.
//!
//! An empty allow-list disables the transform entirely, and an allow-list
//! that matches every depth-1 label leaves the tree unchanged (no empty
//! `Extra` node is created).

use super::ast::{NodeArena, NodeId, TagRecord};

/// Type label of the synthetic record that collects demoted nodes.
pub const GROUP_LABEL: &str = "Extra";

/// Re-parent non-allow-listed depth-1 records under a synthetic group node.
///
/// Mutates the arena in place and returns the id of the group node when one
/// was created. Does not re-run attribute normalization.
pub fn regroup(arena: &mut NodeArena, important_types: &[String]) -> Option<NodeId> {
    if important_types.is_empty() {
        return None;
    }
    let root = arena.root()?;

    let mut kept = Vec::new();
    let mut demoted = Vec::new();
    for &child in &arena[root].children {
        if important_types.iter().any(|t| *t == arena[child].type_label) {
            kept.push(child);
        } else {
            demoted.push(child);
        }
    }
    if demoted.is_empty() {
        return None;
    }

    let mut group = TagRecord::new(GROUP_LABEL.to_string(), 1, Some(root));
    group.type_label = GROUP_LABEL.to_string();
    group.children = demoted.clone();
    let group_id = arena.push(group);

    for &id in &demoted {
        arena[id].parent = Some(group_id);
    }
    kept.push(group_id);
    arena[root].children = kept;

    Some(group_id)
}
