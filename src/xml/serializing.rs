//! Serialized tree construction
//!
//! Turns the flat, id-linked arena into the nested [`TreeNode`] value that
//! external consumers (typically a tree-rendering engine) receive. The
//! result is a pure tree: every node is exclusively owned by its parent and
//! carries no reference back into the arena, so the caller is free to hold
//! on to it after the pipeline state is gone.
//!
//! Construction is recursive and recursion depth equals tree depth. Callers
//! feeding adversarially deep documents should bound the depth themselves
//! before serializing.

use serde::{Deserialize, Serialize};

use super::ast::{NodeArena, NodeId};

/// One node of the serialized tree - the pipeline's external contract.
///
/// Field names match the wire format consumed by rendering engines: `name`
/// and `value` are omitted when absent, `parent` is an explicit `null` for
/// the root and otherwise carries the parent's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(rename = "type")]
    pub node_type: String,
    pub attr: Vec<String>,
    pub parent: Option<String>,
    pub children: Vec<TreeNode>,
}

/// Serialize the arena into a tree rooted at the document root.
///
/// Returns `None` for an empty arena (nothing was parsed, so there is no
/// tree to render).
pub fn to_tree(arena: &NodeArena) -> Option<TreeNode> {
    arena.root().map(|root| build_node(arena, root, None))
}

fn build_node(arena: &NodeArena, id: NodeId, parent_name: Option<String>) -> TreeNode {
    let record = &arena[id];
    let mut node = TreeNode {
        name: record.name.clone(),
        value: record.value.clone(),
        node_type: record.type_label.clone(),
        attr: record.attributes.clone(),
        parent: parent_name,
        children: Vec::with_capacity(record.children.len()),
    };
    for &child in &record.children {
        let node_name = node.name.clone();
        node.children.push(build_node(arena, child, node_name));
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::building::build_tree;
    use crate::xml::mapping::normalize;
    use crate::xml::scanning::scan;

    fn tree_for(source: &str) -> Option<TreeNode> {
        let mut output = build_tree(scan(source));
        normalize(&mut output.arena, true);
        to_tree(&output.arena)
    }

    #[test]
    fn test_empty_arena_has_no_tree() {
        assert_eq!(to_tree(&NodeArena::new()), None);
    }

    #[test]
    fn test_root_parent_is_explicit_null() {
        let tree = tree_for("<a/>").unwrap();
        assert_eq!(tree.parent, None);
        assert_eq!(tree.node_type, "a");
    }

    #[test]
    fn test_children_follow_record_order() {
        let tree = tree_for("<a><b>1</b><c>2</c></a>").unwrap();
        let types: Vec<&str> = tree.children.iter().map(|c| c.node_type.as_str()).collect();
        assert_eq!(types, vec!["b", "c"]);
        assert_eq!(tree.children[0].value.as_deref(), Some("1"));
        assert_eq!(tree.children[1].value.as_deref(), Some("2"));
    }

    #[test]
    fn test_attributes_copied_onto_nodes() {
        let tree = tree_for(r#"<a id="1"><b/></a>"#).unwrap();
        assert_eq!(tree.attr, vec![r#"id="1""#]);
        assert!(tree.children[0].attr.is_empty());
    }

    #[test]
    fn test_json_omits_absent_name_and_value() {
        let tree = tree_for("<a/>").unwrap();
        let json = serde_json::to_string(&tree).unwrap();
        assert_eq!(
            json,
            r#"{"type":"a","attr":[],"parent":null,"children":[]}"#
        );
    }

    #[test]
    fn test_json_keeps_present_value() {
        let tree = tree_for("<a>hi</a>").unwrap();
        let json = serde_json::to_string(&tree).unwrap();
        assert_eq!(
            json,
            r#"{"value":"hi","type":"a","attr":[],"parent":null,"children":[]}"#
        );
    }

    #[test]
    fn test_round_trips_through_json() {
        let tree = tree_for(r#"<a id="1"><b>1</b><c/></a>"#).unwrap();
        let json = serde_json::to_string(&tree).unwrap();
        let back: TreeNode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tree);
    }
}
