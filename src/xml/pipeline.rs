//! The XML-to-tree pipeline
//!
//! Orchestrates the five stages in strict sequence, each stage consuming the
//! complete output of the previous one:
//!
//!     1. scan      - character-level pass producing structural events
//!     2. build     - events into the id-linked record arena
//!     3. normalize - per-record type labels and attribute lists
//!     4. regroup   - optional depth-1 grouping under an `Extra` node
//!     5. serialize - arena into the nested tree for consumers
//!
//! A pipeline invocation owns all of its state (arena, stack, buffers), so
//! concurrent invocations on different inputs are independent. Nothing here
//! blocks or suspends.
//!
//! Malformed markup does not fail the run: the outcome carries whatever tree
//! could be built plus a [`ParseStatus`] the caller can inspect to decide
//! between showing a partial tree and rejecting the input.

use super::ast::{MarkupIssue, NodeArena};
use super::building::{build_tree, BuildOutput};
use super::grouping::regroup;
use super::mapping::normalize;
use super::scanning::scan;
use super::serializing::{to_tree, TreeNode};

/// Caller configuration for one pipeline invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Populate each record's attribute list from its raw tag tokens.
    pub capture_attributes: bool,
    /// Type labels kept as direct children of the root; all other depth-1
    /// nodes are collected under a synthetic `Extra` node. Empty disables
    /// grouping.
    pub important_types: Vec<String>,
}

/// Whether the scan consumed balanced markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseStatus {
    /// Every opened tag was closed and no stray closing tag was seen.
    Complete,
    /// The tree is best-effort; the issues describe what was unbalanced.
    Partial(Vec<MarkupIssue>),
}

impl ParseStatus {
    pub fn is_complete(&self) -> bool {
        matches!(self, ParseStatus::Complete)
    }

    /// The malformed-markup diagnostics, empty for a complete parse.
    pub fn issues(&self) -> &[MarkupIssue] {
        match self {
            ParseStatus::Complete => &[],
            ParseStatus::Partial(issues) => issues,
        }
    }
}

/// Aggregate shape statistics handed to rendering engines for sizing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutHints {
    /// Number of depth levels (deepest record's depth plus one).
    pub levels: usize,
    /// Largest number of records sharing one depth level.
    pub max_level_width: usize,
}

/// Output of a full pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    /// The serialized tree, `None` when the input held no elements.
    pub tree: Option<TreeNode>,
    /// Complete, or partial with diagnostics.
    pub status: ParseStatus,
    /// Shape statistics over all parsed records.
    pub hints: LayoutHints,
    /// The intermediate record arena, exposed for callers that want the
    /// flat representation.
    pub arena: NodeArena,
}

/// Run the full pipeline over one in-memory XML document.
pub fn parse(text: &str, options: &ParseOptions) -> ParseOutcome {
    let BuildOutput { mut arena, issues } = build_tree(scan(text));

    normalize(&mut arena, options.capture_attributes);
    regroup(&mut arena, &options.important_types);

    let tree = to_tree(&arena);
    let hints = layout_hints(&arena);
    let status = if issues.is_empty() {
        ParseStatus::Complete
    } else {
        ParseStatus::Partial(issues)
    };

    ParseOutcome {
        tree,
        status,
        hints,
        arena,
    }
}

/// Count records per depth level to size the rendered tree.
pub fn layout_hints(arena: &NodeArena) -> LayoutHints {
    let mut counts: Vec<usize> = Vec::new();
    for (_, record) in arena.iter() {
        if record.depth >= counts.len() {
            counts.resize(record.depth + 1, 0);
        }
        counts[record.depth] += 1;
    }
    LayoutHints {
        levels: counts.len(),
        max_level_width: counts.iter().copied().max().unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_parse_status() {
        let outcome = parse("<a><b/></a>", &ParseOptions::default());
        assert!(outcome.status.is_complete());
        assert!(outcome.status.issues().is_empty());
        assert!(outcome.tree.is_some());
    }

    #[test]
    fn test_partial_parse_keeps_tree() {
        let outcome = parse("<a><b></a>", &ParseOptions::default());
        assert_eq!(outcome.status.issues().len(), 1);
        let tree = outcome.tree.expect("partial tree");
        assert_eq!(tree.node_type, "a");
        assert_eq!(tree.children.len(), 1);
    }

    #[test]
    fn test_empty_input_has_no_tree() {
        let outcome = parse("", &ParseOptions::default());
        assert!(outcome.status.is_complete());
        assert_eq!(outcome.tree, None);
        assert_eq!(outcome.hints, LayoutHints::default());
    }

    #[test]
    fn test_hints_count_records_per_level() {
        // depths: a=0, b=1, c=2, d=2, e=1
        let outcome = parse("<a><b><c/><d/></b><e/></a>", &ParseOptions::default());
        assert_eq!(outcome.hints.levels, 3);
        assert_eq!(outcome.hints.max_level_width, 2);
    }

    #[test]
    fn test_hints_include_group_node() {
        let options = ParseOptions {
            capture_attributes: false,
            important_types: vec!["b".to_string()],
        };
        // depth 1 holds b, c and the synthetic Extra node
        let outcome = parse("<a><b/><c/></a>", &options);
        assert_eq!(outcome.hints.max_level_width, 3);
    }

    #[test]
    fn test_grouping_wired_through_options() {
        let options = ParseOptions {
            capture_attributes: false,
            important_types: vec!["b".to_string()],
        };
        let tree = parse("<a><b/><c/></a>", &options).tree.unwrap();
        let types: Vec<&str> = tree.children.iter().map(|c| c.node_type.as_str()).collect();
        assert_eq!(types, vec!["b", "Extra"]);
        assert_eq!(tree.children[1].children[0].node_type, "c");
    }

    #[test]
    fn test_attribute_capture_wired_through_options() {
        let options = ParseOptions {
            capture_attributes: true,
            important_types: Vec::new(),
        };
        let tree = parse(r#"<a id="1"/>"#, &options).tree.unwrap();
        assert_eq!(tree.attr, vec![r#"id="1""#]);

        let tree = parse(r#"<a id="1"/>"#, &ParseOptions::default())
            .tree
            .unwrap();
        assert!(tree.attr.is_empty());
    }
}
