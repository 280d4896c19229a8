//! # xml2tree
//!
//! A transformation pipeline from raw XML text to a nested, serializable
//! tree suitable for tree-rendering engines.
//!
//! Parsing is a hand-written single pass: no DOM library, no schema
//! validation, no entity decoding. Malformed input degrades predictably -
//! the pipeline returns whatever tree it could build together with a
//! structured status instead of aborting. See the [xml] module for the
//! stage-by-stage breakdown.

pub mod xml;

pub use xml::ast::{MarkupIssue, NodeArena, NodeId, TagRecord};
pub use xml::pipeline::{parse, LayoutHints, ParseOptions, ParseOutcome, ParseStatus};
pub use xml::serializing::TreeNode;
