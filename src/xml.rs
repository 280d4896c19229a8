//! XML-to-tree transformation
//!
//!     This module turns raw XML text into a nested, serializable tree
//!     annotated with per-node type labels and optional attribute lists,
//!     ready for an arbitrary tree-rendering engine.
//!
//!     The work is split into five stages that run strictly in sequence,
//!     each consuming the complete output of the previous one:
//!
//!         1. [scanning]    - a single-pass character-level scanner that
//!            classifies the input into lexical modes and emits structural
//!            events (open / self-closing / close tags, inter-tag text).
//!         2. [building]    - an explicit-stack tree builder that assigns
//!            ids, depths and parent/child links in a flat record arena.
//!         3. [mapping]     - per-record attribute/type normalization,
//!            including the schema-element label synthesis.
//!         4. [grouping]    - the optional transform collecting
//!            non-allow-listed depth-1 nodes under one `Extra` node.
//!         5. [serializing] - the recursive conversion of the arena into
//!            the owned tree value handed to consumers.
//!
//!     [pipeline] wires the stages together and is the entry point most
//!     callers want; the stage modules stay public so each transition can be
//!     exercised in isolation.

pub mod ast;
pub mod building;
pub mod grouping;
pub mod mapping;
pub mod pipeline;
pub mod scanning;
pub mod serializing;

pub use ast::{MarkupIssue, NodeArena, NodeId, TagRecord};
pub use pipeline::{parse, LayoutHints, ParseOptions, ParseOutcome, ParseStatus};
pub use serializing::TreeNode;
