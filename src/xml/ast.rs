//! Data model for the parsing pipeline
//!
//! Parsed tags live in a flat arena ([`NodeArena`]) addressed by a dedicated
//! index type ([`NodeId`]). The tree structure is expressed through the
//! parent/children links on each [`TagRecord`]; no record owns another, which
//! keeps every pipeline stage free to mutate records in place. The serialized
//! tree handed to consumers is built separately, see
//! [serializing](super::serializing).

use std::fmt;
use std::ops::{Index, IndexMut};

/// Index of a record in the arena.
///
/// Ids are allocated in discovery order, so they double as a stable identity
/// for each tag occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the record in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One parsed tag occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRecord {
    /// The unparsed content between `<` and `>`, attributes still embedded.
    pub raw_tag: String,
    /// Free text found between this tag and the next sibling/close tag.
    /// Absent for tags with element children.
    pub value: Option<String>,
    /// Display label derived from `raw_tag` by the normalizer.
    pub type_label: String,
    /// Raw attribute tokens, populated only when attribute capture is on.
    pub attributes: Vec<String>,
    /// Nesting level, 0 for the document root.
    pub depth: usize,
    /// Enclosing tag at open time, `None` for top-level tags.
    pub parent: Option<NodeId>,
    /// Child ids in document order.
    pub children: Vec<NodeId>,
    /// Derived name, kept for group-demotion bookkeeping.
    pub name: Option<String>,
}

impl TagRecord {
    pub fn new(raw_tag: String, depth: usize, parent: Option<NodeId>) -> Self {
        Self {
            raw_tag,
            value: None,
            type_label: String::new(),
            attributes: Vec::new(),
            depth,
            parent,
            children: Vec::new(),
            name: None,
        }
    }
}

/// Flat, append-only store of [`TagRecord`]s in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeArena {
    records: Vec<TagRecord>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record and return its id.
    pub fn push(&mut self, record: TagRecord) -> NodeId {
        let id = NodeId(self.records.len());
        self.records.push(record);
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&TagRecord> {
        self.records.get(id.0)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut TagRecord> {
        self.records.get_mut(id.0)
    }

    /// The document root. The first record is always a top-level tag because
    /// the open stack is necessarily empty when it is created.
    pub fn root(&self) -> Option<NodeId> {
        if self.records.is_empty() {
            None
        } else {
            Some(NodeId(0))
        }
    }

    /// The most recently appended top-level record, if any.
    pub fn last_top_level(&self) -> Option<NodeId> {
        self.records
            .iter()
            .rposition(|record| record.depth == 0)
            .map(NodeId)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &TagRecord)> {
        self.records
            .iter()
            .enumerate()
            .map(|(i, record)| (NodeId(i), record))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (NodeId, &mut TagRecord)> {
        self.records
            .iter_mut()
            .enumerate()
            .map(|(i, record)| (NodeId(i), record))
    }
}

impl Index<NodeId> for NodeArena {
    type Output = TagRecord;

    fn index(&self, id: NodeId) -> &TagRecord {
        &self.records[id.0]
    }
}

impl IndexMut<NodeId> for NodeArena {
    fn index_mut(&mut self, id: NodeId) -> &mut TagRecord {
        &mut self.records[id.0]
    }
}

/// Malformed-markup conditions observed while building the tree.
///
/// These are diagnostics, not failures: the builder keeps going and returns
/// whatever tree it could assemble alongside the issue list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupIssue {
    /// A closing tag appeared while no tag was open.
    ExtraClosingTag,
    /// A tag was still open when the input ended.
    UnclosedTag { tag: String },
}

impl fmt::Display for MarkupIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkupIssue::ExtraClosingTag => {
                write!(f, "closing tag without a matching open tag")
            }
            MarkupIssue::UnclosedTag { tag } => {
                write!(f, "tag <{}> is never closed", tag)
            }
        }
    }
}

impl std::error::Error for MarkupIssue {}
