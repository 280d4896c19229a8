//! Tree builder
//!
//! Consumes scanner events and assembles the flat record arena. The builder
//! owns the only piece of cross-event state in the pipeline: the open-tag
//! stack, which determines each new record's depth and parent and is where
//! stack-balance problems surface. Each event constructs its record locally
//! and finalizes it in one step; nothing is shared across iterations.
//!
//! Malformed markup never aborts the build. A closing tag with nothing open
//! and tags still open at end of input are recorded as [`MarkupIssue`]s and
//! the arena holds whatever tree could be assembled.

use super::ast::{MarkupIssue, NodeArena, NodeId, TagRecord};
use super::scanning::ScanEvent;

/// The arena plus the malformed-markup diagnostics observed while building.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildOutput {
    pub arena: NodeArena,
    pub issues: Vec<MarkupIssue>,
}

/// Incremental builder over scanner events.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    arena: NodeArena,
    stack: Vec<NodeId>,
    issues: Vec<MarkupIssue>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, event: ScanEvent) {
        match event {
            ScanEvent::OpenTag(raw) => self.open_tag(raw, true),
            ScanEvent::SelfClosingTag(raw) => self.open_tag(raw, false),
            ScanEvent::CloseTag => self.close_tag(),
            ScanEvent::Text(text) => self.attach_text(text),
        }
    }

    /// Drain the remaining stack into unclosed-tag issues and return the
    /// build output. One issue per tag left open, outermost first.
    pub fn finish(mut self) -> BuildOutput {
        for id in self.stack.drain(..) {
            self.issues.push(MarkupIssue::UnclosedTag {
                tag: self.arena[id].raw_tag.clone(),
            });
        }
        BuildOutput {
            arena: self.arena,
            issues: self.issues,
        }
    }

    fn open_tag(&mut self, raw: String, push: bool) {
        let depth = self.stack.len();
        let parent = self.stack.last().copied();
        let record = TagRecord::new(raw, depth, parent);
        let id = self.arena.push(record);
        if let Some(parent) = parent {
            self.arena[parent].children.push(id);
        }
        // self-closing tags are complete on arrival and never enter the stack
        if push {
            self.stack.push(id);
        }
    }

    fn close_tag(&mut self) {
        if self.stack.pop().is_none() {
            self.issues.push(MarkupIssue::ExtraClosingTag);
        }
    }

    /// Attach flushed inter-tag text to the innermost open record, or to the
    /// most recently completed top-level record when nothing is open. Text
    /// arriving before the first tag has no home and is dropped.
    fn attach_text(&mut self, text: String) {
        let target = self.stack.last().copied().or_else(|| self.arena.last_top_level());
        if let Some(id) = target {
            self.arena[id].value = Some(text);
        }
    }
}

/// Build the record arena from a full event sequence.
pub fn build_tree<I>(events: I) -> BuildOutput
where
    I: IntoIterator<Item = ScanEvent>,
{
    let mut builder = TreeBuilder::new();
    for event in events {
        builder.handle(event);
    }
    builder.finish()
}
