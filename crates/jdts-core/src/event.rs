//! Decision events and the sinks that receive them.

use std::fmt;

use jdts_model::{Block, Classification, TagRule};
use serde::Serialize;

/// Outcome of evaluating one rule against one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Decision {
    /// A missing tag was inserted.
    Added,
    /// An existing tag's content was rewritten.
    Replaced,
    /// An existing tag was moved to its canonical position.
    Repositioned,
    /// A disallowed tag was deleted.
    Removed,
    /// The tag exists and is left as is.
    Unchanged,
    /// The rule does not apply to this block.
    NotApplicable,
}

impl Decision {
    /// Returns `true` if the decision edits the block text.
    pub fn edits_text(&self) -> bool {
        matches!(
            self,
            Decision::Added | Decision::Replaced | Decision::Repositioned | Decision::Removed
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Added => "added",
            Decision::Replaced => "replaced",
            Decision::Repositioned => "repositioned",
            Decision::Removed => "removed",
            Decision::Unchanged => "unchanged",
            Decision::NotApplicable => "not-applicable",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reconciliation decision, with enough context to report it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagEvent {
    pub block_id: String,
    pub classification: Classification,
    pub element_name: String,
    pub tag_id: String,
    pub decision: Decision,
    /// Tag text before the decision, when a tag existed.
    pub before: Option<String>,
    /// Tag text after the decision, when a tag remains.
    pub after: Option<String>,
}

impl TagEvent {
    pub(crate) fn new(block: &Block, rule: &TagRule, decision: Decision) -> Self {
        Self {
            block_id: block.id.clone(),
            classification: block.classification,
            element_name: block.element_name.clone(),
            tag_id: rule.tag_id.clone(),
            decision,
            before: None,
            after: None,
        }
    }

    pub(crate) fn before(mut self, text: impl Into<String>) -> Self {
        self.before = Some(text.into());
        self
    }

    pub(crate) fn after(mut self, text: impl Into<String>) -> Self {
        self.after = Some(text.into());
        self
    }
}

/// Receives every decision the engine makes.
pub trait EventSink {
    fn record(&mut self, event: &TagEvent);
}

/// Emits decisions as structured `tracing` events.
///
/// Edits are logged at `info`, everything else at `debug`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&mut self, event: &TagEvent) {
        if event.decision.edits_text() {
            tracing::info!(
                block = %event.block_id,
                classification = %event.classification,
                element = %event.element_name,
                tag = %event.tag_id,
                before = ?event.before,
                after = ?event.after,
                "tag {}",
                event.decision
            );
        } else {
            tracing::debug!(
                block = %event.block_id,
                tag = %event.tag_id,
                decision = %event.decision,
                "tag left alone"
            );
        }
    }
}

/// Keeps every event in memory.
#[derive(Debug, Default, Clone)]
pub struct CollectingSink {
    events: Vec<TagEvent>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[TagEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<TagEvent> {
        self.events
    }

    /// Number of recorded events with the given decision.
    pub fn count(&self, decision: Decision) -> usize {
        self.events.iter().filter(|e| e.decision == decision).count()
    }
}

impl EventSink for CollectingSink {
    fn record(&mut self, event: &TagEvent) {
        self.events.push(event.clone());
    }
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&mut self, _event: &TagEvent) {}
}

impl<A: EventSink, B: EventSink> EventSink for (A, B) {
    fn record(&mut self, event: &TagEvent) {
        self.0.record(event);
        self.1.record(event);
    }
}
