//! Per-block reconciliation state.

use jdts_model::{Block, CommentLayout, ExistingTag, TagConfigSet, TagRule};

use crate::event::Decision;
use crate::{Error, Result};

/// Final state of a drained session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockOutcome {
    pub rewritten_text: String,
    /// Content replacements made in this block.
    pub replace_count: usize,
    /// One decision per rule, in rule order.
    pub decisions: Vec<Decision>,
}

impl BlockOutcome {
    /// Returns `true` if any decision edited the comment.
    pub fn changed(&self) -> bool {
        self.decisions.iter().any(Decision::edits_text)
    }
}

/// Mutable state for reconciling one block against the rule list.
///
/// The session owns its working copy of the comment and holds no references
/// into the config or the block; both are passed to the calls that need
/// them.
#[derive(Debug, Clone)]
pub struct ReconciliationSession {
    block_id: String,
    rule_count: usize,
    rule_index: usize,
    current_tag: Option<usize>,
    claimed: Vec<bool>,
    working_text: String,
    replace_count: usize,
    beginning_anchor: Option<String>,
    decisions: Vec<Decision>,
    drained: bool,
}

impl ReconciliationSession {
    /// Start a session positioned at the first rule.
    ///
    /// Fails if `config` has no rules or the block's comment is not a
    /// `/** ... */` comment.
    pub fn initialize(config: &TagConfigSet, block: &Block) -> Result<Self> {
        if config.is_empty() {
            return Err(Error::EmptyConfig);
        }
        let comment = &block.doc_comment;
        if CommentLayout::parse(&comment.raw_text, &comment.indent).is_none() {
            return Err(Error::MalformedComment {
                block_id: block.id.clone(),
            });
        }

        let mut session = Self {
            block_id: block.id.clone(),
            rule_count: config.len(),
            rule_index: 0,
            current_tag: None,
            claimed: vec![false; comment.existing_tags.len()],
            working_text: comment.raw_text.clone(),
            replace_count: 0,
            beginning_anchor: None,
            decisions: Vec::with_capacity(config.len()),
            drained: false,
        };
        session.position(config, block);
        Ok(session)
    }

    pub fn rule_index(&self) -> usize {
        self.rule_index
    }

    /// Index into the block's existing tags matched by the current rule.
    pub fn current_tag(&self) -> Option<usize> {
        self.current_tag
    }

    pub fn working_text(&self) -> &str {
        &self.working_text
    }

    pub fn replace_count(&self) -> usize {
        self.replace_count
    }

    /// Move to the next rule. Returns `false` once every rule has been seen.
    pub fn advance_to_next_rule(&mut self, config: &TagConfigSet, block: &Block) -> bool {
        if self.rule_index + 1 >= self.rule_count {
            self.drained = true;
            self.current_tag = None;
            return false;
        }
        self.rule_index += 1;
        self.position(config, block);
        true
    }

    /// The rewritten comment, available once every rule has been seen.
    pub fn rewritten_block_text(&self) -> Option<&str> {
        self.drained.then_some(self.working_text.as_str())
    }

    /// Consume a drained session.
    pub fn finish(self) -> Result<BlockOutcome> {
        if !self.drained {
            return Err(Error::SessionNotDrained {
                remaining: self.rule_count - self.rule_index,
                block_id: self.block_id,
            });
        }
        Ok(BlockOutcome {
            rewritten_text: self.working_text,
            replace_count: self.replace_count,
            decisions: self.decisions,
        })
    }

    pub(crate) fn set_working_text(&mut self, text: String) {
        self.working_text = text;
    }

    pub(crate) fn count_replacement(&mut self) {
        self.replace_count += 1;
    }

    pub(crate) fn record(&mut self, decision: Decision) {
        self.decisions.push(decision);
    }

    pub(crate) fn beginning_anchor(&self) -> Option<&str> {
        self.beginning_anchor.as_deref()
    }

    pub(crate) fn set_beginning_anchor(&mut self, line: String) {
        self.beginning_anchor = Some(line);
    }

    /// Select and claim the existing tag for the current rule.
    fn position(&mut self, config: &TagConfigSet, block: &Block) {
        self.current_tag = None;
        let Some(rule) = config.get(self.rule_index) else {
            return;
        };
        let tags = &block.doc_comment.existing_tags;
        let wanted_value = rule.value.split_whitespace().next().unwrap_or_default();

        let claimed = &self.claimed;
        let candidates: Vec<(usize, &ExistingTag)> = tags
            .iter()
            .enumerate()
            .filter(|(i, tag)| claimed.get(*i) == Some(&false) && tag.tag_id == rule.tag_id)
            .collect();
        let later_rules = &config.rules()[self.rule_index + 1..];
        let selected = candidates
            .iter()
            .find(|(_, tag)| tag.value == wanted_value)
            .or_else(|| {
                candidates
                    .iter()
                    .find(|(_, tag)| !reserved_by(later_rules, tag))
            })
            .map(|(i, _)| *i);

        if let Some(index) = selected {
            if let Some(slot) = self.claimed.get_mut(index) {
                *slot = true;
            }
            self.current_tag = Some(index);
        }
    }
}

/// Returns `true` if a later rule names this tag's exact value.
fn reserved_by(rules: &[TagRule], tag: &ExistingTag) -> bool {
    rules.iter().any(|rule| {
        rule.tag_id == tag.tag_id
            && rule.value.split_whitespace().next().unwrap_or_default() == tag.value
    })
}
