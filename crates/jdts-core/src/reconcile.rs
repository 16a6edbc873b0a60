//! Rule-by-rule reconciliation of one block.

use jdts_model::{Block, CommentLayout, ExistingTag, InsertPosition, TagConfigSet, TagRule};

use crate::event::{Decision, EventSink, TagEvent};
use crate::session::{BlockOutcome, ReconciliationSession};
use crate::Result;

/// Reconcile `block` against every rule in `config`.
pub fn reconcile_block(
    config: &TagConfigSet,
    block: &Block,
    sink: &mut dyn EventSink,
) -> Result<BlockOutcome> {
    let mut session = ReconciliationSession::initialize(config, block)?;
    loop {
        if let Some(rule) = config.get(session.rule_index()) {
            let event = evaluate_rule(rule, block, &mut session);
            session.record(event.decision);
            sink.record(&event);
        }
        if !session.advance_to_next_rule(config, block) {
            break;
        }
    }
    session.finish()
}

/// Decide what `rule` does to `block` and apply it to the session's working text.
pub fn evaluate_rule(
    rule: &TagRule,
    block: &Block,
    session: &mut ReconciliationSession,
) -> TagEvent {
    let classification = block.classification;
    let allowed =
        rule.targets_classification(classification) && classification.permits(&rule.tag_id);
    let existing = session
        .current_tag()
        .and_then(|index| block.doc_comment.existing_tags.get(index));

    match existing {
        Some(tag) => evaluate_existing(rule, block, tag, allowed, session),
        None => evaluate_missing(rule, block, allowed, session),
    }
}

fn working_layout(block: &Block, session: &ReconciliationSession) -> Option<CommentLayout> {
    CommentLayout::parse(session.working_text(), &block.doc_comment.indent)
}

fn evaluate_existing(
    rule: &TagRule,
    block: &Block,
    tag: &ExistingTag,
    allowed: bool,
    session: &mut ReconciliationSession,
) -> TagEvent {
    let event = |decision| TagEvent::new(block, rule, decision).before(tag.target_text.as_str());

    let Some(mut layout) = working_layout(block, session) else {
        return event(Decision::Unchanged).after(tag.target_text.as_str());
    };
    let Some(span) = layout.find_tag(&tag.target_text) else {
        tracing::debug!(block = %block.id, tag = %tag.target_text, "Tag no longer in working text");
        return event(Decision::Unchanged);
    };

    if !allowed && rule.location.removes_disallowed() {
        layout.remove(&span);
        session.set_working_text(layout.render());
        return event(Decision::Removed);
    }

    let existing_content = tag.content();
    if !rule.overwrite.permits(&existing_content) {
        return event(Decision::Unchanged).after(tag.target_text.as_str());
    }

    if rule.location.requires_canonical_position()
        && layout.is_misplaced(&span)
        && layout.move_to_canonical(&span)
    {
        session.set_working_text(layout.render());
        return event(Decision::Repositioned).after(tag.target_text.as_str());
    }

    if existing_content != rule.content() {
        let rendered = rule.render();
        layout.replace(&span, &rendered);
        session.set_working_text(layout.render());
        session.count_replacement();
        return event(Decision::Replaced).after(rendered);
    }

    event(Decision::Unchanged).after(tag.target_text.as_str())
}

fn evaluate_missing(
    rule: &TagRule,
    block: &Block,
    allowed: bool,
    session: &mut ReconciliationSession,
) -> TagEvent {
    if !allowed || !rule.add_missing {
        return TagEvent::new(block, rule, Decision::NotApplicable);
    }
    let Some(mut layout) = working_layout(block, session) else {
        return TagEvent::new(block, rule, Decision::NotApplicable);
    };

    let rendered = rule.render();
    let line = layout.tag_line(&rendered);
    let mut at = match rule.position {
        InsertPosition::Beginning => session
            .beginning_anchor()
            .and_then(|anchor| {
                layout
                    .tags()
                    .into_iter()
                    .find(|span| layout.body()[span.lines.start] == anchor)
                    .map(|span| span.lines.end)
            })
            .unwrap_or_else(|| layout.beginning_anchor()),
        InsertPosition::End => layout.end_anchor(),
        InsertPosition::Canonical => layout.canonical_anchor(&rule.tag_id),
    };
    if rule.location.requires_canonical_position() && !layout.is_ordered_at(at, &rule.tag_id) {
        at = layout.canonical_anchor(&rule.tag_id);
    }
    layout.insert(at, vec![line.clone()]);
    session.set_working_text(layout.render());
    if rule.position == InsertPosition::Beginning {
        session.set_beginning_anchor(line);
    }

    TagEvent::new(block, rule, Decision::Added).after(rendered)
}
