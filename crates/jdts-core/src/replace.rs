//! Applies reconciled comments back into the source text.

use std::ops::Range;

use jdts_model::{CodeModel, TagConfigSet};
use serde::Serialize;

use crate::event::{Decision, EventSink};
use crate::reconcile::reconcile_block;
use crate::{Error, Result};

/// Per-decision counters for one file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReplacementSummary {
    pub added: usize,
    pub replaced: usize,
    pub repositioned: usize,
    pub removed: usize,
    pub unchanged: usize,
    pub not_applicable: usize,
    /// Blocks whose comment was rewritten.
    pub blocks_rewritten: usize,
    /// Blocks whose comment text could not be located.
    pub blocks_skipped: usize,
}

impl ReplacementSummary {
    fn tally(&mut self, decision: Decision) {
        match decision {
            Decision::Added => self.added += 1,
            Decision::Replaced => self.replaced += 1,
            Decision::Repositioned => self.repositioned += 1,
            Decision::Removed => self.removed += 1,
            Decision::Unchanged => self.unchanged += 1,
            Decision::NotApplicable => self.not_applicable += 1,
        }
    }

    /// Number of decisions that edited text.
    pub fn edits(&self) -> usize {
        self.added + self.replaced + self.repositioned + self.removed
    }

    /// Fold another file's counters into this one.
    pub fn merge(&mut self, other: &ReplacementSummary) {
        self.added += other.added;
        self.replaced += other.replaced;
        self.repositioned += other.repositioned;
        self.removed += other.removed;
        self.unchanged += other.unchanged;
        self.not_applicable += other.not_applicable;
        self.blocks_rewritten += other.blocks_rewritten;
        self.blocks_skipped += other.blocks_skipped;
    }
}

/// Rewritten source for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementResult {
    pub rewritten_source: String,
    /// Content replacements across all blocks.
    pub total_replace_count: usize,
    pub summary: ReplacementSummary,
}

/// Reconcile every block in `model` and splice the results into its source.
///
/// Each block's raw comment is searched for from the start of the current
/// buffer. The first occurrence outside the spans already substituted is
/// used, so byte-identical comments are consumed in order. A block whose
/// comment cannot be found is skipped.
///
/// # Example
///
/// ```
/// use jdts_core::{replace, NullSink};
/// use jdts_model::{Block, Classification, CodeModel, DocComment, TagConfigSet, TagRule};
///
/// let source = "/** Greets. */\nclass Hello {}\n";
/// let block = Block {
///     id: "class:Hello@1:1".into(),
///     classification: Classification::Class,
///     element_name: "Hello".into(),
///     doc_comment: DocComment::new("/** Greets. */", ""),
/// };
/// let model = CodeModel::new(source, vec![block]);
/// let config = TagConfigSet::new(vec![TagRule::new("since").with_value("1.0")]);
///
/// let result = replace(&config, &model, &mut NullSink).unwrap();
/// assert_eq!(
///     result.rewritten_source,
///     "/**\n * Greets.\n *\n * @since 1.0\n */\nclass Hello {}\n"
/// );
/// ```
pub fn replace(
    config: &TagConfigSet,
    model: &CodeModel,
    sink: &mut dyn EventSink,
) -> Result<ReplacementResult> {
    if config.is_empty() {
        return Err(Error::EmptyConfig);
    }

    let mut working = model.original_source().to_string();
    let mut written: Vec<Range<usize>> = Vec::new();
    let mut total_replace_count = 0;
    let mut summary = ReplacementSummary::default();

    for block in model.blocks() {
        let raw = block.doc_comment.raw_text.as_str();
        let Some(start) = find_unwritten(&working, raw, &written) else {
            tracing::warn!(block = %block.id, "Doc comment not found in source, skipping");
            summary.blocks_skipped += 1;
            continue;
        };

        let outcome = reconcile_block(config, block, sink)?;
        for decision in &outcome.decisions {
            summary.tally(*decision);
        }
        if outcome.rewritten_text != raw {
            summary.blocks_rewritten += 1;
        }
        total_replace_count += outcome.replace_count;

        let end = start + raw.len();
        working.replace_range(start..end, &outcome.rewritten_text);
        let new_end = start + outcome.rewritten_text.len();
        for span in written.iter_mut().filter(|span| span.start >= end) {
            *span = span.start + new_end - end..span.end + new_end - end;
        }
        written.push(start..new_end);
    }

    tracing::debug!(
        blocks = model.len(),
        rewritten = summary.blocks_rewritten,
        replacements = total_replace_count,
        "Replacement finished"
    );

    Ok(ReplacementResult {
        rewritten_source: working,
        total_replace_count,
        summary,
    })
}

/// First occurrence of `raw` in `working` that does not overlap a written span.
fn find_unwritten(working: &str, raw: &str, written: &[Range<usize>]) -> Option<usize> {
    working
        .match_indices(raw)
        .map(|(start, _)| start)
        .find(|start| {
            let end = start + raw.len();
            written
                .iter()
                .all(|span| end <= span.start || span.end <= *start)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{CollectingSink, NullSink};
    use jdts_model::{Block, Classification, DocComment, TagRule};
    use pretty_assertions::assert_eq;

    fn block(name: &str, raw: &str) -> Block {
        Block {
            id: format!("field:{name}"),
            classification: Classification::Field,
            element_name: name.to_string(),
            doc_comment: DocComment::new(raw, ""),
        }
    }

    fn since(value: &str) -> TagConfigSet {
        TagConfigSet::new(vec![TagRule::new("since").with_value(value)])
    }

    #[test]
    fn test_empty_config_fails_before_any_work() {
        let model = CodeModel::new("/** a */ int a;", vec![block("a", "/** a */")]);
        let err = replace(&TagConfigSet::default(), &model, &mut NullSink).unwrap_err();
        assert!(matches!(err, Error::EmptyConfig));
    }

    #[test]
    fn test_model_without_blocks_returns_source() {
        let model = CodeModel::new("class A {}", Vec::new());
        let result = replace(&since("1.0"), &model, &mut NullSink).unwrap();
        assert_eq!(result.rewritten_source, "class A {}");
        assert_eq!(result.total_replace_count, 0);
        assert_eq!(result.summary, ReplacementSummary::default());
    }

    #[test]
    fn test_identical_comments_consumed_in_order() {
        let source = "/** Id. */\nint a;\n/** Id. */\nint b;\n";
        let model = CodeModel::new(
            source,
            vec![block("a", "/** Id. */"), block("b", "/** Id. */")],
        );
        let mut sink = CollectingSink::new();
        let result = replace(&since("1.0"), &model, &mut sink).unwrap();

        let rewritten = "/**\n * Id.\n *\n * @since 1.0\n */";
        assert_eq!(
            result.rewritten_source,
            format!("{rewritten}\nint a;\n{rewritten}\nint b;\n")
        );
        assert_eq!(result.summary.added, 2);
        assert_eq!(result.summary.blocks_rewritten, 2);
        assert_eq!(sink.events()[1].element_name, "b");
    }

    #[test]
    fn test_blocks_out_of_source_order_are_all_rewritten() {
        let source = "/** A. */\nint a;\n/** B. */\nint b;\n";
        let model = CodeModel::new(
            source,
            vec![block("b", "/** B. */"), block("a", "/** A. */")],
        );
        let result = replace(&since("1.0"), &model, &mut NullSink).unwrap();

        assert_eq!(result.summary.blocks_skipped, 0);
        assert_eq!(result.summary.added, 2);
        assert_eq!(
            result.rewritten_source,
            "/**\n * A.\n *\n * @since 1.0\n */\nint a;\n/**\n * B.\n *\n * @since 1.0\n */\nint b;\n"
        );
    }

    #[test]
    fn test_identical_comments_out_of_order_still_consume_each_span_once() {
        let source = "/** Id. */\nint a;\n/** Other. */\nint c;\n/** Id. */\nint b;\n";
        let model = CodeModel::new(
            source,
            vec![
                block("c", "/** Other. */"),
                block("a", "/** Id. */"),
                block("b", "/** Id. */"),
            ],
        );
        let result = replace(&since("1.0"), &model, &mut NullSink).unwrap();

        assert_eq!(result.summary.blocks_skipped, 0);
        assert_eq!(result.rewritten_source.matches("@since 1.0").count(), 3);
        assert!(!result.rewritten_source.contains("/** Id. */"));
    }

    #[test]
    fn test_missing_comment_is_skipped() {
        let source = "/** A. */\nint a;\n";
        let model = CodeModel::new(
            source,
            vec![block("gone", "/** Gone. */"), block("a", "/** A. */")],
        );
        let result = replace(&since("1.0"), &model, &mut NullSink).unwrap();

        assert_eq!(result.summary.blocks_skipped, 1);
        assert_eq!(result.summary.added, 1);
        assert!(result.rewritten_source.contains("@since 1.0"));
    }

    #[test]
    fn test_summary_merge() {
        let mut total = ReplacementSummary {
            added: 1,
            replaced: 2,
            ..Default::default()
        };
        total.merge(&ReplacementSummary {
            added: 3,
            removed: 1,
            blocks_skipped: 1,
            ..Default::default()
        });
        assert_eq!(total.added, 4);
        assert_eq!(total.edits(), 7);
        assert_eq!(total.blocks_skipped, 1);
    }
}
