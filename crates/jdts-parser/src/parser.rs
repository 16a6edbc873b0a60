//! Assemble a [`CodeModel`] from Java source text.

use jdts_model::{Block, CodeModel, CommentLayout, DocComment, ExistingTag};

use crate::declaration::{Declaration, classify_at, declared_type_names};
use crate::error::Result;
use crate::scanner::{CommentSpan, find_doc_comments};

/// Leading whitespace of the line containing `offset`.
fn indent_at(source: &str, offset: usize) -> String {
    let line_start = source[..offset].rfind('\n').map(|i| i + 1).unwrap_or(0);
    source[line_start..offset]
        .chars()
        .take_while(|c| c.is_whitespace())
        .collect()
}

/// Existing block tags of a raw doc comment, in order.
pub fn parse_tags(raw_text: &str, indent: &str) -> Vec<ExistingTag> {
    let Some(layout) = CommentLayout::parse(raw_text, indent) else {
        return Vec::new();
    };
    layout
        .tags()
        .iter()
        .filter_map(|span| ExistingTag::parse(layout.target_text(span)))
        .collect()
}

fn block_for(source: &str, span: &CommentSpan, declaration: Declaration) -> Block {
    let raw_text = &source[span.range.clone()];
    let indent = indent_at(source, span.range.start);
    let existing_tags = parse_tags(raw_text, &indent);

    Block {
        id: format!(
            "{}:{}@{}:{}",
            declaration.classification, declaration.name, span.line, span.column
        ),
        classification: declaration.classification,
        element_name: declaration.name,
        doc_comment: DocComment::new(raw_text, indent).with_tags(existing_tags),
    }
}

/// Parse Java source into a code model of its documented elements.
///
/// Doc comments that do not precede a recognizable declaration are left out
/// of the model.
///
/// # Example
/// ```
/// use jdts_parser::parse_source;
///
/// let source = "/**\n * A widget.\n * @since 1.0\n */\npublic class Widget {}\n";
/// let model = parse_source(source).unwrap();
/// let block = model.blocks().next().unwrap();
/// assert_eq!(block.element_name, "Widget");
/// assert_eq!(block.doc_comment.existing_tags[0].value, "1.0");
/// ```
pub fn parse_source(source: &str) -> Result<CodeModel> {
    let type_names = declared_type_names(source);
    let mut blocks = Vec::new();

    for span in find_doc_comments(source)? {
        match classify_at(source, span.range.end, &type_names)? {
            Some(declaration) => blocks.push(block_for(source, &span, declaration)),
            None => {
                tracing::debug!(line = span.line, "Doc comment documents no declaration, skipping");
            }
        }
    }

    Ok(CodeModel::new(source, blocks))
}
