//! Parsed view of a source file: blocks, their doc comments, and existing tags.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::layout::normalize_tag_text;
use crate::order;

/// Kind of source element a doc comment is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Classification {
    Class,
    Interface,
    Enum,
    Record,
    Annotation,
    EnumConstant,
    Field,
    Method,
    Constructor,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Class => "class",
            Classification::Interface => "interface",
            Classification::Enum => "enum",
            Classification::Record => "record",
            Classification::Annotation => "annotation",
            Classification::EnumConstant => "enum-constant",
            Classification::Field => "field",
            Classification::Method => "method",
            Classification::Constructor => "constructor",
        }
    }

    /// Class, interface, enum, record, or annotation type.
    pub fn is_type(&self) -> bool {
        matches!(
            self,
            Classification::Class
                | Classification::Interface
                | Classification::Enum
                | Classification::Record
                | Classification::Annotation
        )
    }

    /// Returns `true` if a tag named `tag_id` may appear on this kind of element.
    pub fn permits(&self, tag_id: &str) -> bool {
        order::is_permitted(*self, tag_id)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tag already present in a doc comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExistingTag {
    /// Verbatim text from the `@` through the tag's last non-blank line.
    pub target_text: String,
    pub tag_id: String,
    /// First whitespace-delimited token after the tag name.
    pub value: String,
    /// Remaining content, whitespace-collapsed.
    pub description: String,
}

impl ExistingTag {
    /// Build a tag from its verbatim comment text.
    ///
    /// Returns `None` if the text does not start with `@name`.
    pub fn parse(target_text: impl Into<String>) -> Option<Self> {
        let target_text = target_text.into();
        let normalized = normalize_tag_text(&target_text);
        let rest = normalized.strip_prefix('@')?;

        let mut parts = rest.splitn(2, ' ');
        let tag_id = parts.next().filter(|id| !id.is_empty())?.to_string();
        let content = parts.next().unwrap_or_default();
        let mut content_parts = content.splitn(2, ' ');
        let value = content_parts.next().unwrap_or_default().to_string();
        let description = content_parts.next().unwrap_or_default().to_string();

        Some(Self {
            target_text,
            tag_id,
            value,
            description,
        })
    }

    /// Whitespace-collapsed `value description`.
    pub fn content(&self) -> String {
        if self.description.is_empty() {
            self.value.clone()
        } else {
            format!("{} {}", self.value, self.description)
        }
    }
}

/// A documentation comment and the tags parsed out of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocComment {
    /// Verbatim comment text from `/**` through `*/`.
    pub raw_text: String,
    /// Leading whitespace of the line the comment opens on.
    #[serde(default)]
    pub indent: String,
    pub existing_tags: Vec<ExistingTag>,
}

impl DocComment {
    pub fn new(raw_text: impl Into<String>, indent: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
            indent: indent.into(),
            existing_tags: Vec::new(),
        }
    }

    pub fn with_tags(mut self, tags: Vec<ExistingTag>) -> Self {
        self.existing_tags = tags;
        self
    }
}

/// A documentable source element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Opaque identifier, unique within one file.
    pub id: String,
    pub classification: Classification,
    pub element_name: String,
    pub doc_comment: DocComment,
}

/// Parsed representation of one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeModel {
    original_source: String,
    blocks: Vec<Block>,
}

impl CodeModel {
    pub fn new(original_source: impl Into<String>, blocks: Vec<Block>) -> Self {
        Self {
            original_source: original_source.into(),
            blocks,
        }
    }

    pub fn original_source(&self) -> &str {
        &self.original_source
    }

    /// Blocks in source order.
    pub fn blocks(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("@since 1.0", "since", "1.0", "")]
    #[case("@author Jane Doe", "author", "Jane", "Doe")]
    #[case("@deprecated", "deprecated", "", "")]
    #[case(
        "@param count the number\n     *        of items",
        "param",
        "count",
        "the number of items"
    )]
    fn test_existing_tag_parse(
        #[case] text: &str,
        #[case] tag_id: &str,
        #[case] value: &str,
        #[case] description: &str,
    ) {
        let tag = ExistingTag::parse(text).unwrap();
        assert_eq!(tag.target_text, text);
        assert_eq!(tag.tag_id, tag_id);
        assert_eq!(tag.value, value);
        assert_eq!(tag.description, description);
    }

    #[test]
    fn test_existing_tag_parse_rejects_plain_text() {
        assert!(ExistingTag::parse("not a tag").is_none());
        assert!(ExistingTag::parse("@ lonely").is_none());
    }

    #[test]
    fn test_existing_tag_content() {
        let tag = ExistingTag::parse("@author Jane   Doe").unwrap();
        assert_eq!(tag.content(), "Jane Doe");
    }

    #[test]
    fn test_classification_serde_names() {
        let json = serde_json::to_string(&Classification::EnumConstant).unwrap();
        assert_eq!(json, "\"enum-constant\"");
        let parsed: Classification = serde_json::from_str("\"constructor\"").unwrap();
        assert_eq!(parsed, Classification::Constructor);
    }

    #[test]
    fn test_code_model_keeps_block_order() {
        let block = |id: &str| Block {
            id: id.to_string(),
            classification: Classification::Method,
            element_name: id.to_string(),
            doc_comment: DocComment::new("/** x */", ""),
        };
        let model = CodeModel::new("source", vec![block("a"), block("b")]);
        let ids: Vec<_> = model.blocks().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(model.original_source(), "source");
        assert_eq!(model.len(), 2);
    }
}
