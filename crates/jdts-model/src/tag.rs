//! Tag rules and the configured rule set.
//!
//! # Example TOML
//!
//! ```toml
//! [[tags]]
//! id = "since"
//! value = "2.0"
//! position = "canonical"
//! overwrite = "always"
//! targets = ["class", "interface"]
//! location = { mode = "compliant", remove_if_misplaced = true }
//! ```

use serde::{Deserialize, Serialize};

use crate::block::Classification;
use crate::layout::collapse_whitespace;

/// Where a missing tag is inserted in a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertPosition {
    /// Before the first existing tag.
    Beginning,
    /// After the last existing tag.
    #[default]
    End,
    /// At the tag's slot in the canonical Javadoc order.
    #[serde(alias = "specific")]
    Canonical,
}

/// Whether an existing tag's position is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Location {
    /// The tag must sit at its canonical position for the block's classification.
    Compliant {
        /// Remove the tag when it is not permitted on the block at all.
        #[serde(default)]
        remove_if_misplaced: bool,
    },
    /// Position is not checked.
    #[default]
    Force,
}

impl Location {
    pub fn removes_disallowed(&self) -> bool {
        matches!(
            self,
            Location::Compliant {
                remove_if_misplaced: true
            }
        )
    }

    pub fn requires_canonical_position(&self) -> bool {
        matches!(self, Location::Compliant { .. })
    }
}

/// Whether an existing tag may be rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Overwrite {
    #[default]
    Always,
    Never,
    /// Only when the existing tag carries no value or description.
    #[serde(alias = "only-if-blank")]
    IfBlank,
}

impl Overwrite {
    /// Returns `true` if a tag whose current content is `existing_content` may be touched.
    pub fn permits(&self, existing_content: &str) -> bool {
        match self {
            Overwrite::Always => true,
            Overwrite::Never => false,
            Overwrite::IfBlank => existing_content.trim().is_empty(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// A configured policy for one documentation tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRule {
    /// Tag identifier without the leading `@` (e.g. `since`)
    #[serde(rename = "id")]
    pub tag_id: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub position: InsertPosition,
    #[serde(default)]
    pub location: Location,
    #[serde(default)]
    pub overwrite: Overwrite,
    /// Element kinds the rule applies to; empty means all of them.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub targets: Vec<Classification>,
    /// Insert the tag when a block in scope does not carry it.
    #[serde(default = "default_true")]
    pub add_missing: bool,
}

impl TagRule {
    /// Create a rule for `tag_id` with an empty value and default policies.
    pub fn new(tag_id: impl Into<String>) -> Self {
        Self {
            tag_id: tag_id.into(),
            value: String::new(),
            description: String::new(),
            position: InsertPosition::default(),
            location: Location::default(),
            overwrite: Overwrite::default(),
            targets: Vec::new(),
            add_missing: true,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_position(mut self, position: InsertPosition) -> Self {
        self.position = position;
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn with_targets(mut self, targets: impl IntoIterator<Item = Classification>) -> Self {
        self.targets = targets.into_iter().collect();
        self
    }

    pub fn without_adding(mut self) -> Self {
        self.add_missing = false;
        self
    }

    /// Whitespace-collapsed `value description`, the form compared against existing tags.
    pub fn content(&self) -> String {
        collapse_whitespace(&format!("{} {}", self.value, self.description))
    }

    /// Tag text as it is written into a comment, e.g. `@since 2.0`.
    pub fn render(&self) -> String {
        let content = self.content();
        if content.is_empty() {
            format!("@{}", self.tag_id)
        } else {
            format!("@{} {}", self.tag_id, content)
        }
    }

    /// Returns `true` if the rule's target list covers `classification`.
    pub fn targets_classification(&self, classification: Classification) -> bool {
        self.targets.is_empty() || self.targets.contains(&classification)
    }
}

/// Ordered, immutable list of tag rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagConfigSet {
    rules: Vec<TagRule>,
}

impl TagConfigSet {
    pub fn new(rules: Vec<TagRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[TagRule] {
        &self.rules
    }

    pub fn get(&self, index: usize) -> Option<&TagRule> {
        self.rules.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TagRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<TagRule> for TagConfigSet {
    fn from_iter<I: IntoIterator<Item = TagRule>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TagConfigSet {
    type Item = &'a TagRule;
    type IntoIter = std::slice::Iter<'a, TagRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
