//! Canonical Javadoc tag order and per-element tag permissions.
//!
//! Tags not listed here are custom tags: they have no rank and are permitted
//! on every element.

use crate::block::Classification;

/// Rank of each standard tag in the recommended Javadoc order.
const CANONICAL_ORDER: &[(&str, u8)] = &[
    ("author", 0),
    ("version", 1),
    ("param", 2),
    ("return", 3),
    ("throws", 4),
    ("exception", 4),
    ("see", 5),
    ("since", 6),
    ("serial", 7),
    ("serialField", 7),
    ("serialData", 7),
    ("deprecated", 8),
];

const TYPE_TAGS: &[&str] = &[
    "author",
    "version",
    "param",
    "see",
    "since",
    "serial",
    "deprecated",
];

const FIELD_TAGS: &[&str] = &["see", "since", "serial", "serialField", "deprecated"];

const METHOD_TAGS: &[&str] = &[
    "param",
    "return",
    "throws",
    "exception",
    "see",
    "since",
    "serialData",
    "deprecated",
];

const CONSTRUCTOR_TAGS: &[&str] = &[
    "param",
    "throws",
    "exception",
    "see",
    "since",
    "serialData",
    "deprecated",
];

/// Position of `tag_id` in the canonical order, or `None` for custom tags.
pub fn canonical_rank(tag_id: &str) -> Option<u8> {
    CANONICAL_ORDER
        .iter()
        .find(|(id, _)| *id == tag_id)
        .map(|(_, rank)| *rank)
}

/// Returns `true` if `tag_id` may appear on an element of `classification`.
pub fn is_permitted(classification: Classification, tag_id: &str) -> bool {
    if canonical_rank(tag_id).is_none() {
        return true;
    }

    let allowed = match classification {
        Classification::Class
        | Classification::Interface
        | Classification::Enum
        | Classification::Record
        | Classification::Annotation => TYPE_TAGS,
        Classification::Field | Classification::EnumConstant => FIELD_TAGS,
        Classification::Method => METHOD_TAGS,
        Classification::Constructor => CONSTRUCTOR_TAGS,
    };
    allowed.contains(&tag_id)
}
