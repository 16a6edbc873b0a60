//! Ready-made tag rule sets.

use jdts_model::{Classification, InsertPosition, Location, Overwrite, TagConfigSet, TagRule};

/// Type classifications, for rules that only apply to types.
pub const TYPES: [Classification; 5] = [
    Classification::Class,
    Classification::Interface,
    Classification::Enum,
    Classification::Record,
    Classification::Annotation,
];

/// A single `@since` rule with default policies.
pub fn since(value: &str) -> TagConfigSet {
    TagConfigSet::new(vec![TagRule::new("since").with_value(value)])
}

/// `@author` on types, `@since` everywhere in canonical order, and removal
/// of `@return` wherever it is not allowed.
pub fn house_style() -> TagConfigSet {
    TagConfigSet::new(vec![
        TagRule::new("author")
            .with_value("Jane Doe")
            .with_position(InsertPosition::Beginning)
            .with_overwrite(Overwrite::Always)
            .with_targets(TYPES)
            .with_location(Location::Compliant {
                remove_if_misplaced: false,
            }),
        TagRule::new("since")
            .with_value("1.0")
            .with_position(InsertPosition::Canonical)
            .with_location(Location::Compliant {
                remove_if_misplaced: false,
            }),
        TagRule::new("return")
            .without_adding()
            .with_overwrite(Overwrite::Never)
            .with_location(Location::Compliant {
                remove_if_misplaced: true,
            }),
    ])
}
