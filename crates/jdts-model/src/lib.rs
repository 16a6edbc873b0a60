//! Data model for JDTS.
//!
//! This crate holds the types shared by every other JDTS crate:
//!
//! - [`TagRule`] and [`TagConfigSet`]: the configured tag policies, built once
//!   per run and shared read-only.
//! - [`Block`], [`DocComment`], [`ExistingTag`] and [`CodeModel`]: the parsed
//!   view of one source file's documentable elements.
//! - [`CommentLayout`]: a line-oriented view of a `/** ... */` comment used to
//!   locate, insert, move, and remove tag lines.
//! - [`order`]: the canonical Javadoc tag order and the tags each element
//!   kind may carry.

pub mod block;
pub mod layout;
pub mod order;
pub mod tag;

pub use block::{Block, Classification, CodeModel, DocComment, ExistingTag};
pub use layout::{CommentLayout, TagSpan, collapse_whitespace, normalize_tag_text};
pub use order::{canonical_rank, is_permitted};
pub use tag::{InsertPosition, Location, Overwrite, TagConfigSet, TagRule};
