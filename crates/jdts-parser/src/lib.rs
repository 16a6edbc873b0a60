//! Java doc-comment parsing for JDTS.
//!
//! Turns Java source text into a [`jdts_model::CodeModel`]: every `/** ... */`
//! comment that precedes a declaration becomes a block carrying the
//! declaration's classification and name, the verbatim comment text, and the
//! block tags found in it.
//!
//! The parser is lexical. It skips string literals, text blocks, and ordinary
//! comments, and classifies declarations from their header tokens; it does
//! not validate Java syntax.

pub mod declaration;
pub mod error;
pub mod parser;
pub mod scanner;

pub use declaration::{Declaration, classify_at, declared_type_names};
pub use error::{Error, Result};
pub use parser::{parse_source, parse_tags};
pub use scanner::{CommentSpan, find_doc_comments};
