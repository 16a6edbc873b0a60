//! Tag reconciliation engine for JDTS.
//!
//! Walks each documented block of a parsed source file, decides per configured
//! rule whether a tag is added, replaced, repositioned, removed, or left alone,
//! and splices the rewritten comments back into the source text.
//!
//! The engine does no I/O. Every decision is reported to an [`EventSink`].

pub mod error;
pub mod event;
pub mod reconcile;
pub mod replace;
pub mod session;

pub use error::{Error, Result};
pub use event::{CollectingSink, Decision, EventSink, NullSink, TagEvent, TracingSink};
pub use reconcile::{evaluate_rule, reconcile_block};
pub use replace::{ReplacementResult, ReplacementSummary, replace};
pub use session::{BlockOutcome, ReconciliationSession};
