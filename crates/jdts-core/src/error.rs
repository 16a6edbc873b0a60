//! Error types for jdts-core

/// Result type for jdts-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the reconciliation engine.
///
/// All of them are initialization failures: the engine either rejects its
/// inputs up front or runs to completion.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Cannot reconcile with an empty tag configuration")]
    EmptyConfig,

    #[error("Block {block_id} does not carry a well-formed doc comment")]
    MalformedComment { block_id: String },

    #[error("Reconciliation of block {block_id} finished with {remaining} rule(s) pending")]
    SessionNotDrained { block_id: String, remaining: usize },
}
