//! Command implementations for jdts-cli

pub mod apply;
pub mod check;
pub mod init;
mod output;

pub use apply::run_apply;
pub use check::run_check;
pub use init::run_init;
