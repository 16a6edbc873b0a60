//! Tag rule configuration for JDTS.
//!
//! Loads the `[[tags]]` rule list from `jdts.toml` (or JSON / YAML), validates
//! it, and hands back an immutable [`jdts_model::TagConfigSet`] shared by
//! every file in the run.

pub mod error;
pub mod loader;
pub mod schema;

pub use error::{Error, Result};
pub use loader::{CONFIG_FILE_NAMES, ConfigLoader, MAX_CONFIG_SIZE, STARTER_CONFIG, find_config};
pub use schema::{ConfigFile, JdtsConfig, SourceSettings};
