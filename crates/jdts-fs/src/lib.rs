//! Filesystem access for JDTS
//!
//! Finds candidate source files and provides atomic, locked write-back.

pub mod discovery;
pub mod error;
pub mod io;

pub use discovery::{DEFAULT_EXTENSIONS, discover_sources};
pub use error::{Error, Result};
pub use io::{read_text, write_atomic, write_text};
