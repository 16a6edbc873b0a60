//! Shared test utilities for the JDTS workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`java`]: Java source fixtures covering every element classification
//! - [`project`]: [`project::TestProject`] builder for on-disk scenarios
//! - [`rules`]: ready-made tag rule sets

pub mod java;
pub mod project;
pub mod rules;
