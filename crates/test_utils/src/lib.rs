//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! death notification test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built records, timestamps and deterministic collaborators
//! - `builders`: Builder pattern for raw death records
//! - `assertions`: Custom assertion helpers for notifications
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
