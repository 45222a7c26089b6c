//! Core Kernel - Foundational types for civil-registration event mapping
//!
//! This crate provides the building blocks used by the mapping domain:
//! - Partial dates known at year, year-month, or full-date granularity
//! - Strongly-typed envelope identifiers
//! - Clock and identifier-generator ports for injecting ambient dependencies

pub mod temporal;
pub mod identifiers;
pub mod ports;

pub use temporal::{
    PartialDate, DateWithDescription, StructuredDateTime, TemporalError,
    resolve_partial_date, utc_epoch_seconds,
};
pub use identifiers::{TokenId, TransactionId};
pub use ports::{Clock, IdGenerator, SystemClock, FixedClock, RandomIdGenerator, SequenceIdGenerator};
