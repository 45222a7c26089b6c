//! Death Record Enrichment Entry Point
//!
//! This crate hosts the outer shell around the mapping domain: it loads
//! configuration, decodes one inbound record, runs the enrichment service,
//! optionally minimises the result, and returns the notification together
//! with its audit record. Queue publishing and outbound HTTP are left to the
//! surrounding runtime.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_enrichment::{config::EnrichmentConfig, handler::EnrichmentHandler};
//!
//! let handler = EnrichmentHandler::from_config(&EnrichmentConfig::from_env()?)?;
//! let output = handler.handle(&body)?;
//! ```

pub mod config;
pub mod error;
pub mod handler;

pub use config::{EnrichmentConfig, LogFormat};
pub use error::HandlerError;
pub use handler::{EnrichmentHandler, EnrichmentOutput};
