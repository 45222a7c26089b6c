//! Handler error handling

use thiserror::Error;

use domain_death::{EnrichmentError, UnknownEnrichmentField};

/// Errors surfaced by the enrichment handler
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error(transparent)]
    Enrichment(#[from] EnrichmentError),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<UnknownEnrichmentField> for HandlerError {
    fn from(err: UnknownEnrichmentField) -> Self {
        HandlerError::Configuration(err.to_string())
    }
}

impl From<config::ConfigError> for HandlerError {
    fn from(err: config::ConfigError) -> Self {
        HandlerError::Configuration(err.to_string())
    }
}
