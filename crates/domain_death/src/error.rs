//! Death registration domain errors
//!
//! Every error is terminal for the record being mapped: the mapper either
//! returns a complete notification or one of these.

use thiserror::Error;

use core_kernel::TemporalError;

/// Errors that can occur while mapping a registry record
#[derive(Debug, Error)]
pub enum EnrichmentError {
    /// A date value could not be parsed or resolved
    #[error("Malformed temporal value: {0}")]
    MalformedTemporalValue(String),

    /// Neither a lock timestamp nor an update timestamp was supplied
    #[error("Missing required timestamp: record has neither a lock nor an update timestamp")]
    MissingRequiredTimestamp,

    /// The update reason code is not in the reason table
    #[error("Unknown update reason code: {0}")]
    UnknownUpdateReasonCode(String),

    /// The sex code is not in the sex table
    #[error("Unknown sex code: {0}")]
    UnknownSexCode(String),

    /// The upstream payload could not be decoded
    #[error("Mapping failure: {0}")]
    MappingFailure(#[from] serde_json::Error),
}

impl EnrichmentError {
    /// Creates an unknown update reason error
    pub fn unknown_update_reason(code: impl Into<String>) -> Self {
        EnrichmentError::UnknownUpdateReasonCode(code.into())
    }

    /// Creates an unknown sex code error
    pub fn unknown_sex(code: impl Into<String>) -> Self {
        EnrichmentError::UnknownSexCode(code.into())
    }

    /// Returns true if the record decoded but its content could not be mapped
    pub fn is_data_error(&self) -> bool {
        !matches!(self, EnrichmentError::MappingFailure(_))
    }
}

impl From<TemporalError> for EnrichmentError {
    fn from(err: TemporalError) -> Self {
        EnrichmentError::MalformedTemporalValue(err.to_string())
    }
}
