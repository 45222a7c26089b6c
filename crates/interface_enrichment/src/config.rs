//! Enrichment configuration

use serde::Deserialize;

use domain_death::{parse_enrichment_fields, EnrichmentField, UnknownEnrichmentField};

/// Prefix of every configuration environment variable
pub const ENV_PREFIX: &str = "ENRICHMENT";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Enrichment configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EnrichmentConfig {
    /// Log level
    pub log_level: String,
    /// Log output format
    pub log_format: LogFormat,
    /// Comma-separated allow-list of enrichment fields
    pub enrichment_fields: String,
    /// Whether to minimise notifications before emitting them
    pub minimise: bool,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            enrichment_fields: String::new(),
            minimise: false,
        }
    }
}

impl EnrichmentConfig {
    /// Loads configuration from `ENRICHMENT_`-prefixed environment variables
    ///
    /// Variables that are not set keep their default values; a variable that
    /// is set but cannot be read as its field's type is an error.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_environment(config::Environment::with_prefix(ENV_PREFIX))
    }

    /// Loads configuration from the given environment source
    pub fn from_environment(environment: config::Environment) -> Result<Self, config::ConfigError> {
        let defaults = Self::default();
        config::Config::builder()
            .set_default("log_level", defaults.log_level)?
            .set_default("log_format", "pretty")?
            .set_default("enrichment_fields", defaults.enrichment_fields)?
            .set_default("minimise", defaults.minimise)?
            .add_source(environment.try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Parses the configured allow-list
    pub fn fields(&self) -> Result<Vec<EnrichmentField>, UnknownEnrichmentField> {
        parse_enrichment_fields(&self.enrichment_fields)
    }
}
