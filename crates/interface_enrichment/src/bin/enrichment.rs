//! Death Record Enrichment - One-shot Binary
//!
//! Reads a single death record as JSON (bare, or wrapped as
//! `{"correlationId": ..., "record": ...}`), enriches it into a death
//! notification, and writes the notification followed by its audit record
//! to stdout as two JSON lines. Logs go to stderr.
//!
//! # Usage
//!
//! ```bash
//! # Read the record from a file
//! cargo run --bin death-enrichment -- record.json
//!
//! # Read the record from stdin, minimising to a field allow-list
//! ENRICHMENT_MINIMISE=true ENRICHMENT_ENRICHMENT_FIELDS=NAME,SEX \
//!     cargo run --bin death-enrichment < record.json
//! ```
//!
//! # Environment Variables
//!
//! * `ENRICHMENT_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `ENRICHMENT_LOG_FORMAT` - Log format: pretty, json (default: pretty)
//! * `ENRICHMENT_ENRICHMENT_FIELDS` - Comma-separated enrichment field allow-list
//! * `ENRICHMENT_MINIMISE` - Minimise notifications before output (default: false)

use std::io::{self, Read, Write};

use anyhow::Context;
use interface_enrichment::{EnrichmentConfig, EnrichmentHandler, LogFormat};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = load_config()?;
    init_tracing(&config.log_level, config.log_format);

    tracing::info!(
        minimise = config.minimise,
        "Starting death record enrichment"
    );

    let handler = EnrichmentHandler::from_config(&config)?;
    let body = read_input(std::env::args().nth(1))?;

    let output = handler.handle(&body)?;

    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, &output.notification)?;
    writeln!(stdout)?;
    serde_json::to_writer(&mut stdout, &output.audit)?;
    writeln!(stdout)?;

    tracing::info!(
        txn = %output.audit.txn,
        correlation_id = output.correlation_id.as_deref(),
        "Enrichment complete"
    );
    Ok(())
}

/// Loads configuration from the environment
///
/// Unset variables take their defaults. A variable that is set to an
/// unreadable value stops the run rather than silently reverting every
/// setting to its default.
fn load_config() -> anyhow::Result<EnrichmentConfig> {
    EnrichmentConfig::from_env().context("Invalid ENRICHMENT_* configuration")
}

/// Reads the record body from the given path, or stdin when absent
fn read_input(path: Option<String>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read record from {path}")),
        None => {
            let mut body = String::new();
            io::stdin()
                .read_to_string(&mut body)
                .context("Failed to read record from stdin")?;
            Ok(body)
        }
    }
}

/// Initializes the tracing subscriber, writing to stderr
fn init_tracing(log_level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(io::stderr),
            )
            .init(),
        LogFormat::Pretty => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(io::stderr),
            )
            .init(),
    }
}
