//! One-shot record handler
//!
//! Decodes a single inbound body (a `{correlationId, record}` envelope or a
//! bare record), maps it, and packages the notification with its audit
//! record. The audit digest is always taken over the full
//! notification, before any minimisation.

use serde::Serialize;
use tracing::{error, info, instrument};

use core_kernel::{Clock, IdGenerator, RandomIdGenerator, SystemClock};
use domain_death::{
    DeathNotification, EnrichmentAudit, EnrichmentField, EnrichmentService, InboundRecord,
    PassthroughPolicy,
};

use crate::config::EnrichmentConfig;
use crate::error::HandlerError;

/// Result of handling one record
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
    pub notification: DeathNotification,
    pub audit: EnrichmentAudit,
}

/// Handler wiring the enrichment service to its configuration
pub struct EnrichmentHandler<C, I> {
    service: EnrichmentService<C, I>,
    minimise_to: Option<Vec<EnrichmentField>>,
}

impl EnrichmentHandler<SystemClock, RandomIdGenerator> {
    /// Production handler built from configuration
    pub fn from_config(config: &EnrichmentConfig) -> Result<Self, HandlerError> {
        Self::new(EnrichmentService::system(), config)
    }
}

impl<C: Clock, I: IdGenerator> EnrichmentHandler<C, I> {
    pub fn new(
        service: EnrichmentService<C, I>,
        config: &EnrichmentConfig,
    ) -> Result<Self, HandlerError> {
        let minimise_to = if config.minimise {
            Some(config.fields()?)
        } else {
            None
        };
        Ok(Self { service, minimise_to })
    }

    /// Handles one JSON-encoded request body
    ///
    /// # Errors
    ///
    /// Any decode or mapping failure is returned unchanged; nothing is
    /// emitted for a failed record.
    #[instrument(skip_all)]
    pub fn handle(&self, body: &str) -> Result<EnrichmentOutput, HandlerError> {
        let inbound = InboundRecord::from_json(body).inspect_err(|e| {
            error!(error = %e, "Failed to decode request");
        })?;
        let notification = self.service.generate_inbound(&inbound).inspect_err(|e| {
            error!(error = %e, "Failed to enrich request");
        })?;
        let audit = self.service.audit(&notification)?;

        let notification = match &self.minimise_to {
            Some(fields) => {
                info!(field_count = fields.len(), "Minimising notification");
                self.service.minimise(&notification, fields, &PassthroughPolicy)
            }
            None => notification,
        };

        Ok(EnrichmentOutput {
            correlation_id: inbound.correlation_id().map(str::to_string),
            notification,
            audit,
        })
    }
}
