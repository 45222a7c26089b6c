//! Enrichment service
//!
//! Orchestrates the mapping pipeline for one record at a time:
//!
//! ```text
//! DeathRecord -> classify (dates, names, subject) -> envelope -> DeathNotification
//! ```
//!
//! The service owns the clock and identifier collaborators so callers never
//! touch ambient state directly.

use tracing::{info, instrument, warn};

use core_kernel::{Clock, IdGenerator, RandomIdGenerator, SystemClock};
use crate::audit::EnrichmentAudit;
use crate::error::EnrichmentError;
use crate::events::classify;
use crate::minimisation::{minimise, EnrichmentField, MinimisationPolicy};
use crate::notification::{generate_notification, DeathNotification};
use crate::record::{DeathRecord, DeathRecordWithCorrelationId, InboundRecord};

/// Service that turns registry records into death notifications
#[derive(Debug, Clone)]
pub struct EnrichmentService<C, I> {
    clock: C,
    ids: I,
}

impl EnrichmentService<SystemClock, RandomIdGenerator> {
    /// Service wired to the wall clock and random v4 identifiers
    pub fn system() -> Self {
        Self::new(SystemClock, RandomIdGenerator)
    }
}

impl<C: Clock, I: IdGenerator> EnrichmentService<C, I> {
    pub fn new(clock: C, ids: I) -> Self {
        Self { clock, ids }
    }

    /// Maps one record to a notification
    ///
    /// All-or-nothing: any failure yields an error and no notification.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be classified or any of its
    /// coded values fall outside the fixed tables.
    #[instrument(skip_all, fields(registration_id = %record.registration_id))]
    pub fn generate(&self, record: &DeathRecord) -> Result<DeathNotification, EnrichmentError> {
        let event = classify(record).inspect_err(|e| {
            warn!(error = %e, "Rejected death record");
        })?;
        let notification = generate_notification(event, &self.clock, &self.ids);

        info!(
            event_type = notification.event().event_type(),
            jti = %notification.jti,
            txn = %notification.txn,
            "Generated death notification"
        );
        Ok(notification)
    }

    /// Maps a record that arrived with a correlation id
    #[instrument(skip_all, fields(correlation_id = %envelope.correlation_id))]
    pub fn generate_correlated(
        &self,
        envelope: &DeathRecordWithCorrelationId,
    ) -> Result<DeathNotification, EnrichmentError> {
        self.generate(&envelope.record)
    }

    /// Maps an inbound body, correlated or bare
    pub fn generate_inbound(&self, inbound: &InboundRecord) -> Result<DeathNotification, EnrichmentError> {
        match inbound {
            InboundRecord::Correlated(envelope) => self.generate_correlated(envelope),
            InboundRecord::Bare(record) => self.generate(record),
        }
    }

    /// Decodes a JSON record and maps it
    ///
    /// # Errors
    ///
    /// Decode failures surface as `MappingFailure`.
    pub fn generate_from_json(&self, json: &str) -> Result<DeathNotification, EnrichmentError> {
        let record = DeathRecord::from_json(json).inspect_err(|e| {
            warn!(error = %e, "Failed to decode death record");
        })?;
        self.generate(&record)
    }

    /// Builds the audit record for a generated notification
    pub fn audit(&self, notification: &DeathNotification) -> Result<EnrichmentAudit, EnrichmentError> {
        EnrichmentAudit::for_notification(notification)
    }

    /// Minimises a notification for a consumer with the given allow-list
    pub fn minimise<P: MinimisationPolicy + ?Sized>(
        &self,
        notification: &DeathNotification,
        fields: &[EnrichmentField],
        policy: &P,
    ) -> DeathNotification {
        minimise(notification, fields, policy)
    }
}
