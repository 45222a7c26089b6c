//! Notification minimisation
//!
//! Produces a field-reduced copy of a notification for a consumer that may
//! only see an allow-listed subset of the event. The envelope is always
//! copied unchanged; only the event payload passes through a policy.
//!
//! Which fields each variant keeps is not yet defined by the product, so the
//! policy is a trait. `PassthroughPolicy` is the current behaviour and
//! returns payloads untouched.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

use crate::events::{DeathEvent, DeathRegistration, DeathRegistrationUpdate};
use crate::notification::DeathNotification;

/// A named field a consumer may be allowed to see
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnrichmentField {
    DeathDate,
    RegistrationId,
    FreeFormatDeathDate,
    EventTime,
    UpdateReason,
    Address,
    BirthDate,
    Name,
    Sex,
}

impl EnrichmentField {
    pub const ALL: [EnrichmentField; 9] = [
        EnrichmentField::DeathDate,
        EnrichmentField::RegistrationId,
        EnrichmentField::FreeFormatDeathDate,
        EnrichmentField::EventTime,
        EnrichmentField::UpdateReason,
        EnrichmentField::Address,
        EnrichmentField::BirthDate,
        EnrichmentField::Name,
        EnrichmentField::Sex,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EnrichmentField::DeathDate => "DEATH_DATE",
            EnrichmentField::RegistrationId => "REGISTRATION_ID",
            EnrichmentField::FreeFormatDeathDate => "FREE_FORMAT_DEATH_DATE",
            EnrichmentField::EventTime => "EVENT_TIME",
            EnrichmentField::UpdateReason => "UPDATE_REASON",
            EnrichmentField::Address => "ADDRESS",
            EnrichmentField::BirthDate => "BIRTH_DATE",
            EnrichmentField::Name => "NAME",
            EnrichmentField::Sex => "SEX",
        }
    }
}

impl fmt::Display for EnrichmentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an enrichment field name outside the vocabulary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown enrichment field: {0}")]
pub struct UnknownEnrichmentField(pub String);

impl FromStr for EnrichmentField {
    type Err = UnknownEnrichmentField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        EnrichmentField::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownEnrichmentField(wanted.to_string()))
    }
}

/// Per-variant filtering rules
pub trait MinimisationPolicy {
    fn minimise_registration(
        &self,
        event: DeathRegistration,
        fields: &[EnrichmentField],
    ) -> DeathRegistration;

    fn minimise_update(
        &self,
        event: DeathRegistrationUpdate,
        fields: &[EnrichmentField],
    ) -> DeathRegistrationUpdate;
}

/// Policy that keeps every field
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughPolicy;

impl MinimisationPolicy for PassthroughPolicy {
    fn minimise_registration(
        &self,
        event: DeathRegistration,
        _fields: &[EnrichmentField],
    ) -> DeathRegistration {
        event
    }

    fn minimise_update(
        &self,
        event: DeathRegistrationUpdate,
        _fields: &[EnrichmentField],
    ) -> DeathRegistrationUpdate {
        event
    }
}

/// Minimises a notification's event payload, preserving the envelope
#[instrument(skip_all, fields(jti = %notification.jti, field_count = fields.len()))]
pub fn minimise<P: MinimisationPolicy + ?Sized>(
    notification: &DeathNotification,
    fields: &[EnrichmentField],
    policy: &P,
) -> DeathNotification {
    let minimised = match notification.event().clone() {
        DeathEvent::Registration(event) => {
            DeathEvent::Registration(policy.minimise_registration(event, fields))
        }
        DeathEvent::Update(event) => DeathEvent::Update(policy.minimise_update(event, fields)),
    };
    notification.with_event(minimised)
}

/// Parses a comma-separated list of enrichment field names
///
/// Blank entries are skipped.
pub fn parse_enrichment_fields(list: &str) -> Result<Vec<EnrichmentField>, UnknownEnrichmentField> {
    list.split(',')
        .filter(|entry| !entry.trim().is_empty())
        .map(|entry| entry.parse::<EnrichmentField>())
        .collect()
}
