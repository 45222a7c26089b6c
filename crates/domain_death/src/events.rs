//! Death registration events
//!
//! A record is classified as either a new registration or an update to an
//! existing one. The classification is driven entirely by which registry
//! timestamp is present:
//!
//! ```text
//! lock timestamp present   -> Registration (event time = lock timestamp)
//! lock timestamp absent    -> Update       (event time = update timestamp,
//!                                           reason from the reason table)
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

use core_kernel::{DateWithDescription, StructuredDateTime, resolve_partial_date};
use crate::error::EnrichmentError;
use crate::record::DeathRecord;
use crate::subject::{build_subject, DeathRegistrationSubject};

/// Canonical reason for a registration update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateReason {
    FormalCorrection,
    QualityAssurance,
    Typographical,
    Cancelled,
    CancellationRemoved,
}

impl UpdateReason {
    /// Maps a registry update reason code through the fixed reason table
    ///
    /// # Errors
    ///
    /// Returns `UnknownUpdateReasonCode` for any code outside the table.
    pub fn from_registry_code(code: &str) -> Result<Self, EnrichmentError> {
        match code {
            "CORRECTION" => Ok(UpdateReason::FormalCorrection),
            "QUALITY_ASSURANCE" => Ok(UpdateReason::QualityAssurance),
            "TYPOGRAPHICAL" => Ok(UpdateReason::Typographical),
            "CANCELLED" => Ok(UpdateReason::Cancelled),
            "CANCELLATION_REMOVED" => Ok(UpdateReason::CancellationRemoved),
            other => Err(EnrichmentError::unknown_update_reason(other)),
        }
    }
}

impl FromStr for UpdateReason {
    type Err = EnrichmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UpdateReason::from_registry_code(s)
    }
}

/// A newly locked death registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeathRegistration {
    pub death_date: DateWithDescription,
    #[serde(rename = "deathRegistrationID")]
    pub registration_id: String,
    #[serde(default)]
    pub free_format_death_date: Option<String>,
    #[serde(rename = "deathRegistrationTime")]
    pub registration_time: StructuredDateTime,
    pub subject: DeathRegistrationSubject,
}

/// An update to an existing death registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeathRegistrationUpdate {
    pub death_date: DateWithDescription,
    #[serde(rename = "deathRegistrationID")]
    pub registration_id: String,
    #[serde(rename = "deathRegistrationUpdateReason")]
    pub update_reason: UpdateReason,
    #[serde(default)]
    pub free_format_death_date: Option<String>,
    #[serde(rename = "recordUpdateTime")]
    pub update_time: StructuredDateTime,
    pub subject: DeathRegistrationSubject,
}

/// Exactly one of a registration or an update
///
/// Serialized untagged; `Update` is listed first so that decoding checks for
/// the update-only fields before falling back to a registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DeathEvent {
    Update(DeathRegistrationUpdate),
    Registration(DeathRegistration),
}

impl DeathEvent {
    /// The structured registry timestamp the event was built from
    pub fn event_time(&self) -> StructuredDateTime {
        match self {
            DeathEvent::Registration(event) => event.registration_time,
            DeathEvent::Update(event) => event.update_time,
        }
    }

    /// Canonical time of event in UTC epoch seconds
    pub fn time_of_event(&self) -> i64 {
        self.event_time().epoch_seconds()
    }

    pub fn registration_id(&self) -> &str {
        match self {
            DeathEvent::Registration(event) => &event.registration_id,
            DeathEvent::Update(event) => &event.registration_id,
        }
    }

    pub fn subject(&self) -> &DeathRegistrationSubject {
        match self {
            DeathEvent::Registration(event) => &event.subject,
            DeathEvent::Update(event) => &event.subject,
        }
    }

    /// Returns the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            DeathEvent::Registration(_) => "DeathRegistration",
            DeathEvent::Update(_) => "DeathRegistrationUpdate",
        }
    }

    pub fn is_registration(&self) -> bool {
        matches!(self, DeathEvent::Registration(_))
    }
}

/// Classifies a record and builds the event payload
///
/// # Errors
///
/// - `MissingRequiredTimestamp` when neither timestamp is present
/// - `UnknownUpdateReasonCode` when the update path has an unmapped or absent code
/// - any error from resolving the death date or building the subject
pub fn classify(record: &DeathRecord) -> Result<DeathEvent, EnrichmentError> {
    if record.lock_timestamp.is_none() && record.update_timestamp.is_none() {
        return Err(EnrichmentError::MissingRequiredTimestamp);
    }

    let death_date = DateWithDescription::new(
        record.death_date_qualifier.clone(),
        resolve_partial_date(record.death_date_exact, record.death_year, record.death_month)?,
    );

    if let Some(locked_at) = record.lock_timestamp {
        debug!(registration_id = %record.registration_id, "Classified as new registration");
        return Ok(DeathEvent::Registration(DeathRegistration {
            death_date,
            registration_id: record.registration_id.clone(),
            free_format_death_date: record.free_format_death_date.clone(),
            registration_time: StructuredDateTime::new(locked_at),
            subject: build_subject(record)?,
        }));
    }

    let updated_at = record
        .update_timestamp
        .ok_or(EnrichmentError::MissingRequiredTimestamp)?;
    let update_reason = UpdateReason::from_registry_code(
        record.update_reason_code.as_deref().unwrap_or_default(),
    )?;
    debug!(
        registration_id = %record.registration_id,
        reason = ?update_reason,
        "Classified as registration update"
    );

    Ok(DeathEvent::Update(DeathRegistrationUpdate {
        death_date,
        registration_id: record.registration_id.clone(),
        update_reason,
        free_format_death_date: record.free_format_death_date.clone(),
        update_time: StructuredDateTime::new(updated_at),
        subject: build_subject(record)?,
    }))
}
