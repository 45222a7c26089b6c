//! Death Registration Domain
//!
//! This crate maps raw civil-registration death records into canonical,
//! versioned death notifications consumed by downstream life-event platforms.
//!
//! # Pipeline
//!
//! ```text
//! DeathRecord
//!   -> partial dates (core_kernel::temporal) + names (names)
//!   -> subject (subject)
//!   -> Registration | Update (events)
//!   -> envelope: iat, jti, txn, toe (notification)
//!   -> DeathNotification
//! ```
//!
//! Minimisation (minimisation) runs later, independently, on an already
//! generated notification.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_death::{DeathRecord, EnrichmentService};
//!
//! let service = EnrichmentService::system();
//! let record = DeathRecord::from_json(&body)?;
//! let notification = service.generate(&record)?;
//! ```

pub mod record;
pub mod names;
pub mod subject;
pub mod events;
pub mod notification;
pub mod minimisation;
pub mod audit;
pub mod error;
pub mod services;

pub use record::{
    AliasName, DeathRecord, DeathRecordWithCorrelationId, InboundRecord, PersonNameStructure,
};
pub use names::{Name, NamePart, NamePartType, assemble_names, MAIDEN_NAME_DESCRIPTION};
pub use subject::{DeathRegistrationSubject, PostalAddress, Sex, build_subject};
pub use events::{DeathEvent, DeathRegistration, DeathRegistrationUpdate, UpdateReason, classify};
pub use notification::{DeathNotification, DeathRegistrationEvents, generate_notification};
pub use minimisation::{
    EnrichmentField, MinimisationPolicy, PassthroughPolicy, UnknownEnrichmentField,
    minimise, parse_enrichment_fields,
};
pub use audit::EnrichmentAudit;
pub use error::EnrichmentError;
pub use services::EnrichmentService;
