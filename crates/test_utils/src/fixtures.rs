//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for death records and the collaborators
//! the mapper depends on. These fixtures are consistent and predictable so
//! that notifications can be compared field by field.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use core_kernel::{FixedClock, SequenceIdGenerator};
use domain_death::{DeathRecord, PersonNameStructure};
use uuid::Uuid;

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Registry update timestamp used by the correction scenario
    pub fn update_timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2022, 1, 5)
            .unwrap()
            .and_hms_opt(12, 3, 52)
            .unwrap()
    }

    /// Registry lock timestamp for a new registration
    pub fn lock_timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2022, 1, 4)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    /// Epoch seconds of `update_timestamp` read as UTC
    pub fn update_epoch() -> i64 {
        1_641_384_232
    }

    /// Epoch seconds of `lock_timestamp` read as UTC
    pub fn lock_epoch() -> i64 {
        1_641_288_600
    }

    /// Instant the fixed clock reports
    pub fn issued_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2022, 1, 6, 8, 0, 0).unwrap()
    }

    /// A full date of death
    pub fn death_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 12, 31).unwrap()
    }

    /// A full date of birth
    pub fn birth_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(1972, 2, 20).unwrap()
    }
}

/// Fixture for identifier test data
pub struct IdFixtures;

impl IdFixtures {
    /// Deterministic id handed out first (becomes the jti)
    pub fn first() -> Uuid {
        Uuid::parse_str("550e8400-e29b-41d4-a716-446655440001").unwrap()
    }

    /// Deterministic id handed out second (becomes the txn)
    pub fn second() -> Uuid {
        Uuid::parse_str("550e8400-e29b-41d4-a716-446655440002").unwrap()
    }

    /// Generator seeded with `first` then `second`
    pub fn generator() -> SequenceIdGenerator {
        SequenceIdGenerator::new([Self::first(), Self::second()])
    }

    /// Clock frozen at `TemporalFixtures::issued_at`
    pub fn clock() -> FixedClock {
        FixedClock::new(TemporalFixtures::issued_at())
    }
}

/// Fixture for raw death records
pub struct RecordFixtures;

impl RecordFixtures {
    /// The primary name used across fixtures
    pub fn jane_smith() -> PersonNameStructure {
        PersonNameStructure::new(vec!["Jane".to_string()], "Smith")
    }

    /// Correction of an existing registration, death known to year and month
    pub fn correction() -> DeathRecord {
        DeathRecord {
            registration_id: "123456789".to_string(),
            lock_timestamp: None,
            update_timestamp: Some(TemporalFixtures::update_timestamp()),
            update_reason_code: Some("CORRECTION".to_string()),
            death_year: Some(2021),
            death_month: Some(12),
            address_postcode: Some("XX1 1XX".to_string()),
            primary_name: Self::jane_smith(),
            maiden_family_name: Some("Burt".to_string()),
            sex_code: "FEMALE".to_string(),
            ..Default::default()
        }
    }

    /// A newly locked registration with full dates and one alias
    pub fn new_registration() -> DeathRecord {
        DeathRecord {
            registration_id: "987654321".to_string(),
            lock_timestamp: Some(TemporalFixtures::lock_timestamp()),
            death_date_qualifier: Some("On or about".to_string()),
            death_date_exact: Some(TemporalFixtures::death_date()),
            free_format_death_date: Some("31st December 2021".to_string()),
            address_postcode: Some("XX1 1XX".to_string()),
            birth_date_exact: Some(TemporalFixtures::birth_date()),
            primary_name: Self::jane_smith(),
            alias_names: Some(vec![PersonNameStructure::new(
                vec!["Janet".to_string()],
                "Smith",
            )]),
            alias_name_types: Some(vec!["Also known as".to_string()]),
            sex_code: "FEMALE".to_string(),
            ..Default::default()
        }
    }

    /// JSON wire form of `correction`
    pub fn correction_json() -> &'static str {
        r#"{
            "registrationId": "123456789",
            "updateTimestamp": "2022-01-05T12:03:52",
            "updateReasonCode": "CORRECTION",
            "deathYear": 2021,
            "deathMonth": 12,
            "addressPostcode": "XX1 1XX",
            "primaryName": { "givenNames": ["Jane"], "familyName": "Smith" },
            "maidenFamilyName": "Burt",
            "sexCode": "FEMALE"
        }"#
    }
}
