//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating raw death records that
//! respect the registry's structural rules, plus `fake`-backed helpers for
//! ad-hoc realistic names.

use chrono::{NaiveDate, NaiveDateTime};
use domain_death::{DeathRecord, PersonNameStructure};
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use proptest::prelude::*;

/// Registry sex codes present in the sex table
pub const KNOWN_SEX_CODES: [&str; 3] = ["MALE", "FEMALE", "INDETERMINATE"];

/// Registry update reason codes present in the reason table
pub const KNOWN_REASON_CODES: [&str; 5] = [
    "CORRECTION",
    "QUALITY_ASSURANCE",
    "TYPOGRAPHICAL",
    "CANCELLED",
    "CANCELLATION_REMOVED",
];

/// Strategy for a single capitalised name token
pub fn name_token_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,11}"
}

/// Strategy for a structured person name with 0-3 given names
pub fn person_name_strategy() -> impl Strategy<Value = PersonNameStructure> {
    (
        proptest::collection::vec(name_token_strategy(), 0..4),
        name_token_strategy(),
    )
        .prop_map(|(given, family)| PersonNameStructure::new(given, family))
}

/// Strategy for valid calendar dates
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1900i32..2030, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

/// Strategy for registry local date-times
pub fn date_time_strategy() -> impl Strategy<Value = NaiveDateTime> {
    (date_strategy(), 0u32..24, 0u32..60, 0u32..60)
        .prop_map(|(d, h, m, s)| d.and_hms_opt(h, m, s).unwrap())
}

/// Strategy for a known sex code
pub fn sex_code_strategy() -> impl Strategy<Value = String> {
    proptest::sample::select(KNOWN_SEX_CODES.to_vec()).prop_map(str::to_string)
}

/// Strategy for a known update reason code
pub fn reason_code_strategy() -> impl Strategy<Value = String> {
    proptest::sample::select(KNOWN_REASON_CODES.to_vec()).prop_map(str::to_string)
}

/// Strategy for the three-way date source (exact, year, month)
pub fn date_sources_strategy() -> impl Strategy<Value = (Option<NaiveDate>, Option<i32>, Option<u32>)> {
    (
        proptest::option::of(date_strategy()),
        proptest::option::of(1900i32..2030),
        proptest::option::of(1u32..=12),
    )
}

/// Strategy for records that map successfully
///
/// Exactly one of the lock or update timestamp is present; all codes come
/// from the fixed tables; alias and alias-type lists vary independently in
/// length.
pub fn mappable_record_strategy() -> impl Strategy<Value = DeathRecord> {
    (
        "[0-9]{9}",
        any::<bool>(),
        date_time_strategy(),
        reason_code_strategy(),
        date_sources_strategy(),
        date_sources_strategy(),
        person_name_strategy(),
        proptest::option::of(proptest::collection::vec(person_name_strategy(), 0..4)),
        proptest::option::of(proptest::collection::vec("[A-Z][a-z ]{2,15}", 0..5)),
        proptest::option::of(name_token_strategy()),
        sex_code_strategy(),
    )
        .prop_map(
            |(
                registration_id,
                locked,
                timestamp,
                reason,
                (death_exact, death_year, death_month),
                (birth_exact, birth_year, birth_month),
                primary_name,
                alias_names,
                alias_name_types,
                maiden_family_name,
                sex_code,
            )| DeathRecord {
                registration_id,
                lock_timestamp: locked.then_some(timestamp),
                update_timestamp: (!locked).then_some(timestamp),
                update_reason_code: (!locked).then_some(reason),
                death_date_exact: death_exact,
                death_year,
                death_month,
                birth_date_exact: birth_exact,
                birth_year,
                birth_month,
                address_postcode: Some("XX1 1XX".to_string()),
                primary_name,
                alias_names,
                alias_name_types,
                maiden_family_name,
                sex_code,
                ..Default::default()
            },
        )
}

/// A realistic random person name
pub fn fake_person_name() -> PersonNameStructure {
    let given: String = FirstName().fake();
    let family: String = LastName().fake();
    PersonNameStructure::new(vec![given], family)
}
