//! Test Data Builders
//!
//! Provides a builder for raw death records with sensible defaults. Tests
//! specify only the fields they care about.

use chrono::{NaiveDate, NaiveDateTime};
use domain_death::{DeathRecord, PersonNameStructure};

use crate::fixtures::{RecordFixtures, TemporalFixtures};

/// Builder for constructing raw death records
///
/// Defaults to a minimal locked registration for "Jane Smith" with no dates,
/// aliases or maiden name.
pub struct DeathRecordBuilder {
    record: DeathRecord,
}

impl Default for DeathRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DeathRecordBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            record: DeathRecord {
                registration_id: "000000001".to_string(),
                lock_timestamp: Some(TemporalFixtures::lock_timestamp()),
                primary_name: RecordFixtures::jane_smith(),
                sex_code: "FEMALE".to_string(),
                ..Default::default()
            },
        }
    }

    /// Sets the registration ID
    pub fn with_registration_id(mut self, id: impl Into<String>) -> Self {
        self.record.registration_id = id.into();
        self
    }

    /// Makes the record a new registration locked at the given time
    pub fn locked_at(mut self, timestamp: NaiveDateTime) -> Self {
        self.record.lock_timestamp = Some(timestamp);
        self.record.update_timestamp = None;
        self
    }

    /// Makes the record an update at the given time with the given reason code
    pub fn updated_at(mut self, timestamp: NaiveDateTime, reason_code: impl Into<String>) -> Self {
        self.record.lock_timestamp = None;
        self.record.update_timestamp = Some(timestamp);
        self.record.update_reason_code = Some(reason_code.into());
        self
    }

    /// Clears both registry timestamps
    pub fn without_timestamps(mut self) -> Self {
        self.record.lock_timestamp = None;
        self.record.update_timestamp = None;
        self
    }

    /// Sets the death date sources
    pub fn with_death_date(
        mut self,
        exact: Option<NaiveDate>,
        year: Option<i32>,
        month: Option<u32>,
    ) -> Self {
        self.record.death_date_exact = exact;
        self.record.death_year = year;
        self.record.death_month = month;
        self
    }

    /// Sets the death date qualifier
    pub fn with_death_qualifier(mut self, qualifier: impl Into<String>) -> Self {
        self.record.death_date_qualifier = Some(qualifier.into());
        self
    }

    /// Sets the birth date sources
    pub fn with_birth_date(
        mut self,
        exact: Option<NaiveDate>,
        year: Option<i32>,
        month: Option<u32>,
    ) -> Self {
        self.record.birth_date_exact = exact;
        self.record.birth_year = year;
        self.record.birth_month = month;
        self
    }

    /// Sets the postcode
    pub fn with_postcode(mut self, postcode: impl Into<String>) -> Self {
        self.record.address_postcode = Some(postcode.into());
        self
    }

    /// Sets the primary name
    pub fn with_primary_name(mut self, name: PersonNameStructure) -> Self {
        self.record.primary_name = name;
        self
    }

    /// Sets the alias names and their type descriptors
    pub fn with_aliases(
        mut self,
        names: Vec<PersonNameStructure>,
        types: Option<Vec<String>>,
    ) -> Self {
        self.record.alias_names = Some(names);
        self.record.alias_name_types = types;
        self
    }

    /// Sets the maiden family name
    pub fn with_maiden_name(mut self, maiden: impl Into<String>) -> Self {
        self.record.maiden_family_name = Some(maiden.into());
        self
    }

    /// Sets the sex code
    pub fn with_sex_code(mut self, code: impl Into<String>) -> Self {
        self.record.sex_code = code.into();
        self
    }

    /// Builds the record
    pub fn build(self) -> DeathRecord {
        self.record
    }
}
