//! Raw registry records
//!
//! These types mirror the inbound death record as delivered by the source
//! registry. They are decoded once at the boundary and then only read by the
//! mapping functions.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::EnrichmentError;

/// A person's name as structured by the registry
///
/// Title and suffix are accepted but never carried into the canonical event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonNameStructure {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub given_names: Vec<String>,
    pub family_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

impl PersonNameStructure {
    pub fn new(given_names: Vec<String>, family_name: impl Into<String>) -> Self {
        Self {
            title: None,
            given_names,
            family_name: family_name.into(),
            suffix: None,
        }
    }
}

/// An alias paired with its alias-type descriptor, if the registry sent one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasName {
    pub name: PersonNameStructure,
    pub name_type: Option<String>,
}

/// An inbound death record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeathRecord {
    pub registration_id: String,
    #[serde(default)]
    pub lock_timestamp: Option<NaiveDateTime>,
    #[serde(default)]
    pub update_timestamp: Option<NaiveDateTime>,
    #[serde(default)]
    pub update_reason_code: Option<String>,

    #[serde(default)]
    pub death_date_qualifier: Option<String>,
    #[serde(default)]
    pub death_date_exact: Option<NaiveDate>,
    #[serde(default)]
    pub death_year: Option<i32>,
    #[serde(default)]
    pub death_month: Option<u32>,
    #[serde(default)]
    pub free_format_death_date: Option<String>,

    #[serde(default)]
    pub address_postcode: Option<String>,

    #[serde(default)]
    pub birth_date_exact: Option<NaiveDate>,
    #[serde(default)]
    pub birth_year: Option<i32>,
    #[serde(default)]
    pub birth_month: Option<u32>,

    pub primary_name: PersonNameStructure,
    #[serde(default)]
    pub alias_names: Option<Vec<PersonNameStructure>>,
    #[serde(default)]
    pub alias_name_types: Option<Vec<String>>,
    #[serde(default)]
    pub maiden_family_name: Option<String>,

    pub sex_code: String,
}

impl DeathRecord {
    /// Decodes a record from its JSON wire form
    pub fn from_json(json: &str) -> Result<Self, EnrichmentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Pairs each alias name with the descriptor at the same position
    ///
    /// The descriptor list may be shorter or longer than the alias list;
    /// aliases without a descriptor get `None` and surplus descriptors are
    /// dropped.
    pub fn aliases(&self) -> Vec<AliasName> {
        let names = self.alias_names.as_deref().unwrap_or_default();
        let mut types = self.alias_name_types.as_deref().unwrap_or_default().iter();

        names
            .iter()
            .map(|name| AliasName {
                name: name.clone(),
                name_type: types.next().cloned(),
            })
            .collect()
    }
}

/// A record together with the correlation id assigned by the ingesting service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeathRecordWithCorrelationId {
    pub correlation_id: String,
    pub record: DeathRecord,
}

/// Key that marks a body as a correlated envelope
const CORRELATION_ID_KEY: &str = "correlationId";

/// An inbound request body, either correlated or a bare record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundRecord {
    Correlated(DeathRecordWithCorrelationId),
    Bare(DeathRecord),
}

impl InboundRecord {
    /// Decodes a request body
    ///
    /// A top-level `correlationId` key selects the envelope form; anything
    /// else is decoded as a bare record, so decode errors name the offending
    /// field of the form that was actually sent.
    pub fn from_json(json: &str) -> Result<Self, EnrichmentError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if value.get(CORRELATION_ID_KEY).is_some() {
            Ok(InboundRecord::Correlated(serde_json::from_value(value)?))
        } else {
            Ok(InboundRecord::Bare(serde_json::from_value(value)?))
        }
    }

    pub fn record(&self) -> &DeathRecord {
        match self {
            InboundRecord::Correlated(envelope) => &envelope.record,
            InboundRecord::Bare(record) => record,
        }
    }

    pub fn correlation_id(&self) -> Option<&str> {
        match self {
            InboundRecord::Correlated(envelope) => Some(&envelope.correlation_id),
            InboundRecord::Bare(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(given: &str, family: &str) -> PersonNameStructure {
        PersonNameStructure::new(vec![given.to_string()], family)
    }

    #[test]
    fn test_aliases_pair_by_position() {
        let record = DeathRecord {
            alias_names: Some(vec![name("A", "One"), name("B", "Two")]),
            alias_name_types: Some(vec!["Known as".to_string()]),
            ..Default::default()
        };

        let aliases = record.aliases();
        assert_eq!(aliases.len(), 2);
        assert_eq!(aliases[0].name_type.as_deref(), Some("Known as"));
        assert_eq!(aliases[1].name_type, None);
    }

    #[test]
    fn test_surplus_alias_types_are_ignored() {
        let record = DeathRecord {
            alias_names: Some(vec![name("A", "One")]),
            alias_name_types: Some(vec!["x".to_string(), "y".to_string()]),
            ..Default::default()
        };
        assert_eq!(record.aliases().len(), 1);
    }

    #[test]
    fn test_inbound_selects_envelope_by_correlation_key() {
        let inbound = InboundRecord::from_json(
            r#"{ "correlationId": "c-1", "record": { "registrationId": "1", "primaryName": { "familyName": "Lee" }, "sexCode": "MALE" } }"#,
        )
        .unwrap();
        assert_eq!(inbound.correlation_id(), Some("c-1"));
        assert_eq!(inbound.record().registration_id, "1");
    }

    #[test]
    fn test_inbound_bare_record_has_no_correlation_id() {
        let inbound = InboundRecord::from_json(
            r#"{ "registrationId": "2", "primaryName": { "familyName": "Lee" }, "sexCode": "MALE" }"#,
        )
        .unwrap();
        assert!(matches!(inbound, InboundRecord::Bare(_)));
        assert_eq!(inbound.correlation_id(), None);
    }

    #[test]
    fn test_inbound_envelope_without_record_fails() {
        let result = InboundRecord::from_json(r#"{ "correlationId": "c-3" }"#);
        assert!(matches!(result, Err(EnrichmentError::MappingFailure(_))));
    }

    #[test]
    fn test_no_aliases_when_list_absent() {
        let record = DeathRecord {
            alias_name_types: Some(vec!["orphan".to_string()]),
            ..Default::default()
        };
        assert!(record.aliases().is_empty());
    }
}
