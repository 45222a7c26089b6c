//! Subject of a death registration
//!
//! The subject is the deceased person. Each attribute is carried as a list
//! to leave room for multi-valued data later; today every list holds exactly
//! one element except the name list.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use core_kernel::{DateWithDescription, resolve_partial_date};
use crate::error::EnrichmentError;
use crate::names::{assemble_names, Name};
use crate::record::DeathRecord;

/// Canonical sex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
    Indeterminate,
}

impl Sex {
    /// Maps a registry sex code through the fixed code table
    ///
    /// # Errors
    ///
    /// Returns `UnknownSexCode` for any code outside the table.
    pub fn from_registry_code(code: &str) -> Result<Self, EnrichmentError> {
        match code {
            "MALE" => Ok(Sex::Male),
            "FEMALE" => Ok(Sex::Female),
            "INDETERMINATE" => Ok(Sex::Indeterminate),
            other => Err(EnrichmentError::unknown_sex(other)),
        }
    }
}

impl FromStr for Sex {
    type Err = EnrichmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sex::from_registry_code(s)
    }
}

/// A postal address
///
/// Only `postal_code` is populated by the mapper. The remaining attributes
/// belong to the canonical vocabulary and are always left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_locality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependent_address_locality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub double_dependent_address_locality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organisation_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_building_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uprn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<String>,
}

impl PostalAddress {
    /// An address carrying nothing but a postcode
    pub fn postcode_only(postcode: Option<String>) -> Self {
        Self {
            postal_code: postcode,
            ..Default::default()
        }
    }
}

/// The deceased person
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeathRegistrationSubject {
    pub address: Vec<PostalAddress>,
    pub birth_date: Vec<DateWithDescription>,
    pub name: Vec<Name>,
    pub sex: Vec<Sex>,
}

/// Builds the subject from a raw record
///
/// # Errors
///
/// Returns `UnknownSexCode` for an unmapped sex code, or
/// `MalformedTemporalValue` if the birth-date fallbacks are out of range.
pub fn build_subject(record: &DeathRecord) -> Result<DeathRegistrationSubject, EnrichmentError> {
    let address = PostalAddress::postcode_only(record.address_postcode.clone());

    let birth_date = resolve_partial_date(
        record.birth_date_exact,
        record.birth_year,
        record.birth_month,
    )?;

    let names = assemble_names(
        &record.primary_name,
        &record.aliases(),
        record.maiden_family_name.as_deref(),
    );

    let sex = Sex::from_registry_code(&record.sex_code)?;

    Ok(DeathRegistrationSubject {
        address: vec![address],
        birth_date: vec![DateWithDescription::undescribed(birth_date)],
        name: names,
        sex: vec![sex],
    })
}
