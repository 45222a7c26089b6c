//! Partial-date handling for civil-registration data
//!
//! Registry records frequently know a date only to the year, or to the
//! year and month. This module provides:
//! - `PartialDate`: a date at year, year-month, or full-date granularity
//! - `DateWithDescription`: a partial date plus an independent free-text qualifier
//! - `StructuredDateTime`: a local date-time as recorded by the registry
//! - Resolution of a partial date from an explicit value or numeric fallbacks

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Separator used by the textual date encoding (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`)
const DATE_SEPARATOR: char = '-';

/// Errors related to temporal values
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Malformed temporal value {value:?}: {reason}")]
    MalformedTemporalValue {
        value: String,
        reason: String,
    },
}

impl TemporalError {
    pub fn malformed(value: impl Into<String>, reason: impl Into<String>) -> Self {
        TemporalError::MalformedTemporalValue {
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// A date known at year, year-month, or full calendar granularity
///
/// Absence of any date is modelled as `Option<PartialDate>`, not as a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartialDate {
    /// Only the year is known
    YearOnly(i32),
    /// Year and month (1-12) are known
    YearMonth(i32, u32),
    /// The full calendar date is known
    FullDate(NaiveDate),
}

impl PartialDate {
    /// Creates a year-only date, validating the year
    pub fn year_only(year: i32) -> Result<Self, TemporalError> {
        check_year(year, &year.to_string())?;
        Ok(PartialDate::YearOnly(year))
    }

    /// Creates a year-month date, validating year and month
    pub fn year_month(year: i32, month: u32) -> Result<Self, TemporalError> {
        let value = format!("{year}-{month}");
        check_year(year, &value)?;
        if !(1..=12).contains(&month) {
            return Err(TemporalError::malformed(
                value,
                format!("month {month} is outside 1-12"),
            ));
        }
        Ok(PartialDate::YearMonth(year, month))
    }

    /// Creates a full date, validating that the year fits the text encoding
    pub fn full(date: NaiveDate) -> Result<Self, TemporalError> {
        check_year(date.year(), &date.to_string())?;
        Ok(PartialDate::FullDate(date))
    }

    /// Returns the year component, present at every granularity
    pub fn year(&self) -> i32 {
        match self {
            PartialDate::YearOnly(year) => *year,
            PartialDate::YearMonth(year, _) => *year,
            PartialDate::FullDate(date) => date.year(),
        }
    }

    /// Returns the month component, if known
    pub fn month(&self) -> Option<u32> {
        match self {
            PartialDate::YearOnly(_) => None,
            PartialDate::YearMonth(_, month) => Some(*month),
            PartialDate::FullDate(date) => Some(date.month()),
        }
    }

    /// Returns the full date, if known
    pub fn full_date(&self) -> Option<NaiveDate> {
        match self {
            PartialDate::FullDate(date) => Some(*date),
            _ => None,
        }
    }

    /// Parses the textual encoding, see [`FromStr`]
    pub fn parse(text: &str) -> Result<Self, TemporalError> {
        text.parse()
    }
}

/// Resolves a partial date from an explicit full date or numeric fallbacks
///
/// Priority: explicit full date, then year and month, then year alone.
/// A month without a year is not enough to resolve anything.
///
/// # Errors
///
/// Returns `MalformedTemporalValue` if the year is outside 0-9999 or the
/// fallback month is outside 1-12.
pub fn resolve_partial_date(
    exact: Option<NaiveDate>,
    year: Option<i32>,
    month: Option<u32>,
) -> Result<Option<PartialDate>, TemporalError> {
    if let Some(date) = exact {
        return PartialDate::full(date).map(Some);
    }
    match (year, month) {
        (Some(year), Some(month)) => PartialDate::year_month(year, month).map(Some),
        (Some(year), None) => PartialDate::year_only(year).map(Some),
        (None, _) => Ok(None),
    }
}

/// Years the four-digit text encoding can represent
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 0..=9999;

fn check_year(year: i32, value: &str) -> Result<(), TemporalError> {
    if YEAR_RANGE.contains(&year) {
        Ok(())
    } else {
        Err(TemporalError::malformed(
            value,
            format!("year {year} is outside 0-9999"),
        ))
    }
}

/// Reads a field of exactly `width` ASCII digits
fn fixed_digits(field: &str, width: usize, what: &str, original: &str) -> Result<u32, TemporalError> {
    if field.len() != width || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TemporalError::malformed(
            original,
            format!("{what} must be exactly {width} digits, found {field:?}"),
        ));
    }
    field
        .parse()
        .map_err(|_| TemporalError::malformed(original, format!("invalid {what} {field:?}")))
}

impl FromStr for PartialDate {
    type Err = TemporalError;

    /// Parses `YYYY`, `YYYY-MM` or `YYYY-MM-DD`
    ///
    /// Every field is fixed-width ASCII digits. The granularity is chosen by
    /// the number of separators; any count other than 0, 1 or 2 is malformed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let fields: Vec<&str> = text.split(DATE_SEPARATOR).collect();

        match fields.as_slice() {
            [year] => {
                let year = fixed_digits(year, 4, "year", s)?;
                Ok(PartialDate::YearOnly(year as i32))
            }
            [year, month] => {
                let year = fixed_digits(year, 4, "year", s)?;
                let month = fixed_digits(month, 2, "month", s)?;
                PartialDate::year_month(year as i32, month)
            }
            [year, month, day] => {
                let year = fixed_digits(year, 4, "year", s)?;
                let month = fixed_digits(month, 2, "month", s)?;
                let day = fixed_digits(day, 2, "day", s)?;
                NaiveDate::from_ymd_opt(year as i32, month, day)
                    .map(PartialDate::FullDate)
                    .ok_or_else(|| TemporalError::malformed(s, "no such calendar date"))
            }
            _ => Err(TemporalError::malformed(
                s,
                format!("expected at most 2 separators, found {}", fields.len() - 1),
            )),
        }
    }
}

impl fmt::Display for PartialDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartialDate::YearOnly(year) => write!(f, "{year:04}"),
            PartialDate::YearMonth(year, month) => write!(f, "{year:04}-{month:02}"),
            PartialDate::FullDate(date) => write!(f, "{}", date.format("%Y-%m-%d")),
        }
    }
}

impl Serialize for PartialDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PartialDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A partial date with an optional free-text qualifier (e.g. "approximately")
///
/// The qualifier is independent of the date's granularity and may be present
/// even when the date itself is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWithDescription {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub value: Option<PartialDate>,
}

impl DateWithDescription {
    pub fn new(description: Option<String>, value: Option<PartialDate>) -> Self {
        Self { description, value }
    }

    /// A date with no qualifier
    pub fn undescribed(value: Option<PartialDate>) -> Self {
        Self::new(None, value)
    }
}

/// A local date-time as recorded by the source registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredDateTime {
    pub value: NaiveDateTime,
}

impl StructuredDateTime {
    pub fn new(value: NaiveDateTime) -> Self {
        Self { value }
    }

    /// Seconds since the Unix epoch, reading the local value as UTC
    pub fn epoch_seconds(&self) -> i64 {
        utc_epoch_seconds(self.value)
    }
}

/// Seconds since the Unix epoch for a registry local date-time taken as UTC
pub fn utc_epoch_seconds(value: NaiveDateTime) -> i64 {
    value.and_utc().timestamp()
}
