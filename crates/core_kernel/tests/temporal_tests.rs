//! Comprehensive unit tests for the Temporal module
//!
//! Tests cover PartialDate parsing and formatting, fallback resolution,
//! DateWithDescription, and StructuredDateTime epoch conversion.

use core_kernel::{DateWithDescription, PartialDate, StructuredDateTime, resolve_partial_date};
use core_kernel::temporal::TemporalError;
use chrono::NaiveDate;
use proptest::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

mod resolution {
    use super::*;

    #[test]
    fn test_year_and_month_resolve_to_year_month() {
        let resolved = resolve_partial_date(None, Some(2021), Some(12)).unwrap();
        assert_eq!(resolved, Some(PartialDate::YearMonth(2021, 12)));
    }

    #[test]
    fn test_exact_date_wins_over_fallbacks() {
        let resolved = resolve_partial_date(Some(date(2021, 12, 31)), Some(2021), Some(12)).unwrap();
        assert_eq!(resolved, Some(PartialDate::FullDate(date(2021, 12, 31))));
    }

    #[test]
    fn test_year_alone_resolves_to_year_only() {
        let resolved = resolve_partial_date(None, Some(1950), None).unwrap();
        assert_eq!(resolved, Some(PartialDate::YearOnly(1950)));
    }

    #[test]
    fn test_month_without_year_is_absent() {
        assert_eq!(resolve_partial_date(None, None, Some(4)).unwrap(), None);
    }

    #[test]
    fn test_all_absent_is_absent() {
        assert_eq!(resolve_partial_date(None, None, None).unwrap(), None);
    }

    #[test]
    fn test_out_of_range_month_is_malformed() {
        let result = resolve_partial_date(None, Some(2021), Some(13));
        assert!(matches!(result, Err(TemporalError::MalformedTemporalValue { .. })));
    }

    #[test]
    fn test_year_outside_text_range_is_malformed() {
        for year in [-5, -1, 10_000] {
            assert!(matches!(
                resolve_partial_date(None, Some(year), None),
                Err(TemporalError::MalformedTemporalValue { .. })
            ));
            assert!(matches!(
                resolve_partial_date(None, Some(year), Some(6)),
                Err(TemporalError::MalformedTemporalValue { .. })
            ));
        }
    }

    #[test]
    fn test_exact_date_outside_text_range_is_malformed() {
        let result = resolve_partial_date(Some(date(-5, 1, 1)), None, None);
        assert!(matches!(result, Err(TemporalError::MalformedTemporalValue { .. })));
    }

    #[test]
    fn test_boundary_years_resolve() {
        assert_eq!(
            resolve_partial_date(None, Some(0), None).unwrap(),
            Some(PartialDate::YearOnly(0))
        );
        assert_eq!(
            resolve_partial_date(None, Some(9999), Some(12)).unwrap(),
            Some(PartialDate::YearMonth(9999, 12))
        );
    }

    #[test]
    fn test_out_of_range_month_ignored_when_exact_present() {
        let resolved = resolve_partial_date(Some(date(2000, 2, 29)), Some(2021), Some(13)).unwrap();
        assert_eq!(resolved, Some(PartialDate::FullDate(date(2000, 2, 29))));
    }
}

mod parsing {
    use super::*;

    #[test]
    fn test_zero_separators_is_year_only() {
        assert_eq!(PartialDate::parse("1972").unwrap(), PartialDate::YearOnly(1972));
    }

    #[test]
    fn test_one_separator_is_year_month() {
        assert_eq!(PartialDate::parse("1972-02").unwrap(), PartialDate::YearMonth(1972, 2));
    }

    #[test]
    fn test_two_separators_is_full_date() {
        assert_eq!(
            PartialDate::parse("1972-02-20").unwrap(),
            PartialDate::FullDate(date(1972, 2, 20))
        );
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(PartialDate::parse("  2021-12 ").unwrap(), PartialDate::YearMonth(2021, 12));
    }

    #[test]
    fn test_three_separators_is_malformed() {
        let result = PartialDate::parse("2021-13-1-1");
        assert!(matches!(result, Err(TemporalError::MalformedTemporalValue { .. })));
    }

    #[test]
    fn test_non_numeric_year_is_malformed() {
        assert!(PartialDate::parse("twenty").is_err());
    }

    #[test]
    fn test_invalid_month_is_malformed() {
        assert!(PartialDate::parse("2021-00").is_err());
        assert!(PartialDate::parse("2021-13").is_err());
    }

    #[test]
    fn test_impossible_calendar_date_is_malformed() {
        assert!(PartialDate::parse("2021-02-30").is_err());
    }

    #[test]
    fn test_empty_string_is_malformed() {
        assert!(PartialDate::parse("").is_err());
    }

    #[test]
    fn test_unpadded_fields_are_malformed() {
        for text in ["2021-1-1", "2021-01-1", "2021-1-01", "2021-1", "21", "987"] {
            assert!(
                matches!(PartialDate::parse(text), Err(TemporalError::MalformedTemporalValue { .. })),
                "{text:?} must be rejected"
            );
        }
    }

    #[test]
    fn test_signed_or_oversized_fields_are_malformed() {
        for text in ["+2021", "-2021", "+2021-01", "20210", "2021-012", "2021-01-011", "2021--01"] {
            assert!(
                matches!(PartialDate::parse(text), Err(TemporalError::MalformedTemporalValue { .. })),
                "{text:?} must be rejected"
            );
        }
    }

    #[test]
    fn test_non_ascii_digits_are_malformed() {
        assert!(PartialDate::parse("２０２１").is_err());
        assert!(PartialDate::parse("2021-0x").is_err());
    }

    #[test]
    fn test_zero_padded_early_year_parses() {
        assert_eq!(PartialDate::parse("0987").unwrap(), PartialDate::YearOnly(987));
    }

    #[test]
    fn test_error_message_names_value() {
        let err = PartialDate::parse("1-2-3-4").unwrap_err();
        assert!(err.to_string().contains("1-2-3-4"));
    }
}

mod accessors {
    use super::*;

    #[test]
    fn test_year_and_month_accessors() {
        assert_eq!(PartialDate::YearOnly(2001).year(), 2001);
        assert_eq!(PartialDate::YearOnly(2001).month(), None);
        assert_eq!(PartialDate::YearMonth(2001, 7).month(), Some(7));
        assert_eq!(PartialDate::FullDate(date(2001, 7, 4)).month(), Some(7));
        assert_eq!(PartialDate::FullDate(date(2001, 7, 4)).full_date(), Some(date(2001, 7, 4)));
        assert_eq!(PartialDate::YearMonth(2001, 7).full_date(), None);
    }
}

mod serialization {
    use super::*;

    #[test]
    fn test_partial_date_serializes_as_text() {
        let json = serde_json::to_string(&PartialDate::YearMonth(2021, 12)).unwrap();
        assert_eq!(json, "\"2021-12\"");
    }

    #[test]
    fn test_malformed_text_fails_deserialization() {
        let result: Result<PartialDate, _> = serde_json::from_str("\"2021-13-1-1\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_date_with_description_omits_absent_description() {
        let value = DateWithDescription::undescribed(Some(PartialDate::YearOnly(1950)));
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json, serde_json::json!({ "value": "1950" }));
    }

    #[test]
    fn test_date_with_description_keeps_qualifier_without_value() {
        let value = DateWithDescription::new(Some("approximately".to_string()), None);
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json, serde_json::json!({ "description": "approximately", "value": null }));
    }
}

mod structured_date_time {
    use super::*;

    #[test]
    fn test_epoch_seconds_of_registry_timestamp() {
        let value = date(2022, 1, 5).and_hms_opt(12, 3, 52).unwrap();
        assert_eq!(StructuredDateTime::new(value).epoch_seconds(), 1_641_384_232);
    }
}

proptest! {
    #[test]
    fn partial_date_text_is_stable(year in 0i32..=9999, month in 1u32..=12, day in 1u32..=28) {
        for value in [
            PartialDate::YearOnly(year),
            PartialDate::YearMonth(year, month),
            PartialDate::FullDate(date(year, month, day)),
        ] {
            prop_assert_eq!(PartialDate::parse(&value.to_string()).unwrap(), value);
        }
    }

    #[test]
    fn resolved_year_only_text_round_trips(year in -20_000i32..20_000) {
        match resolve_partial_date(None, Some(year), None) {
            Ok(Some(value)) => prop_assert_eq!(PartialDate::parse(&value.to_string()).unwrap(), value),
            Ok(None) => prop_assert!(false, "a year alone always resolves"),
            Err(_) => prop_assert!(!(0..=9999).contains(&year)),
        }
    }

    #[test]
    fn exact_date_always_wins(
        year in 1000i32..9999,
        month in 1u32..=12,
        day in 1u32..=28,
        fallback_year in proptest::option::of(1000i32..9999),
        fallback_month in proptest::option::of(0u32..20),
    ) {
        let exact = date(year, month, day);
        let resolved = resolve_partial_date(Some(exact), fallback_year, fallback_month).unwrap();
        prop_assert_eq!(resolved, Some(PartialDate::FullDate(exact)));
    }
}
