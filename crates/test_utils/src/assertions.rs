//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for notifications that give
//! more meaningful error messages than standard assertions.

use domain_death::{DeathNotification, Name, MAIDEN_NAME_DESCRIPTION};

/// Asserts that two notifications carry identical envelope claims
///
/// # Panics
///
/// Panics naming the first claim that differs
pub fn assert_envelope_eq(actual: &DeathNotification, expected: &DeathNotification) {
    assert_eq!(actual.iat, expected.iat, "iat differs");
    assert_eq!(actual.jti, expected.jti, "jti differs");
    assert_eq!(actual.txn, expected.txn, "txn differs");
    assert_eq!(actual.toe, expected.toe, "toe differs");
    assert_eq!(actual.aud, expected.aud, "aud differs");
    assert_eq!(actual.exp, expected.exp, "exp differs");
    assert_eq!(actual.iss, expected.iss, "iss differs");
    assert_eq!(actual.nbf, expected.nbf, "nbf differs");
    assert_eq!(actual.sub, expected.sub, "sub differs");
}

/// Asserts that the issuer-owned claims are unset
pub fn assert_issuer_claims_unset(notification: &DeathNotification) {
    assert!(notification.aud.is_none(), "aud should be unset");
    assert!(notification.exp.is_none(), "exp should be unset");
    assert!(notification.iss.is_none(), "iss should be unset");
    assert!(notification.nbf.is_none(), "nbf should be unset");
    assert!(notification.sub.is_none(), "sub should be unset");
}

/// Asserts the structural ordering rules of an assembled name list
///
/// The first name is undescribed, every name has exactly one family part
/// placed last, and a maiden entry (if any) is the final element.
pub fn assert_name_list_well_formed(names: &[Name]) {
    assert!(!names.is_empty(), "name list must not be empty");
    assert_eq!(names[0].description, None, "primary name must be undescribed");

    for (index, name) in names.iter().enumerate() {
        let family_parts = name
            .name_parts
            .iter()
            .filter(|p| p.kind == domain_death::NamePartType::FamilyName)
            .count();
        assert_eq!(family_parts, 1, "name {index} must have exactly one family part");
        assert_eq!(
            name.name_parts.last().map(|p| p.kind),
            Some(domain_death::NamePartType::FamilyName),
            "name {index} must end with its family part"
        );
    }

    let maiden_positions: Vec<usize> = names
        .iter()
        .enumerate()
        .filter(|(_, n)| n.description.as_deref() == Some(MAIDEN_NAME_DESCRIPTION))
        .map(|(i, _)| i)
        .collect();
    if let Some(&position) = maiden_positions.last() {
        assert_eq!(position, names.len() - 1, "maiden name must be last");
    }
}
