//! Tests for notification minimisation and enrichment audit

use std::cell::RefCell;

use proptest::prelude::*;

use core_kernel::RandomIdGenerator;
use domain_death::{
    minimise, DeathEvent, DeathRegistration, DeathRegistrationUpdate, EnrichmentAudit,
    EnrichmentField, EnrichmentService, MinimisationPolicy, PassthroughPolicy,
};
use test_utils::{assert_envelope_eq, mappable_record_strategy, IdFixtures, RecordFixtures};

/// Policy that records which variant filter was dispatched and blanks the
/// free-format death date when it is not allow-listed
#[derive(Default)]
struct RecordingPolicy {
    calls: RefCell<Vec<&'static str>>,
}

impl MinimisationPolicy for RecordingPolicy {
    fn minimise_registration(
        &self,
        mut event: DeathRegistration,
        fields: &[EnrichmentField],
    ) -> DeathRegistration {
        self.calls.borrow_mut().push("registration");
        if !fields.contains(&EnrichmentField::FreeFormatDeathDate) {
            event.free_format_death_date = None;
        }
        event
    }

    fn minimise_update(
        &self,
        mut event: DeathRegistrationUpdate,
        fields: &[EnrichmentField],
    ) -> DeathRegistrationUpdate {
        self.calls.borrow_mut().push("update");
        if !fields.contains(&EnrichmentField::FreeFormatDeathDate) {
            event.free_format_death_date = None;
        }
        event
    }
}

mod dispatch {
    use super::*;

    #[test]
    fn test_registration_dispatches_to_registration_filter() {
        let service = EnrichmentService::new(IdFixtures::clock(), IdFixtures::generator());
        let notification = service.generate(&RecordFixtures::new_registration()).unwrap();
        let policy = RecordingPolicy::default();

        let minimised = service.minimise(&notification, &[EnrichmentField::Name], &policy);

        assert_eq!(*policy.calls.borrow(), vec!["registration"]);
        let DeathEvent::Registration(event) = minimised.event() else {
            panic!("variant must be preserved");
        };
        assert_eq!(event.free_format_death_date, None);
        assert_envelope_eq(&minimised, &notification);
    }

    #[test]
    fn test_update_dispatches_to_update_filter() {
        let service = EnrichmentService::new(IdFixtures::clock(), IdFixtures::generator());
        let notification = service.generate(&RecordFixtures::correction()).unwrap();
        let policy = RecordingPolicy::default();

        let minimised = minimise(&notification, &[], &policy);

        assert_eq!(*policy.calls.borrow(), vec!["update"]);
        assert!(matches!(minimised.event(), DeathEvent::Update(_)));
        assert_envelope_eq(&minimised, &notification);
    }

    #[test]
    fn test_passthrough_returns_identical_notification() {
        let service = EnrichmentService::new(IdFixtures::clock(), IdFixtures::generator());
        let notification = service.generate(&RecordFixtures::new_registration()).unwrap();

        let minimised = minimise(&notification, &EnrichmentField::ALL, &PassthroughPolicy);
        assert_eq!(minimised, notification);
    }

    #[test]
    fn test_policy_usable_as_trait_object() {
        let service = EnrichmentService::new(IdFixtures::clock(), IdFixtures::generator());
        let notification = service.generate(&RecordFixtures::correction()).unwrap();
        let policy: Box<dyn MinimisationPolicy> = Box::new(PassthroughPolicy);

        let minimised = minimise(&notification, &[], policy.as_ref());
        assert_eq!(minimised, notification);
    }
}

mod audit {
    use super::*;

    #[test]
    fn test_audit_carries_txn_and_digest() {
        let service = EnrichmentService::new(IdFixtures::clock(), IdFixtures::generator());
        let notification = service.generate(&RecordFixtures::correction()).unwrap();

        let audit = service.audit(&notification).unwrap();
        assert_eq!(audit.txn, notification.txn);
        assert_eq!(audit.notification_digest.len(), 64);
        assert!(audit.notification_digest.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_audit_digest_is_deterministic() {
        let service = EnrichmentService::new(IdFixtures::clock(), IdFixtures::generator());
        let notification = service.generate(&RecordFixtures::correction()).unwrap();

        let first = EnrichmentAudit::for_notification(&notification).unwrap();
        let second = EnrichmentAudit::for_notification(&notification.clone()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_audit_digest_changes_with_content() {
        let service = EnrichmentService::new(IdFixtures::clock(), IdFixtures::generator());
        let correction = service.generate(&RecordFixtures::correction()).unwrap();
        let registration = correction.with_event(
            service
                .generate(&RecordFixtures::new_registration())
                .unwrap()
                .event()
                .clone(),
        );

        let a = service.audit(&correction).unwrap();
        let b = service.audit(&registration).unwrap();
        assert_eq!(a.txn, b.txn);
        assert_ne!(a.notification_digest, b.notification_digest);
    }

    #[test]
    fn test_audit_serializes_camel_case() {
        let service = EnrichmentService::new(IdFixtures::clock(), IdFixtures::generator());
        let notification = service.generate(&RecordFixtures::correction()).unwrap();
        let json = serde_json::to_value(service.audit(&notification).unwrap()).unwrap();
        assert_eq!(json["txn"], serde_json::json!(IdFixtures::second().to_string()));
        assert!(json["notificationDigest"].is_string());
    }
}

proptest! {
    #[test]
    fn minimisation_preserves_envelope(
        record in mappable_record_strategy(),
        fields in proptest::sample::subsequence(EnrichmentField::ALL.to_vec(), 0..=9),
    ) {
        let service = EnrichmentService::new(IdFixtures::clock(), RandomIdGenerator);
        let notification = service.generate(&record).unwrap();

        for minimised in [
            minimise(&notification, &fields, &PassthroughPolicy),
            minimise(&notification, &fields, &RecordingPolicy::default()),
        ] {
            prop_assert_eq!(minimised.iat, notification.iat);
            prop_assert_eq!(minimised.jti, notification.jti);
            prop_assert_eq!(minimised.txn, notification.txn);
            prop_assert_eq!(minimised.toe, notification.toe);
            prop_assert_eq!(
                minimised.event().is_registration(),
                notification.event().is_registration()
            );
        }
    }
}
