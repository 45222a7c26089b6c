//! Death notification envelope
//!
//! Wraps a classified event with audit metadata. The envelope follows the
//! security-event-token claim names; `aud`, `exp`, `iss`, `nbf` and `sub`
//! are owned by the downstream issuer and always left unset here.

use serde::{Deserialize, Serialize};

use core_kernel::{Clock, IdGenerator, TokenId, TransactionId};
use crate::events::DeathEvent;

/// Container holding the single event under its fixed key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeathRegistrationEvents {
    pub death_registration_event: DeathEvent,
}

/// A canonical death notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeathNotification {
    pub aud: Option<String>,
    pub events: DeathRegistrationEvents,
    pub exp: Option<i64>,
    /// Issued-at, epoch seconds
    pub iat: i64,
    pub iss: Option<String>,
    /// Unique token id
    pub jti: TokenId,
    pub nbf: Option<i64>,
    pub sub: Option<String>,
    /// Time of event, epoch seconds
    pub toe: i64,
    /// Unique transaction id
    pub txn: TransactionId,
}

impl DeathNotification {
    pub fn event(&self) -> &DeathEvent {
        &self.events.death_registration_event
    }

    /// Returns a copy with the same envelope and a different event payload
    pub fn with_event(&self, event: DeathEvent) -> Self {
        Self {
            events: DeathRegistrationEvents {
                death_registration_event: event,
            },
            ..self.clone()
        }
    }
}

/// Wraps an event in a freshly generated envelope
///
/// `jti` and `txn` are drawn independently from the generator; `toe` comes
/// from the event's own registry timestamp so it always agrees with the
/// event variant.
pub fn generate_notification(
    event: DeathEvent,
    clock: &impl Clock,
    ids: &impl IdGenerator,
) -> DeathNotification {
    let iat = clock.epoch_seconds();
    let jti = TokenId::issue(ids);
    let toe = event.time_of_event();
    let txn = TransactionId::issue(ids);

    DeathNotification {
        aud: None,
        events: DeathRegistrationEvents {
            death_registration_event: event,
        },
        exp: None,
        iat,
        iss: None,
        jti,
        nbf: None,
        sub: None,
        toe,
        txn,
    }
}
