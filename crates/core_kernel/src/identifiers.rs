//! Strongly-typed envelope identifiers
//!
//! The token id (`jti`) and the transaction id (`txn`) serve different
//! downstream purposes (idempotency and transaction correlation). Separate
//! newtypes keep them from being swapped or derived from one another.
//! Both display and serialize as the bare UUID, matching the wire form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::ports::IdGenerator;

macro_rules! envelope_id {
    ($(#[$meta:meta])* $name:ident, $claim:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Envelope claim this identifier is carried under
            pub const CLAIM: &'static str = $claim;

            /// Draws a fresh identifier from the generator
            pub fn issue(ids: &impl IdGenerator) -> Self {
                Self(ids.next_id())
            }

            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s.trim()).map(Self)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Uuid {
                id.0
            }
        }
    };
}

envelope_id!(
    /// Unique token id, one per notification
    TokenId,
    "jti"
);
envelope_id!(
    /// Transaction id used to correlate a notification with its audit record
    TransactionId,
    "txn"
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::SequenceIdGenerator;

    #[test]
    fn test_issue_draws_from_generator() {
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let ids = SequenceIdGenerator::new([first, second]);

        assert_eq!(TokenId::issue(&ids).as_uuid(), &first);
        assert_eq!(TransactionId::issue(&ids).as_uuid(), &second);
    }

    #[test]
    fn test_display_is_bare_uuid() {
        let uuid = Uuid::new_v4();
        assert_eq!(TransactionId::from(uuid).to_string(), uuid.to_string());
    }

    #[test]
    fn test_serializes_as_plain_uuid() {
        let uuid = Uuid::new_v4();
        let json = serde_json::to_string(&TokenId::from(uuid)).unwrap();
        assert_eq!(json, format!("\"{uuid}\""));
    }
}
