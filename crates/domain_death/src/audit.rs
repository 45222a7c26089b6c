//! Enrichment audit records
//!
//! Every generated notification is accompanied by an audit record that lets
//! the audit trail correlate the notification without holding personal data:
//! the transaction id plus a SHA-256 digest of the notification's JSON form.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use core_kernel::TransactionId;
use crate::error::EnrichmentError;
use crate::notification::DeathNotification;

/// Audit record for one enriched notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentAudit {
    pub txn: TransactionId,
    /// Lowercase hex SHA-256 of the serialized notification
    pub notification_digest: String,
}

impl EnrichmentAudit {
    /// Builds the audit record for a notification
    pub fn for_notification(notification: &DeathNotification) -> Result<Self, EnrichmentError> {
        let canonical = serde_json::to_vec(notification)?;
        Ok(Self {
            txn: notification.txn,
            notification_digest: format!("{:x}", Sha256::digest(&canonical)),
        })
    }
}
