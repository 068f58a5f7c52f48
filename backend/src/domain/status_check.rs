//! Status check entity.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Input payload for [`StatusCheck::new`].
#[derive(Debug, Clone)]
pub struct StatusCheckDraft {
    /// Unique identifier, used as the persistence key.
    pub id: Uuid,
    /// Client-supplied name.
    pub client_name: String,
    /// Creation instant, UTC.
    pub timestamp: DateTime<Utc>,
}

/// Validation errors raised by [`StatusCheck::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StatusCheckValidationError {
    /// Client name is empty once trimmed of whitespace.
    #[error("client name must not be empty")]
    EmptyClientName,
}

/// A recorded status check: write-once, read-many, never pruned.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusCheck {
    id: Uuid,
    client_name: String,
    timestamp: DateTime<Utc>,
}

impl StatusCheck {
    /// Creates a validated status check.
    pub fn new(draft: StatusCheckDraft) -> Result<Self, StatusCheckValidationError> {
        if draft.client_name.trim().is_empty() {
            return Err(StatusCheckValidationError::EmptyClientName);
        }
        Ok(Self {
            id: draft.id,
            client_name: draft.client_name,
            timestamp: draft.timestamp,
        })
    }

    /// Returns the status check id.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the client-supplied name.
    #[must_use]
    pub fn client_name(&self) -> &str {
        self.client_name.as_str()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
