//! Prediction record entity.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::Breed;

/// Input payload for [`PredictionRecord::new`].
///
/// The creator assigns the id and timestamp; the store never generates
/// either.
#[derive(Debug, Clone)]
pub struct PredictionDraft {
    /// Unique identifier, used as the persistence key.
    pub id: Uuid,
    /// Original upload name, when one was supplied.
    pub filename: Option<String>,
    /// Declared MIME type, when one was supplied.
    pub content_type: Option<String>,
    /// Predicted breed label.
    pub breed: Breed,
    /// Creation instant, UTC.
    pub timestamp: DateTime<Utc>,
}

/// One persisted classification event.
///
/// Immutable after construction: the id and timestamp are set exactly once,
/// and records are never updated — only inserted, read, and eventually
/// deleted by retention pruning.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRecord {
    id: Uuid,
    filename: Option<String>,
    content_type: Option<String>,
    breed: Breed,
    timestamp: DateTime<Utc>,
}

impl PredictionRecord {
    /// Creates a record from a draft.
    #[must_use]
    pub fn new(draft: PredictionDraft) -> Self {
        Self {
            id: draft.id,
            filename: draft.filename,
            content_type: draft.content_type,
            breed: draft.breed,
            timestamp: draft.timestamp,
        }
    }

    /// Returns the record id.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the original upload name, if any.
    #[must_use]
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Returns the declared MIME type, if any.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Returns the predicted breed.
    #[must_use]
    pub fn breed(&self) -> Breed {
        self.breed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
