//! Port for prediction record persistence.
//!
//! The trait models the keyed document collection the service stores
//! predictions in: insert, count, sorted/limited reads, batch delete by id
//! set, and a group-aggregate by breed. Adapters decide where the documents
//! actually live.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Breed, PredictionRecord};

/// Errors raised by prediction repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PredictionRepositoryError {
    /// Store connection could not be established.
    #[error("prediction store connection failed: {message}")]
    Connection {
        /// Adapter-supplied failure detail.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("prediction store query failed: {message}")]
    Query {
        /// Adapter-supplied failure detail.
        message: String,
    },
}

impl PredictionRepositoryError {
    /// Build a [`Self::Connection`] error.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Build a [`Self::Query`] error.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for writing, pruning, and reading prediction records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PredictionRepository: Send + Sync {
    /// Persist a prediction record under its own id.
    async fn insert(&self, record: &PredictionRecord) -> Result<(), PredictionRepositoryError>;

    /// Count all stored records.
    async fn count(&self) -> Result<u64, PredictionRepositoryError>;

    /// Ids of the `limit` oldest records, ascending by timestamp.
    ///
    /// Records sharing a timestamp order by insertion sequence so repeated
    /// calls select the same victims.
    async fn oldest_ids(&self, limit: usize) -> Result<Vec<Uuid>, PredictionRepositoryError>;

    /// Delete the given records in one batch.
    ///
    /// Idempotent: ids that are already gone are silently skipped, so
    /// overlapping prune batches from concurrent writers do not error.
    async fn delete_by_ids(&self, ids: &[Uuid]) -> Result<(), PredictionRepositoryError>;

    /// Up to `limit` most recent records, descending by timestamp.
    async fn recent(&self, limit: usize) -> Result<Vec<PredictionRecord>, PredictionRepositoryError>;

    /// Stored record count per breed, omitting breeds with no records.
    async fn counts_by_breed(&self) -> Result<Vec<(Breed, u64)>, PredictionRepositoryError>;
}

/// Fixture implementation for tests that do not exercise persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePredictionRepository;

#[async_trait]
impl PredictionRepository for FixturePredictionRepository {
    async fn insert(&self, _record: &PredictionRecord) -> Result<(), PredictionRepositoryError> {
        Ok(())
    }

    async fn count(&self) -> Result<u64, PredictionRepositoryError> {
        Ok(0)
    }

    async fn oldest_ids(&self, _limit: usize) -> Result<Vec<Uuid>, PredictionRepositoryError> {
        Ok(Vec::new())
    }

    async fn delete_by_ids(&self, _ids: &[Uuid]) -> Result<(), PredictionRepositoryError> {
        Ok(())
    }

    async fn recent(
        &self,
        _limit: usize,
    ) -> Result<Vec<PredictionRecord>, PredictionRepositoryError> {
        Ok(Vec::new())
    }

    async fn counts_by_breed(&self) -> Result<Vec<(Breed, u64)>, PredictionRepositoryError> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use chrono::Utc;
    use rstest::rstest;

    use super::*;
    use crate::domain::PredictionDraft;

    #[rstest]
    #[tokio::test]
    async fn fixture_reads_are_empty() {
        let repo = FixturePredictionRepository;
        assert_eq!(repo.count().await.expect("count succeeds"), 0);
        assert!(repo.recent(20).await.expect("recent succeeds").is_empty());
        assert!(
            repo.counts_by_breed()
                .await
                .expect("aggregate succeeds")
                .is_empty()
        );
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_writes_succeed() {
        let repo = FixturePredictionRepository;
        let record = PredictionRecord::new(PredictionDraft {
            id: Uuid::new_v4(),
            filename: None,
            content_type: None,
            breed: Breed::Jersey,
            timestamp: Utc::now(),
        });

        repo.insert(&record).await.expect("fixture insert succeeds");
        repo.delete_by_ids(&[record.id()])
            .await
            .expect("fixture delete succeeds");
    }

    #[rstest]
    fn error_constructors_format_messages() {
        let err = PredictionRepositoryError::query("broken cursor");
        assert!(err.to_string().contains("broken cursor"));
        let err = PredictionRepositoryError::connection("refused");
        assert!(err.to_string().contains("refused"));
    }
}
