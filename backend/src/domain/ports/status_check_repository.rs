//! Port for status check persistence.

use async_trait::async_trait;

use crate::domain::StatusCheck;

/// Errors raised by status check repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatusCheckRepositoryError {
    /// Store connection could not be established.
    #[error("status check store connection failed: {message}")]
    Connection {
        /// Adapter-supplied failure detail.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("status check store query failed: {message}")]
    Query {
        /// Adapter-supplied failure detail.
        message: String,
    },
}

impl StatusCheckRepositoryError {
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

/// Port for writing and listing status checks.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatusCheckRepository: Send + Sync {
    /// Persist a status check under its own id.
    async fn insert(&self, check: &StatusCheck) -> Result<(), StatusCheckRepositoryError>;

    /// Up to `limit` status checks in insertion order.
    async fn list(&self, limit: usize) -> Result<Vec<StatusCheck>, StatusCheckRepositoryError>;
}

/// Fixture implementation for tests that do not exercise persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureStatusCheckRepository;

#[async_trait]
impl StatusCheckRepository for FixtureStatusCheckRepository {
    async fn insert(&self, _check: &StatusCheck) -> Result<(), StatusCheckRepositoryError> {
        Ok(())
    }

    async fn list(&self, _limit: usize) -> Result<Vec<StatusCheck>, StatusCheckRepositoryError> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::domain::StatusCheckDraft;

    #[tokio::test]
    async fn fixture_round_trip_is_a_no_op() {
        let repo = FixtureStatusCheckRepository;
        let check = StatusCheck::new(StatusCheckDraft {
            id: Uuid::new_v4(),
            client_name: "probe".to_owned(),
            timestamp: Utc::now(),
        })
        .expect("valid status check");

        repo.insert(&check).await.expect("fixture insert succeeds");
        assert!(repo.list(1000).await.expect("fixture list succeeds").is_empty());
    }
}
