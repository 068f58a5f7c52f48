//! Driving port for status check writes and reads.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Error, StatusCheck};

/// Request to record a status check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateStatusCheckRequest {
    /// Client-supplied name.
    pub client_name: String,
}

/// Serializable status check projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCheckPayload {
    /// Status check id.
    pub id: Uuid,
    /// Client-supplied name.
    pub client_name: String,
    /// Creation instant, UTC.
    pub timestamp: DateTime<Utc>,
}

impl From<StatusCheck> for StatusCheckPayload {
    fn from(check: StatusCheck) -> Self {
        Self {
            id: check.id(),
            client_name: check.client_name().to_owned(),
            timestamp: check.timestamp(),
        }
    }
}

/// Driving port for status check operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatusChecks: Send + Sync {
    /// Record a status check and return its projection.
    async fn create(
        &self,
        request: CreateStatusCheckRequest,
    ) -> Result<StatusCheckPayload, Error>;

    /// List recorded status checks in insertion order.
    async fn list(&self) -> Result<Vec<StatusCheckPayload>, Error>;
}

/// Fixture implementation for tests that do not need persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureStatusChecks;

#[async_trait]
impl StatusChecks for FixtureStatusChecks {
    async fn create(
        &self,
        request: CreateStatusCheckRequest,
    ) -> Result<StatusCheckPayload, Error> {
        Ok(StatusCheckPayload {
            id: Uuid::new_v4(),
            client_name: request.client_name,
            timestamp: Utc::now(),
        })
    }

    async fn list(&self) -> Result<Vec<StatusCheckPayload>, Error> {
        Ok(Vec::new())
    }
}
