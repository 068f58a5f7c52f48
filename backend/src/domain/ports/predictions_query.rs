//! Driving port for prediction reads and analytics.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Breed, Error, PredictionRecord};

/// Query parameters for the recent-predictions read.
///
/// `limit` carries the raw client value; the service clamps it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentPredictionsRequest {
    /// Requested maximum number of records.
    pub limit: i64,
}

/// Serializable prediction record projection returned by queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecordPayload {
    /// Record id.
    pub id: Uuid,
    /// Original upload name, if any.
    pub filename: Option<String>,
    /// Declared MIME type, if any.
    pub content_type: Option<String>,
    /// Predicted breed label.
    pub breed: Breed,
    /// Creation instant, UTC.
    pub timestamp: DateTime<Utc>,
}

impl From<PredictionRecord> for PredictionRecordPayload {
    fn from(record: PredictionRecord) -> Self {
        Self {
            id: record.id(),
            filename: record.filename().map(str::to_owned),
            content_type: record.content_type().map(str::to_owned),
            breed: record.breed(),
            timestamp: record.timestamp(),
        }
    }
}

/// Breed frequency summary over the full stored record set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    /// Count per breed label, omitting breeds with no records.
    pub by_breed: BTreeMap<String, u64>,
    /// Sum of all per-breed counts.
    pub total: u64,
    /// Breed with the maximum count; absent when no records exist.
    pub most_common: Option<Breed>,
}

impl AnalyticsSummary {
    /// Summary of an empty record set.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            by_breed: BTreeMap::new(),
            total: 0,
            most_common: None,
        }
    }
}

/// Driving port for read-only access to stored predictions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PredictionsQuery: Send + Sync {
    /// Most recent records, newest first.
    ///
    /// The requested limit is clamped to `[1, 50]`. No pruning side effect.
    async fn recent(
        &self,
        request: RecentPredictionsRequest,
    ) -> Result<Vec<PredictionRecordPayload>, Error>;

    /// Breed distribution over the full stored record set.
    async fn summary(&self) -> Result<AnalyticsSummary, Error>;
}

/// Fixture query implementation for tests that do not need persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePredictionsQuery;

#[async_trait]
impl PredictionsQuery for FixturePredictionsQuery {
    async fn recent(
        &self,
        _request: RecentPredictionsRequest,
    ) -> Result<Vec<PredictionRecordPayload>, Error> {
        Ok(Vec::new())
    }

    async fn summary(&self) -> Result<AnalyticsSummary, Error> {
        Ok(AnalyticsSummary::empty())
    }
}
