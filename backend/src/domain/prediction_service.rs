//! Prediction domain services.
//!
//! `PredictionService` drives the accept → classify → persist → prune
//! pipeline behind the predict driving port; `PredictionQueryService` serves
//! the read side over the same record set.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::warn;
use uuid::Uuid;

use crate::domain::ports::{
    AnalyticsSummary, BreedClassifier, BreedClassifierError, PredictCommand, PredictRequest,
    PredictResponse, PredictionRecordPayload, PredictionRepository, PredictionRepositoryError,
    PredictionsQuery, RecentPredictionsRequest, ScratchStore,
};
use crate::domain::{Breed, Error, PredictionDraft, PredictionRecord, UploadGate};

/// Maximum number of prediction records retained in the store.
pub const RETENTION_BOUND: usize = 20;

/// Smallest limit honoured by the recent-predictions read.
const RECENT_LIMIT_MIN: i64 = 1;

/// Largest limit honoured by the recent-predictions read.
const RECENT_LIMIT_MAX: i64 = 50;

fn map_repository_error(error: PredictionRepositoryError) -> Error {
    match error {
        PredictionRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("prediction store unavailable: {message}"))
        }
        PredictionRepositoryError::Query { message } => {
            Error::internal(format!("prediction store error: {message}"))
        }
    }
}

fn extension_of(filename: Option<&str>) -> Option<&str> {
    filename.and_then(|name| name.rsplit_once('.').map(|(_, ext)| ext))
}

/// Prediction service implementing the predict driving port.
///
/// The pipeline commits at the repository insert: everything before it is
/// discardable, everything after it (pruning, scratch cleanup) is
/// best-effort maintenance that never rolls the committed record back.
pub struct PredictionService<R, C, S> {
    repository: Arc<R>,
    classifier: Arc<C>,
    scratch: Arc<S>,
    gate: UploadGate,
    retention_bound: usize,
}

impl<R, C, S> PredictionService<R, C, S> {
    /// Create a service with the stock gate and retention bound.
    pub fn new(repository: Arc<R>, classifier: Arc<C>, scratch: Arc<S>) -> Self {
        Self {
            repository,
            classifier,
            scratch,
            gate: UploadGate::new(),
            retention_bound: RETENTION_BOUND,
        }
    }

    /// Override the retention bound.
    #[must_use]
    pub fn with_retention_bound(mut self, bound: usize) -> Self {
        self.retention_bound = bound;
        self
    }
}

impl<R, C, S> PredictionService<R, C, S>
where
    R: PredictionRepository,
    C: BreedClassifier,
    S: ScratchStore,
{
    /// Evict the oldest records once the total exceeds the retention bound.
    ///
    /// Concurrent writers may both observe an excess and issue overlapping
    /// delete batches; the repository's idempotent deletes make that safe.
    async fn prune_history(&self) -> Result<(), PredictionRepositoryError> {
        let total = self.repository.count().await?;
        let bound = self.retention_bound as u64;
        if total <= bound {
            return Ok(());
        }

        let excess = usize::try_from(total - bound).unwrap_or(usize::MAX);
        let ids = self.repository.oldest_ids(excess).await?;
        if ids.is_empty() {
            return Ok(());
        }
        self.repository.delete_by_ids(&ids).await
    }

    async fn classify_and_record(
        &self,
        filename: Option<String>,
        content_type: Option<String>,
        bytes: &[u8],
    ) -> Result<PredictResponse, Error> {
        let breed = self
            .classifier
            .classify(filename.clone(), bytes)
            .await
            .map_err(|BreedClassifierError::Inference { message }| {
                Error::internal(format!("breed classification failed: {message}"))
            })?;

        let record = PredictionRecord::new(PredictionDraft {
            id: Uuid::new_v4(),
            filename,
            content_type,
            breed,
            timestamp: Utc::now(),
        });
        self.repository
            .insert(&record)
            .await
            .map_err(map_repository_error)?;

        // The inserted record is already committed; pruning is best-effort.
        if let Err(error) = self.prune_history().await {
            warn!(%error, "prediction history pruning failed");
        }

        Ok(PredictResponse { breed })
    }
}

#[async_trait]
impl<R, C, S> PredictCommand for PredictionService<R, C, S>
where
    R: PredictionRepository,
    C: BreedClassifier,
    S: ScratchStore,
{
    async fn predict(&self, request: PredictRequest) -> Result<PredictResponse, Error> {
        let PredictRequest {
            filename,
            content_type,
            bytes,
        } = request;

        if content_type.is_none() {
            return Err(Error::invalid_request("Please upload an image file"));
        }
        if !self.gate.accept(filename.as_deref(), content_type.as_deref()) {
            return Err(Error::invalid_request(
                "Uploaded image does not appear to be a cow (mock heuristic)",
            ));
        }

        let extension = extension_of(filename.as_deref()).map(str::to_owned);
        let stashed = match self.scratch.stash(&bytes, extension).await {
            Ok(handle) => Some(handle),
            Err(error) => {
                warn!(%error, "scratch stash failed, classifying without it");
                None
            }
        };

        let outcome = self
            .classify_and_record(filename, content_type, &bytes)
            .await;

        if let Some(handle) = stashed {
            if let Err(error) = self.scratch.discard(handle).await {
                warn!(%error, "scratch cleanup failed");
            }
        }

        outcome
    }
}

/// Prediction service implementing the read-side driving port.
pub struct PredictionQueryService<R> {
    repository: Arc<R>,
}

impl<R> PredictionQueryService<R> {
    /// Create a query service over the prediction repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> PredictionsQuery for PredictionQueryService<R>
where
    R: PredictionRepository,
{
    async fn recent(
        &self,
        request: RecentPredictionsRequest,
    ) -> Result<Vec<PredictionRecordPayload>, Error> {
        let limit = request.limit.clamp(RECENT_LIMIT_MIN, RECENT_LIMIT_MAX);
        let limit = usize::try_from(limit).unwrap_or_default();
        let records = self
            .repository
            .recent(limit)
            .await
            .map_err(map_repository_error)?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    /// Aggregate counts per breed with the grand total and the most common
    /// label. Ties resolve to the breed listed first in [`Breed::ALL`].
    async fn summary(&self) -> Result<AnalyticsSummary, Error> {
        let counts = self
            .repository
            .counts_by_breed()
            .await
            .map_err(map_repository_error)?;

        let mut summary = AnalyticsSummary::empty();
        let mut best: Option<(Breed, u64)> = None;
        for breed in Breed::ALL {
            let Some((_, count)) = counts.iter().find(|(candidate, _)| *candidate == breed)
            else {
                continue;
            };
            if *count == 0 {
                continue;
            }
            summary.by_breed.insert(breed.to_string(), *count);
            summary.total += count;
            match best {
                Some((_, best_count)) if best_count >= *count => {}
                _ => best = Some((breed, *count)),
            }
        }
        summary.most_common = best.map(|(breed, _)| breed);
        Ok(summary)
    }
}

#[cfg(test)]
#[path = "prediction_service_tests.rs"]
mod tests;
