//! In-memory document collections backing the repository ports.
//!
//! The external document store is a deployment concern; these adapters keep
//! the collections in process memory so the service runs self-contained. A
//! store-backed adapter can replace them without touching the domain.
//!
//! Each stored prediction carries an insertion sequence used as the
//! secondary sort key, so ordering is deterministic even when timestamps
//! collide.

use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::ports::{
    PredictionRepository, PredictionRepositoryError, StatusCheckRepository,
    StatusCheckRepositoryError,
};
use crate::domain::{Breed, PredictionRecord, StatusCheck};

#[derive(Debug, Clone)]
struct StoredPrediction {
    seq: u64,
    record: PredictionRecord,
}

#[derive(Debug, Default)]
struct PredictionTable {
    rows: Vec<StoredPrediction>,
    next_seq: u64,
}

/// In-memory prediction repository.
#[derive(Debug, Default)]
pub struct InMemoryPredictionRepository {
    inner: RwLock<PredictionTable>,
}

impl InMemoryPredictionRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PredictionRepository for InMemoryPredictionRepository {
    async fn insert(&self, record: &PredictionRecord) -> Result<(), PredictionRepositoryError> {
        let mut table = self.inner.write().await;
        let seq = table.next_seq;
        table.next_seq += 1;
        table.rows.push(StoredPrediction {
            seq,
            record: record.clone(),
        });
        Ok(())
    }

    async fn count(&self) -> Result<u64, PredictionRepositoryError> {
        let table = self.inner.read().await;
        Ok(table.rows.len() as u64)
    }

    async fn oldest_ids(&self, limit: usize) -> Result<Vec<Uuid>, PredictionRepositoryError> {
        let table = self.inner.read().await;
        let mut rows: Vec<&StoredPrediction> = table.rows.iter().collect();
        rows.sort_by_key(|row| (row.record.timestamp(), row.seq));
        Ok(rows
            .into_iter()
            .take(limit)
            .map(|row| row.record.id())
            .collect())
    }

    async fn delete_by_ids(&self, ids: &[Uuid]) -> Result<(), PredictionRepositoryError> {
        let victims: HashSet<Uuid> = ids.iter().copied().collect();
        let mut table = self.inner.write().await;
        table.rows.retain(|row| !victims.contains(&row.record.id()));
        Ok(())
    }

    async fn recent(
        &self,
        limit: usize,
    ) -> Result<Vec<PredictionRecord>, PredictionRepositoryError> {
        let table = self.inner.read().await;
        let mut rows: Vec<&StoredPrediction> = table.rows.iter().collect();
        rows.sort_by_key(|row| std::cmp::Reverse((row.record.timestamp(), row.seq)));
        Ok(rows
            .into_iter()
            .take(limit)
            .map(|row| row.record.clone())
            .collect())
    }

    async fn counts_by_breed(&self) -> Result<Vec<(Breed, u64)>, PredictionRepositoryError> {
        let table = self.inner.read().await;
        let mut counts = Vec::new();
        for breed in Breed::ALL {
            let count = table
                .rows
                .iter()
                .filter(|row| row.record.breed() == breed)
                .count() as u64;
            if count > 0 {
                counts.push((breed, count));
            }
        }
        Ok(counts)
    }
}

/// In-memory status check repository, insertion ordered.
#[derive(Debug, Default)]
pub struct InMemoryStatusCheckRepository {
    inner: RwLock<Vec<StatusCheck>>,
}

impl InMemoryStatusCheckRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StatusCheckRepository for InMemoryStatusCheckRepository {
    async fn insert(&self, check: &StatusCheck) -> Result<(), StatusCheckRepositoryError> {
        self.inner.write().await.push(check.clone());
        Ok(())
    }

    async fn list(&self, limit: usize) -> Result<Vec<StatusCheck>, StatusCheckRepositoryError> {
        let checks = self.inner.read().await;
        Ok(checks.iter().take(limit).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use chrono::{DateTime, TimeZone, Utc};
    use rstest::rstest;

    use super::*;
    use crate::domain::{PredictionDraft, StatusCheckDraft};

    fn timestamp(second: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, second)
            .single()
            .expect("valid fixture timestamp")
    }

    fn record(breed: Breed, at: DateTime<Utc>) -> PredictionRecord {
        PredictionRecord::new(PredictionDraft {
            id: Uuid::new_v4(),
            filename: Some("cow.png".to_owned()),
            content_type: Some("image/png".to_owned()),
            breed,
            timestamp: at,
        })
    }

    #[rstest]
    #[tokio::test]
    async fn oldest_ids_orders_by_timestamp_ascending() {
        let repo = InMemoryPredictionRepository::new();
        let newer = record(Breed::Jersey, timestamp(30));
        let older = record(Breed::Gir, timestamp(10));
        repo.insert(&newer).await.expect("insert succeeds");
        repo.insert(&older).await.expect("insert succeeds");

        let ids = repo.oldest_ids(1).await.expect("oldest succeeds");
        assert_eq!(ids, vec![older.id()]);
    }

    #[rstest]
    #[tokio::test]
    async fn equal_timestamps_order_by_insertion_sequence() {
        let repo = InMemoryPredictionRepository::new();
        let first = record(Breed::Jersey, timestamp(10));
        let second = record(Breed::Gir, timestamp(10));
        repo.insert(&first).await.expect("insert succeeds");
        repo.insert(&second).await.expect("insert succeeds");

        let ids = repo.oldest_ids(1).await.expect("oldest succeeds");
        assert_eq!(ids, vec![first.id()]);

        let recent = repo.recent(1).await.expect("recent succeeds");
        assert_eq!(recent[0].id(), second.id());
    }

    #[rstest]
    #[tokio::test]
    async fn recent_returns_newest_first_up_to_limit() {
        let repo = InMemoryPredictionRepository::new();
        let records: Vec<PredictionRecord> = (0..5)
            .map(|second| record(Breed::Sahiwal, timestamp(second)))
            .collect();
        for rec in &records {
            repo.insert(rec).await.expect("insert succeeds");
        }

        let recent = repo.recent(3).await.expect("recent succeeds");
        let ids: Vec<Uuid> = recent.iter().map(PredictionRecord::id).collect();
        assert_eq!(
            ids,
            vec![records[4].id(), records[3].id(), records[2].id()]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn delete_is_idempotent_for_missing_ids() {
        let repo = InMemoryPredictionRepository::new();
        let kept = record(Breed::Jersey, timestamp(10));
        let gone = record(Breed::Gir, timestamp(20));
        repo.insert(&kept).await.expect("insert succeeds");
        repo.insert(&gone).await.expect("insert succeeds");

        repo.delete_by_ids(&[gone.id()]).await.expect("delete succeeds");
        // Re-deleting the same id plus an unknown one is a silent no-op.
        repo.delete_by_ids(&[gone.id(), Uuid::new_v4()])
            .await
            .expect("repeat delete succeeds");

        assert_eq!(repo.count().await.expect("count succeeds"), 1);
        let recent = repo.recent(10).await.expect("recent succeeds");
        assert_eq!(recent[0].id(), kept.id());
    }

    #[rstest]
    #[tokio::test]
    async fn counts_by_breed_aggregates_in_contract_order() {
        let repo = InMemoryPredictionRepository::new();
        for (second, breed) in [(1, Breed::Gir), (2, Breed::Jersey), (3, Breed::Jersey)] {
            repo.insert(&record(breed, timestamp(second)))
                .await
                .expect("insert succeeds");
        }

        let counts = repo.counts_by_breed().await.expect("aggregate succeeds");
        assert_eq!(counts, vec![(Breed::Jersey, 2), (Breed::Gir, 1)]);
    }

    #[rstest]
    #[tokio::test]
    async fn status_checks_list_in_insertion_order() {
        let repo = InMemoryStatusCheckRepository::new();
        for name in ["first", "second"] {
            let check = StatusCheck::new(StatusCheckDraft {
                id: Uuid::new_v4(),
                client_name: name.to_owned(),
                timestamp: timestamp(0),
            })
            .expect("valid status check");
            repo.insert(&check).await.expect("insert succeeds");
        }

        let listed = repo.list(1000).await.expect("list succeeds");
        let names: Vec<&str> = listed.iter().map(StatusCheck::client_name).collect();
        assert_eq!(names, vec!["first", "second"]);
    }
}
