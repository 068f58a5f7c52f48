//! Status check domain service.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::ports::{
    CreateStatusCheckRequest, StatusCheckPayload, StatusCheckRepository,
    StatusCheckRepositoryError, StatusChecks,
};
use crate::domain::{Error, StatusCheck, StatusCheckDraft};

/// Read cap applied to the status check listing.
const STATUS_CHECK_READ_CAP: usize = 1000;

fn map_repository_error(error: StatusCheckRepositoryError) -> Error {
    match error {
        StatusCheckRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("status check store unavailable: {message}"))
        }
        StatusCheckRepositoryError::Query { message } => {
            Error::internal(format!("status check store error: {message}"))
        }
    }
}

/// Status check service implementing the driving port.
pub struct StatusCheckService<R> {
    repository: Arc<R>,
}

impl<R> StatusCheckService<R> {
    /// Create a service over the status check repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> StatusChecks for StatusCheckService<R>
where
    R: StatusCheckRepository,
{
    async fn create(
        &self,
        request: CreateStatusCheckRequest,
    ) -> Result<StatusCheckPayload, Error> {
        let check = StatusCheck::new(StatusCheckDraft {
            id: Uuid::new_v4(),
            client_name: request.client_name,
            timestamp: Utc::now(),
        })
        .map_err(|err| Error::invalid_request(format!("invalid status check: {err}")))?;

        self.repository
            .insert(&check)
            .await
            .map_err(map_repository_error)?;

        Ok(StatusCheckPayload::from(check))
    }

    async fn list(&self) -> Result<Vec<StatusCheckPayload>, Error> {
        let checks = self
            .repository
            .list(STATUS_CHECK_READ_CAP)
            .await
            .map_err(map_repository_error)?;
        Ok(checks.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use mockall::predicate::eq;
    use rstest::rstest;

    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::MockStatusCheckRepository;

    #[rstest]
    #[tokio::test]
    async fn create_persists_and_echoes_the_check() {
        let mut repo = MockStatusCheckRepository::new();
        repo.expect_insert()
            .times(1)
            .withf(|check| check.client_name() == "probe-7")
            .returning(|_| Ok(()));

        let service = StatusCheckService::new(Arc::new(repo));
        let payload = service
            .create(CreateStatusCheckRequest {
                client_name: "probe-7".to_owned(),
            })
            .await
            .expect("create succeeds");

        assert_eq!(payload.client_name, "probe-7");
    }

    #[rstest]
    #[tokio::test]
    async fn create_rejects_blank_client_name_without_persistence() {
        let service = StatusCheckService::new(Arc::new(MockStatusCheckRepository::new()));
        let error = service
            .create(CreateStatusCheckRequest {
                client_name: "  ".to_owned(),
            })
            .await
            .expect_err("blank name is rejected");

        assert_eq!(error.code, ErrorCode::InvalidRequest);
    }

    #[rstest]
    #[tokio::test]
    async fn list_reads_up_to_the_cap() {
        let mut repo = MockStatusCheckRepository::new();
        repo.expect_list()
            .with(eq(1000_usize))
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let service = StatusCheckService::new(Arc::new(repo));
        let listed = service.list().await.expect("list succeeds");
        assert!(listed.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn connection_failure_maps_to_service_unavailable() {
        let mut repo = MockStatusCheckRepository::new();
        repo.expect_list()
            .returning(|_| Err(StatusCheckRepositoryError::connection("refused")));

        let service = StatusCheckService::new(Arc::new(repo));
        let error = service.list().await.expect_err("failure surfaces");
        assert_eq!(error.code, ErrorCode::ServiceUnavailable);
    }
}
