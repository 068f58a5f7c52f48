//! Status check HTTP handlers.
//!
//! ```text
//! POST /status
//! GET /status
//! ```

use actix_web::{get, post, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::ports::{CreateStatusCheckRequest, StatusCheckPayload};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Request payload for recording a status check.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateStatusCheckBody {
    /// Client-supplied name.
    pub client_name: String,
}

/// Recorded status check, field names as persisted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatusCheckBody {
    /// Status check id.
    pub id: Uuid,
    /// Client-supplied name.
    pub client_name: String,
    /// Creation instant, UTC, RFC 3339.
    pub timestamp: DateTime<Utc>,
}

impl From<StatusCheckPayload> for StatusCheckBody {
    fn from(value: StatusCheckPayload) -> Self {
        Self {
            id: value.id,
            client_name: value.client_name,
            timestamp: value.timestamp,
        }
    }
}

/// Record a status check.
#[utoipa::path(
    post,
    path = "/status",
    request_body = CreateStatusCheckBody,
    responses(
        (status = 200, description = "Status check recorded", body = StatusCheckBody),
        (status = 400, description = "Invalid request", body = crate::domain::Error)
    ),
    tags = ["status"],
    operation_id = "createStatusCheck"
)]
#[post("/status")]
pub async fn create_status_check(
    state: web::Data<HttpState>,
    payload: web::Json<CreateStatusCheckBody>,
) -> ApiResult<web::Json<StatusCheckBody>> {
    let response = state
        .status_checks
        .create(CreateStatusCheckRequest {
            client_name: payload.into_inner().client_name,
        })
        .await?;
    Ok(web::Json(StatusCheckBody::from(response)))
}

/// List recorded status checks.
#[utoipa::path(
    get,
    path = "/status",
    responses(
        (status = 200, description = "Recorded status checks", body = [StatusCheckBody])
    ),
    tags = ["status"],
    operation_id = "listStatusChecks"
)]
#[get("/status")]
pub async fn list_status_checks(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<StatusCheckBody>>> {
    let checks = state.status_checks.list().await?;
    Ok(web::Json(checks.into_iter().map(Into::into).collect()))
}
