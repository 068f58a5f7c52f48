//! Recent predictions HTTP handler.
//!
//! ```text
//! GET /predictions?limit=<int>
//! ```

use actix_web::{get, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::domain::Breed;
use crate::domain::ports::{PredictionRecordPayload, RecentPredictionsRequest};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Limit applied when the client does not pass one.
const DEFAULT_LIMIT: i64 = 20;

/// Query parameters for the recent predictions listing.
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
pub struct RecentPredictionsParams {
    /// Maximum records to return; clamped to `[1, 50]`, default 20.
    pub limit: Option<i64>,
}

/// Stored prediction record, field names as persisted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PredictionRecordBody {
    /// Record id.
    pub id: Uuid,
    /// Original upload name, if any.
    pub filename: Option<String>,
    /// Declared MIME type, if any.
    pub content_type: Option<String>,
    /// Predicted breed label.
    pub breed: Breed,
    /// Creation instant, UTC, RFC 3339.
    pub timestamp: DateTime<Utc>,
}

impl From<PredictionRecordPayload> for PredictionRecordBody {
    fn from(value: PredictionRecordPayload) -> Self {
        Self {
            id: value.id,
            filename: value.filename,
            content_type: value.content_type,
            breed: value.breed,
            timestamp: value.timestamp,
        }
    }
}

/// List the most recent predictions, newest first.
#[utoipa::path(
    get,
    path = "/predictions",
    params(RecentPredictionsParams),
    responses(
        (status = 200, description = "Recent predictions", body = [PredictionRecordBody]),
        (status = 503, description = "Store unavailable", body = crate::domain::Error)
    ),
    tags = ["predictions"],
    operation_id = "recentPredictions"
)]
#[get("/predictions")]
pub async fn recent_predictions(
    state: web::Data<HttpState>,
    query: web::Query<RecentPredictionsParams>,
) -> ApiResult<web::Json<Vec<PredictionRecordBody>>> {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
    let records = state
        .predictions
        .recent(RecentPredictionsRequest { limit })
        .await?;
    Ok(web::Json(records.into_iter().map(Into::into).collect()))
}
