//! Analytics summary HTTP handler.
//!
//! ```text
//! GET /analytics/summary
//! ```

use std::collections::BTreeMap;

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Breed;
use crate::domain::ports::AnalyticsSummary;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Breed distribution summary payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalyticsSummaryBody {
    /// Count per breed label.
    pub by_breed: BTreeMap<String, u64>,
    /// Sum of all per-breed counts.
    pub total: u64,
    /// Breed with the maximum count; `null` when no records exist.
    pub most_common: Option<Breed>,
}

impl From<AnalyticsSummary> for AnalyticsSummaryBody {
    fn from(value: AnalyticsSummary) -> Self {
        Self {
            by_breed: value.by_breed,
            total: value.total,
            most_common: value.most_common,
        }
    }
}

/// Summarise the breed distribution over stored predictions.
#[utoipa::path(
    get,
    path = "/analytics/summary",
    responses(
        (status = 200, description = "Breed distribution", body = AnalyticsSummaryBody),
        (status = 503, description = "Store unavailable", body = crate::domain::Error)
    ),
    tags = ["analytics"],
    operation_id = "analyticsSummary"
)]
#[get("/analytics/summary")]
pub async fn analytics_summary(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<AnalyticsSummaryBody>> {
    let summary = state.predictions.summary().await?;
    Ok(web::Json(AnalyticsSummaryBody::from(summary)))
}
