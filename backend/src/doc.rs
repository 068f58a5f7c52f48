//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the REST API. The
//! generated document is served by Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::domain::{Breed, Error, ErrorCode};
use crate::inbound::http::analytics::AnalyticsSummaryBody;
use crate::inbound::http::health::MessageBody;
use crate::inbound::http::predict::PredictResponseBody;
use crate::inbound::http::predictions::PredictionRecordBody;
use crate::inbound::http::status::{CreateStatusCheckBody, StatusCheckBody};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "BreedSense backend API",
        description = "Mock cattle breed classification with prediction analytics."
    ),
    paths(
        crate::inbound::http::health::index,
        crate::inbound::http::predict::predict,
        crate::inbound::http::predictions::recent_predictions,
        crate::inbound::http::analytics::analytics_summary,
        crate::inbound::http::status::create_status_check,
        crate::inbound::http::status::list_status_checks,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Breed,
        Error,
        ErrorCode,
        MessageBody,
        PredictResponseBody,
        PredictionRecordBody,
        AnalyticsSummaryBody,
        CreateStatusCheckBody,
        StatusCheckBody,
    ))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use super::*;

    #[test]
    fn document_lists_the_prediction_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        for expected in ["/predict", "/predictions", "/analytics/summary", "/status"] {
            assert!(
                paths.iter().any(|path| path.as_str() == expected),
                "missing path {expected}"
            );
        }
    }
}
