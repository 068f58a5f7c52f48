//! Prediction HTTP handler.
//!
//! ```text
//! POST /predict
//! ```

use actix_multipart::Multipart;
use actix_web::{post, web};
use futures_util::TryStreamExt as _;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{PredictRequest, PredictResponse};
use crate::domain::{Breed, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Response payload for a successful classification.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PredictResponseBody {
    /// Predicted breed label.
    pub breed: Breed,
}

impl From<PredictResponse> for PredictResponseBody {
    fn from(value: PredictResponse) -> Self {
        Self { breed: value.breed }
    }
}

struct UploadPart {
    filename: Option<String>,
    content_type: Option<String>,
    bytes: Vec<u8>,
}

/// Pull the `file` field out of the multipart stream.
async fn read_file_part(mut payload: Multipart) -> Result<UploadPart, Error> {
    while let Some(mut field) = payload.try_next().await.map_err(|error| {
        Error::invalid_request(format!("malformed multipart payload: {error}"))
    })? {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field
            .content_disposition()
            .and_then(|disposition| disposition.get_filename())
            .filter(|name| !name.is_empty())
            .map(str::to_owned);
        let content_type = field.content_type().map(ToString::to_string);

        let mut bytes = Vec::new();
        while let Some(chunk) = field.try_next().await.map_err(|error| {
            Error::invalid_request(format!("failed to read upload: {error}"))
        })? {
            bytes.extend_from_slice(&chunk);
        }

        return Ok(UploadPart {
            filename,
            content_type,
            bytes,
        });
    }

    Err(Error::invalid_request("multipart field 'file' is required"))
}

/// Classify an uploaded cattle image.
///
/// The response distinguishes a rejected upload (400, the heuristic gate
/// said "not a cow") from a service fault (500, redacted).
#[utoipa::path(
    post,
    path = "/predict",
    request_body(
        content = Vec<u8>,
        content_type = "multipart/form-data",
        description = "Image upload in a `file` field"
    ),
    responses(
        (status = 200, description = "Predicted breed", body = PredictResponseBody),
        (status = 400, description = "Upload rejected", body = Error),
        (status = 500, description = "Prediction failed", body = Error)
    ),
    tags = ["predictions"],
    operation_id = "predict"
)]
#[post("/predict")]
pub async fn predict(
    state: web::Data<HttpState>,
    payload: Multipart,
) -> ApiResult<web::Json<PredictResponseBody>> {
    let part = read_file_part(payload).await?;

    let response = state
        .predict
        .predict(PredictRequest {
            filename: part.filename,
            content_type: part.content_type,
            bytes: part.bytes,
        })
        .await?;

    Ok(web::Json(PredictResponseBody::from(response)))
}

#[cfg(test)]
#[path = "predict_tests.rs"]
mod tests;
