//! Driving port for prediction requests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Breed, Error, breed_for_seed};

/// Upload payload submitted for classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictRequest {
    /// Original upload name, when the client supplied one.
    pub filename: Option<String>,
    /// Declared MIME type, when the client supplied one.
    pub content_type: Option<String>,
    /// Raw upload bytes.
    pub bytes: Vec<u8>,
}

/// Successful classification outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictResponse {
    /// Predicted breed label.
    pub breed: Breed,
}

/// Driving port for classifying one upload and recording the outcome.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PredictCommand: Send + Sync {
    /// Classify an uploaded image.
    ///
    /// Gate rejections and missing content types surface as
    /// `ErrorCode::InvalidRequest` before anything is persisted; exactly one
    /// record is persisted per success.
    async fn predict(&self, request: PredictRequest) -> Result<PredictResponse, Error>;
}

/// Fixture command implementation for tests that do not need persistence.
///
/// Applies the content-type requirement and the deterministic seed mapping
/// but skips the gate, storage, and pruning.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePredictCommand;

#[async_trait]
impl PredictCommand for FixturePredictCommand {
    async fn predict(&self, request: PredictRequest) -> Result<PredictResponse, Error> {
        if request.content_type.is_none() {
            return Err(Error::invalid_request("Please upload an image file"));
        }
        let seed = request.filename.as_deref().unwrap_or(crate::domain::DEFAULT_SEED);
        Ok(PredictResponse {
            breed: breed_for_seed(seed),
        })
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use super::*;
    use crate::domain::ErrorCode;

    #[tokio::test]
    async fn fixture_echoes_deterministic_breed() {
        let command = FixturePredictCommand;
        let response = command
            .predict(PredictRequest {
                filename: Some("holstein1.png".to_owned()),
                content_type: Some("image/png".to_owned()),
                bytes: Vec::new(),
            })
            .await
            .expect("fixture predict succeeds");
        assert_eq!(response.breed, Breed::Gir);
    }

    #[tokio::test]
    async fn fixture_requires_content_type() {
        let command = FixturePredictCommand;
        let error = command
            .predict(PredictRequest {
                filename: Some("cow.png".to_owned()),
                content_type: None,
                bytes: Vec::new(),
            })
            .await
            .expect_err("missing content type is rejected");
        assert_eq!(error.code, ErrorCode::InvalidRequest);
    }
}
