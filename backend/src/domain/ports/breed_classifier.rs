//! Port for breed classification.
//!
//! The prediction pipeline depends on this capability rather than on the
//! seed-hash mock directly, so a real inference engine can be substituted
//! without touching the gate, pruner, or aggregator contracts.

use async_trait::async_trait;

use crate::domain::Breed;

/// Errors raised by classifier implementations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BreedClassifierError {
    /// Inference failed inside the classifier.
    #[error("breed inference failed: {message}")]
    Inference {
        /// Implementation-supplied failure detail.
        message: String,
    },
}

impl BreedClassifierError {
    /// Build a [`Self::Inference`] error.
    pub fn inference(message: impl Into<String>) -> Self {
        Self::Inference {
            message: message.into(),
        }
    }
}

/// Port mapping an uploaded image to a breed label.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BreedClassifier: Send + Sync {
    /// Classify an uploaded image into a breed label.
    ///
    /// `filename` is the original upload name when present; `image` holds the
    /// raw upload bytes. Implementations may use either or both.
    async fn classify(
        &self,
        filename: Option<String>,
        image: &[u8],
    ) -> Result<Breed, BreedClassifierError>;
}
