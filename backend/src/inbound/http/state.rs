//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{PredictCommand, PredictionsQuery, StatusChecks};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Prediction write path.
    pub predict: Arc<dyn PredictCommand>,
    /// Prediction read path.
    pub predictions: Arc<dyn PredictionsQuery>,
    /// Status check operations.
    pub status_checks: Arc<dyn StatusChecks>,
}

impl HttpState {
    /// Construct state from port implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use breedsense::domain::ports::{
    ///     FixturePredictCommand, FixturePredictionsQuery, FixtureStatusChecks,
    /// };
    /// use breedsense::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(FixturePredictCommand),
    ///     Arc::new(FixturePredictionsQuery),
    ///     Arc::new(FixtureStatusChecks),
    /// );
    /// let _predict = state.predict.clone();
    /// ```
    pub fn new(
        predict: Arc<dyn PredictCommand>,
        predictions: Arc<dyn PredictionsQuery>,
        status_checks: Arc<dyn StatusChecks>,
    ) -> Self {
        Self {
            predict,
            predictions,
            status_checks,
        }
    }
}
