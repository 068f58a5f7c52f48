//! Domain ports and supporting types for the hexagonal boundary.

mod breed_classifier;
mod predict_command;
mod prediction_repository;
mod predictions_query;
mod scratch_store;
mod status_check_repository;
mod status_checks;

#[cfg(test)]
pub use breed_classifier::MockBreedClassifier;
pub use breed_classifier::{BreedClassifier, BreedClassifierError};
#[cfg(test)]
pub use predict_command::MockPredictCommand;
pub use predict_command::{FixturePredictCommand, PredictCommand, PredictRequest, PredictResponse};
#[cfg(test)]
pub use prediction_repository::MockPredictionRepository;
pub use prediction_repository::{
    FixturePredictionRepository, PredictionRepository, PredictionRepositoryError,
};
#[cfg(test)]
pub use predictions_query::MockPredictionsQuery;
pub use predictions_query::{
    AnalyticsSummary, FixturePredictionsQuery, PredictionRecordPayload, PredictionsQuery,
    RecentPredictionsRequest,
};
#[cfg(test)]
pub use scratch_store::MockScratchStore;
pub use scratch_store::{NoopScratchStore, ScratchHandle, ScratchStore, ScratchStoreError};
#[cfg(test)]
pub use status_check_repository::MockStatusCheckRepository;
pub use status_check_repository::{
    FixtureStatusCheckRepository, StatusCheckRepository, StatusCheckRepositoryError,
};
#[cfg(test)]
pub use status_checks::MockStatusChecks;
pub use status_checks::{
    CreateStatusCheckRequest, FixtureStatusChecks, StatusCheckPayload, StatusChecks,
};
