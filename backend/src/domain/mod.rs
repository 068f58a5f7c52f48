//! Domain primitives, ports, and services.
//!
//! Purpose: define the strongly typed core of the prediction pipeline —
//! entities, the upload gate, the deterministic mock classifier, and the
//! services orchestrating them — independent of any transport or storage
//! technology. Adapters plug in through the traits in [`ports`].

pub mod breed;
pub mod classifier;
pub mod error;
pub mod gate;
pub mod ports;
pub mod prediction;
pub mod prediction_service;
pub mod status_check;
pub mod status_check_service;
pub mod trace_id;

pub use self::breed::Breed;
pub use self::classifier::{DEFAULT_SEED, SeedHashClassifier, breed_for_seed, hash_index};
pub use self::error::{Error, ErrorCode};
pub use self::gate::UploadGate;
pub use self::prediction::{PredictionDraft, PredictionRecord};
pub use self::prediction_service::{PredictionQueryService, PredictionService, RETENTION_BOUND};
pub use self::status_check::{StatusCheck, StatusCheckDraft, StatusCheckValidationError};
pub use self::status_check_service::StatusCheckService;
pub use self::trace_id::TraceId;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use breedsense::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::invalid_request("bad upload"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
