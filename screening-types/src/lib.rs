//! Core types for the screening crate.
//!
//! This crate provides the foundational types of a screening survey:
//! - `Demographics`, `MedicalHistory`, `SurveyResponses` - The answers collected by the wizard
//! - `ExternalSignalData` - Optional step/sleep data captured from a device
//! - `SubmissionPayload` and `SubmissionResult` - The wire schema of `/survey/submit`
//! - `FieldPath` and `Violations` - Path-keyed validation failures
//! - `SignalSource` and `ScoringService` traits - For device sources and scoring backends

mod field_path;
pub use field_path::FieldPath;

mod violation;
pub use violation::{Violation, Violations};

mod answers;
pub use answers::{
    BerlinResponses, Demographics, ESS_ITEM_COUNT, ESS_MAX, ESS_MIN, MedicalHistory, Sex,
    StopBangResponses, SurveyResponses,
};

mod ess;
pub use ess::EssChoice;

mod signal;
pub use signal::ExternalSignalData;

mod payload;
pub use payload::{FitnessPayload, SubmissionPayload};

mod result;
pub use result::{
    CalculatedMetrics, OsaPrediction, RiskFactor, ScoreDetail, SubmissionResult, SurveyScores,
};

mod auth;
pub use auth::{ApiResponse, AuthResponse, LoginRequest, SignUpRequest, User};

mod error;
pub use error::ApiError;

mod traits;
pub use traits::{ScoringService, SignalSource};
