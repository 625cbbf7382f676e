//! # screening
//!
//! Collect, validate, assemble and submit sleep-apnea screening surveys.
//! Backend-agnostic: anything implementing [`ScoringService`] can score a
//! submission, the HTTP implementation lives in `screening-http`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use screening::{AnswerStore, Session};
//!
//! let session = Session::new(AnswerStore::new());
//! session
//!     .update(|store| {
//!         store.set_demographics(demographics);
//!         store.set_medical_history(history);
//!         store.set_survey_responses(responses);
//!     })
//!     .await;
//!
//! let assessment = session.submit(&backend, &token).await?;
//! println!("survey #{:?}", assessment.survey_id);
//! ```
//!
//! ## Pipeline
//!
//! - [`AnswerStore`] - one slot per wizard step, overwritten freely
//! - [`validate`] - every violated constraint of a [`Snapshot`]
//! - [`assemble`] - merges a [`ValidSnapshot`] with optional device data
//! - [`ScoringService::submit`] - one round trip to the scoring backend
//! - [`interpret`] - wire result to [`Assessment`]
//!
//! [`scoring`] computes the same instruments locally for an offline preview.

// Re-export all types from screening-types
pub use screening_types::*;

mod store;
pub use store::{AnswerStore, Snapshot};

mod validate;
pub use validate::{ValidSnapshot, validate};

mod assemble;
pub use assemble::assemble;

mod interpret;
pub use interpret::{Assessment, Metrics, Prediction, Score, Scores, interpret};

pub mod scoring;

pub mod signal;
pub use signal::FixedSignalSource;

mod session;
pub use session::Session;

// Scoring service for testing sessions without a backend
mod stub_service;
pub use stub_service::{StubReply, StubScoringService};
