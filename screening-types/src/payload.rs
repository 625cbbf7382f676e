use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Demographics, MedicalHistory, SurveyResponses};

/// Body of `POST /survey/submit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub demographics: Demographics,
    pub medical_history: MedicalHistory,
    pub survey_responses: SurveyResponses,
    /// Device data; the backend still calls this object `google_fit`
    /// whatever platform it came from.
    #[serde(
        rename = "google_fit",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub fitness: Option<FitnessPayload>,
}

/// Device data as sent on the wire, with every default already applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitnessPayload {
    pub daily_steps: u32,
    pub average_daily_steps: u32,
    pub sleep_duration_hours: f64,
    pub weekly_steps_data: BTreeMap<String, u32>,
    pub weekly_sleep_data: BTreeMap<String, f64>,
    pub last_sync_time: i64,
}
