use serde::{Deserialize, Serialize};

use crate::{Demographics, MedicalHistory};

/// Response body of `POST /survey/submit` (and the `data` of `/survey/get-latest`).
///
/// Every field the backend may leave out is an `Option`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub survey_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demographics: Option<Demographics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medical_history: Option<MedicalHistory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scores: Option<SurveyScores>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction: Option<OsaPrediction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_risk_factors: Option<Vec<RiskFactor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculated_metrics: Option<CalculatedMetrics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmissionResult {
    /// A successful result carrying nothing but a message.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            survey_id: None,
            demographics: None,
            medical_history: None,
            scores: None,
            prediction: None,
            top_risk_factors: None,
            calculated_metrics: None,
            error: None,
        }
    }

    /// The reason the backend gave for a failure, preferring `error` over `message`.
    pub fn failure_reason(&self) -> Option<&str> {
        self.error
            .as_deref()
            .or(Some(self.message.as_str()))
            .filter(|reason| !reason.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyScores {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ess: Option<ScoreDetail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub berlin: Option<ScoreDetail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stopbang: Option<ScoreDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDetail {
    pub score: i32,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OsaPrediction {
    /// In `[0, 1]`.
    pub osa_probability: f64,
    pub risk_level: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub factor: String,
    pub detail: String,
    pub impact: String,
    pub priority: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatedMetrics {
    pub bmi: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_activity_level: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_sleep_quality: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_body_parses_with_everything_absent() {
        let result: SubmissionResult =
            serde_json::from_str(r#"{"success":true,"message":"ok"}"#).unwrap();
        assert!(result.success);
        assert_eq!(result.survey_id, None);
        assert_eq!(result.scores, None);
        assert_eq!(result.calculated_metrics, None);
    }

    #[test]
    fn failure_reason_prefers_error() {
        let result: SubmissionResult = serde_json::from_str(
            r#"{"success":false,"message":"Survey failed","error":"age missing"}"#,
        )
        .unwrap();
        assert_eq!(result.failure_reason(), Some("age missing"));

        let result: SubmissionResult = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert_eq!(result.failure_reason(), None);
    }

    #[test]
    fn metrics_keep_missing_estimates_absent() {
        let metrics: CalculatedMetrics = serde_json::from_str(r#"{"bmi":26.1}"#).unwrap();
        assert_eq!(metrics.estimated_activity_level, None);
        assert_eq!(metrics.estimated_sleep_quality, None);
    }
}
