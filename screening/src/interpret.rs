use tracing::warn;

use crate::{
    CalculatedMetrics, Demographics, MedicalHistory, OsaPrediction, RiskFactor, ScoreDetail,
    SubmissionResult, SurveyScores, scoring,
};

/// A scored submission, independent of the wire field names.
///
/// Anything the backend left out stays `None`; nothing is defaulted to zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub survey_id: Option<i64>,
    pub message: String,
    pub demographics: Option<Demographics>,
    pub medical_history: Option<MedicalHistory>,
    pub scores: Option<Scores>,
    pub prediction: Option<Prediction>,
    /// Ordered by the backend, most important first.
    pub risk_factors: Option<Vec<RiskFactor>>,
    pub metrics: Option<Metrics>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scores {
    pub ess: Option<Score>,
    pub berlin: Option<Score>,
    pub stopbang: Option<Score>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
    pub value: i32,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub probability: f64,
    pub risk_level: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Metrics {
    pub bmi: f64,
    pub activity_level: Option<i32>,
    pub sleep_quality: Option<i32>,
}

/// Map a backend result to an [`Assessment`].
pub fn interpret(result: SubmissionResult) -> Assessment {
    let prediction = result.prediction.map(Prediction::from);
    if let Some(prediction) = &prediction
        && !(0.0..=1.0).contains(&prediction.probability)
    {
        warn!(
            probability = prediction.probability,
            "backend reported a probability outside [0, 1]"
        );
    }

    Assessment {
        survey_id: result.survey_id,
        message: result.message,
        demographics: result.demographics,
        medical_history: result.medical_history,
        scores: result.scores.map(Scores::from),
        prediction,
        risk_factors: result.top_risk_factors,
        metrics: result.calculated_metrics.map(Metrics::from),
    }
}

impl Assessment {
    pub fn ess_score(&self) -> Option<i32> {
        self.scores.as_ref()?.ess.as_ref().map(|score| score.value)
    }

    /// Whether the reported BMI matches the one derived from `demographics`.
    ///
    /// `None` when the backend reported no BMI. The backend rounds to one
    /// decimal, so a tolerance of at least `0.05` is sensible.
    pub fn bmi_consistent_with(&self, demographics: &Demographics, tolerance: f64) -> Option<bool> {
        let reported = self.metrics.as_ref()?.bmi;
        let derived = scoring::bmi(demographics.height_cm, demographics.weight_kg);
        let consistent = (reported - derived).abs() <= tolerance;
        if !consistent {
            warn!(reported, derived, "reported BMI does not match demographics");
        }
        Some(consistent)
    }
}

impl From<SurveyScores> for Scores {
    fn from(scores: SurveyScores) -> Self {
        Self {
            ess: scores.ess.map(Score::from),
            berlin: scores.berlin.map(Score::from),
            stopbang: scores.stopbang.map(Score::from),
        }
    }
}

impl From<ScoreDetail> for Score {
    fn from(detail: ScoreDetail) -> Self {
        Self {
            value: detail.score,
            category: detail.category,
        }
    }
}

impl From<OsaPrediction> for Prediction {
    fn from(prediction: OsaPrediction) -> Self {
        Self {
            probability: prediction.osa_probability,
            risk_level: prediction.risk_level,
            recommendation: prediction.recommendation,
        }
    }
}

impl From<CalculatedMetrics> for Metrics {
    fn from(metrics: CalculatedMetrics) -> Self {
        Self {
            bmi: metrics.bmi,
            activity_level: metrics.estimated_activity_level,
            sleep_quality: metrics.estimated_sleep_quality,
        }
    }
}
