use screening::{
    CalculatedMetrics, OsaPrediction, RiskFactor, ScoreDetail, SubmissionResult, SurveyScores,
};

use crate::{high_risk_demographics, typical_demographics, typical_medical_history};

fn score(score: i32, category: &str) -> Option<ScoreDetail> {
    Some(ScoreDetail {
        score,
        category: category.to_string(),
    })
}

fn risk_factor(factor: &str, detail: &str, impact: &str, priority: &str) -> RiskFactor {
    RiskFactor {
        factor: factor.to_string(),
        detail: detail.to_string(),
        impact: impact.to_string(),
        priority: priority.to_string(),
    }
}

/// What the backend returns for [`typical_store`](crate::typical_store).
pub fn scored_result() -> SubmissionResult {
    SubmissionResult {
        survey_id: Some(42),
        demographics: Some(typical_demographics()),
        medical_history: Some(typical_medical_history()),
        scores: Some(SurveyScores {
            ess: score(8, "normal"),
            berlin: score(0, "Low Risk"),
            stopbang: score(3, "Intermediate Risk"),
        }),
        prediction: Some(OsaPrediction {
            osa_probability: 0.31,
            risk_level: "Low".to_string(),
            recommendation: "Maintain healthy sleep habits".to_string(),
        }),
        top_risk_factors: Some(vec![
            risk_factor("Smoking", "Current smoker", "Medium", "2"),
            risk_factor("Snoring", "Reported snoring", "Low", "3"),
        ]),
        calculated_metrics: Some(CalculatedMetrics {
            bmi: 26.1,
            estimated_activity_level: None,
            estimated_sleep_quality: Some(8),
        }),
        ..SubmissionResult::success("Survey submitted successfully")
    }
}

/// What the backend returns for [`high_risk_store`](crate::high_risk_store).
pub fn high_risk_result() -> SubmissionResult {
    SubmissionResult {
        survey_id: Some(43),
        demographics: Some(high_risk_demographics()),
        scores: Some(SurveyScores {
            ess: score(17, "Severe excessive daytime sleepiness"),
            berlin: score(3, "High Risk"),
            stopbang: score(8, "High Risk"),
        }),
        prediction: Some(OsaPrediction {
            osa_probability: 0.92,
            risk_level: "High".to_string(),
            recommendation: "Consult a sleep specialist for a sleep study".to_string(),
        }),
        top_risk_factors: Some(vec![
            risk_factor("BMI", "37.9", "High", "1"),
            risk_factor("Neck circumference", "45 cm", "High", "1"),
            risk_factor("Observed apnea", "Reported by partner", "High", "2"),
        ]),
        calculated_metrics: Some(CalculatedMetrics {
            bmi: 37.9,
            estimated_activity_level: Some(1),
            estimated_sleep_quality: Some(5),
        }),
        ..SubmissionResult::success("Survey submitted successfully")
    }
}
