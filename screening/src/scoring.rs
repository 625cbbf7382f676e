//! Local scoring of the screening instruments.
//!
//! The backend is authoritative; these functions give an offline preview of
//! the ESS, Berlin and STOP-BANG results from the same answers.

use std::collections::BTreeMap;

use crate::{BerlinResponses, Demographics, Sex, StopBangResponses, ValidSnapshot};

/// Score of one instrument with its category label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalScore {
    pub score: i32,
    pub category: &'static str,
}

/// All three instruments plus the BMI they were computed with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalScores {
    pub bmi: f64,
    pub ess: LocalScore,
    pub berlin: LocalScore,
    pub stopbang: LocalScore,
}

pub const HIGH_RISK: &str = "High Risk";
pub const INTERMEDIATE_RISK: &str = "Intermediate Risk";
pub const LOW_RISK: &str = "Low Risk";

/// Body-mass index from height in centimetres and weight in kilograms.
pub fn bmi(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Epworth Sleepiness Scale: the sum of the eight item scores.
///
/// Takes a validated snapshot, so the sum is always within 0-24.
pub fn ess(snapshot: &ValidSnapshot) -> LocalScore {
    let score: i32 = snapshot.survey_responses().ess_responses.iter().sum();
    let category = match score {
        ..=5 => "Low daytime sleepiness (normal)",
        6..=10 => "High daytime sleepiness (normal)",
        11..=12 => "Mild excessive daytime sleepiness",
        13..=15 => "Moderate excessive daytime sleepiness",
        _ => "Severe excessive daytime sleepiness",
    };
    LocalScore { score, category }
}

/// Berlin Questionnaire: the score is the number of positive categories.
///
/// Categories 1 and 2 are positive with two or more `true` items, category 3
/// when the respondent is sleepy or BMI exceeds 30. Two positive categories
/// mean high risk.
pub fn berlin(responses: &BerlinResponses, bmi: f64) -> LocalScore {
    let positive = |items: &BTreeMap<String, bool>| items.values().filter(|v| **v).count() >= 2;

    let score = [
        positive(&responses.category1),
        positive(&responses.category2),
        responses.category3_sleepy || bmi > 30.0,
    ]
    .into_iter()
    .filter(|category| *category)
    .count() as i32;

    let category = if score >= 2 { HIGH_RISK } else { LOW_RISK };
    LocalScore { score, category }
}

/// STOP-BANG: four answered STOP items plus four derived BANG items.
pub fn stopbang(stop: &StopBangResponses, demographics: &Demographics, sex: Sex) -> LocalScore {
    let bmi = bmi(demographics.height_cm, demographics.weight_kg);
    let male = sex == Sex::Male;
    let large_neck = demographics.neck_circumference_cm >= 40.0;
    let stop_score = stop.stop_count() as i32;

    let bang_score = [bmi > 35.0, demographics.age > 50, large_neck, male]
        .into_iter()
        .filter(|item| *item)
        .count() as i32;
    let score = stop_score + bang_score;

    // Two STOP items with male sex, BMI > 35 or a large neck total at least
    // 3 and are therefore never lower than intermediate.
    let category = match score {
        5.. => HIGH_RISK,
        3..=4 => INTERMEDIATE_RISK,
        _ => LOW_RISK,
    };
    LocalScore { score, category }
}

/// Sleep-quality proxy on a 1-10 scale, inversely related to the ESS score.
pub fn estimate_sleep_quality(ess_score: i32) -> i32 {
    (10 - ess_score / 3).clamp(1, 10)
}

/// Activity level 1 (sedentary) to 5 (very active) from daily steps,
/// lowered by one for respondents over 60 and by one for health issues.
pub fn estimate_activity_level(daily_steps: u32, age: i32, has_health_issues: bool) -> i32 {
    let mut level = match daily_steps {
        0..3_000 => 1,
        3_000..6_000 => 2,
        6_000..8_000 => 3,
        8_000..10_000 => 4,
        _ => 5,
    };
    if age > 60 {
        level = (level - 1).max(1);
    }
    if has_health_issues {
        level = (level - 1).max(1);
    }
    level
}

/// The physical-activity answer suggested by an average step count.
pub fn activity_time_bucket(average_daily_steps: u32) -> &'static str {
    match average_daily_steps {
        10_000.. => "60+ minutes",
        7_500.. => "30-60 minutes",
        5_000.. => "15-30 minutes",
        _ => "Less than 15 minutes",
    }
}

/// Score all three instruments for a validated snapshot.
pub fn preview(snapshot: &ValidSnapshot) -> LocalScores {
    let demographics = snapshot.demographics();
    let responses = snapshot.survey_responses();
    let bmi = bmi(demographics.height_cm, demographics.weight_kg);

    LocalScores {
        bmi,
        ess: ess(snapshot),
        berlin: berlin(&responses.berlin_responses, bmi),
        stopbang: stopbang(&responses.stopbang_responses, demographics, snapshot.sex()),
    }
}
