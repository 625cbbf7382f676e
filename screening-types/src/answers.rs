use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of Epworth Sleepiness Scale items.
pub const ESS_ITEM_COUNT: usize = 8;
/// Lowest score of a single ESS item.
pub const ESS_MIN: i32 = 0;
/// Highest score of a single ESS item.
pub const ESS_MAX: i32 = 3;

/// Biological sex as understood by the scoring backend.
///
/// The wire form is the exact lowercase literal; anything else is rejected
/// by validation rather than normalised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    /// Exact lowercase match; `"Male"` is not recognised.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            _ => None,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Answers from the demographics step.
///
/// `sex` is kept as the raw string the step produced so that an
/// unrecognised value reaches the validator instead of failing earlier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Demographics {
    pub age: i32,
    pub sex: String,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub neck_circumference_cm: f64,
}

impl Demographics {
    pub fn new(age: i32, sex: Sex, height_cm: f64, weight_kg: f64, neck_cm: f64) -> Self {
        Self {
            age,
            sex: sex.as_str().to_string(),
            height_cm,
            weight_kg,
            neck_circumference_cm: neck_cm,
        }
    }

    /// The recognised sex, if the raw value is one of the two literals.
    pub fn sex(&self) -> Option<Sex> {
        Sex::parse(&self.sex)
    }
}

/// Answers from the health history steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalHistory {
    pub hypertension: bool,
    pub diabetes: bool,
    #[serde(default)]
    pub depression: bool,
    pub smokes: bool,
    pub alcohol: bool,
}

impl MedicalHistory {
    /// Whether any chronic condition is flagged (used by the activity estimate).
    pub fn has_health_issues(&self) -> bool {
        self.hypertension || self.diabetes || self.depression
    }
}

/// Berlin Questionnaire answers.
///
/// Category items are keyed by the item name the step used (`"q2"`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BerlinResponses {
    pub category1: BTreeMap<String, bool>,
    pub category2: BTreeMap<String, bool>,
    pub category3_sleepy: bool,
}

impl BerlinResponses {
    pub fn with_category1(mut self, item: impl Into<String>, value: bool) -> Self {
        self.category1.insert(item.into(), value);
        self
    }

    pub fn with_category2(mut self, item: impl Into<String>, value: bool) -> Self {
        self.category2.insert(item.into(), value);
        self
    }

    pub fn sleepy(mut self, value: bool) -> Self {
        self.category3_sleepy = value;
        self
    }
}

/// The four STOP items of STOP-BANG. The BANG items are derived from demographics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopBangResponses {
    pub snoring: bool,
    pub tired: bool,
    pub observed_apnea: bool,
    pub hypertension: bool,
}

impl StopBangResponses {
    pub fn stop_count(&self) -> u32 {
        [self.snoring, self.tired, self.observed_apnea, self.hypertension]
            .into_iter()
            .filter(|answer| *answer)
            .count() as u32
    }
}

/// Questionnaire answers: ESS, Berlin, STOP-BANG plus descriptive fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyResponses {
    /// Eight ESS item scores, each 0-3, in questionnaire order.
    pub ess_responses: Vec<i32>,
    pub berlin_responses: BerlinResponses,
    pub stopbang_responses: StopBangResponses,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snoring_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snoring_frequency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snoring_bothers_others: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tired_during_day: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tired_after_sleep: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feels_sleepy_daytime: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodded_off_driving: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical_activity_time: Option<String>,
}

impl SurveyResponses {
    /// Responses with no descriptive fields set.
    pub fn new(
        ess_responses: Vec<i32>,
        berlin_responses: BerlinResponses,
        stopbang_responses: StopBangResponses,
    ) -> Self {
        Self {
            ess_responses,
            berlin_responses,
            stopbang_responses,
            snoring_level: None,
            snoring_frequency: None,
            snoring_bothers_others: None,
            tired_during_day: None,
            tired_after_sleep: None,
            feels_sleepy_daytime: None,
            nodded_off_driving: None,
            physical_activity_time: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sex_parse_is_exact_lowercase() {
        assert_eq!(Sex::parse("male"), Some(Sex::Male));
        assert_eq!(Sex::parse("female"), Some(Sex::Female));
        assert_eq!(Sex::parse("Male"), None);
        assert_eq!(Sex::parse(" female"), None);
        assert_eq!(Sex::parse(""), None);
    }

    #[test]
    fn depression_defaults_to_false() {
        let history: MedicalHistory = serde_json::from_str(
            r#"{"hypertension":true,"diabetes":false,"smokes":false,"alcohol":true}"#,
        )
        .unwrap();
        assert!(!history.depression);
        assert!(history.has_health_issues());
    }

    #[test]
    fn absent_descriptive_fields_are_omitted() {
        let responses = SurveyResponses::new(
            vec![0; ESS_ITEM_COUNT],
            BerlinResponses::default(),
            StopBangResponses::default(),
        );
        let json = serde_json::to_value(&responses).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert!(!object.contains_key("snoring_level"));
    }

    #[test]
    fn stop_count() {
        let stop = StopBangResponses {
            snoring: true,
            tired: false,
            observed_apnea: true,
            hypertension: false,
        };
        assert_eq!(stop.stop_count(), 2);
    }
}
