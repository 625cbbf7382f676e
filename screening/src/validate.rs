use crate::{
    Demographics, ESS_ITEM_COUNT, ESS_MAX, ESS_MIN, ExternalSignalData, FieldPath,
    MedicalHistory, Sex, Snapshot, SurveyResponses, Violations,
};

/// A snapshot whose mandatory slots are present and within their domains.
///
/// Only [`validate`] creates one, so holding a `ValidSnapshot` is proof that
/// the answers may be assembled into a payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidSnapshot {
    demographics: Demographics,
    sex: Sex,
    medical_history: MedicalHistory,
    survey_responses: SurveyResponses,
    external_signal: Option<ExternalSignalData>,
}

impl ValidSnapshot {
    pub fn demographics(&self) -> &Demographics {
        &self.demographics
    }

    pub fn medical_history(&self) -> &MedicalHistory {
        &self.medical_history
    }

    pub fn survey_responses(&self) -> &SurveyResponses {
        &self.survey_responses
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    /// Linked device data, checked to serialize as plain numbers.
    pub fn external_signal(&self) -> Option<&ExternalSignalData> {
        self.external_signal.as_ref()
    }
}

/// Check a snapshot for completeness and domain correctness.
///
/// Pure: the snapshot is only read. Every violated constraint is reported,
/// not just the first one.
pub fn validate(snapshot: &Snapshot) -> Result<ValidSnapshot, Violations> {
    let mut violations = Violations::new();
    let root = FieldPath::empty();

    match &snapshot.demographics {
        Some(demographics) => {
            check_demographics(demographics, &root.child("demographics"), &mut violations)
        }
        None => violations.push(root.child("demographics"), "demographics is required"),
    }

    if snapshot.medical_history.is_none() {
        violations.push(root.child("medical_history"), "medical_history is required");
    }

    match &snapshot.survey_responses {
        Some(responses) => {
            check_survey_responses(responses, &root.child("survey_responses"), &mut violations)
        }
        None => violations.push(root.child("survey_responses"), "survey_responses is required"),
    }

    if let Some(signal) = &snapshot.external_signal {
        check_external_signal(signal, &root.child("google_fit"), &mut violations);
    }

    let (Some(demographics), Some(medical_history), Some(survey_responses), Some(sex)) = (
        snapshot.demographics.as_ref(),
        snapshot.medical_history,
        snapshot.survey_responses.as_ref(),
        snapshot.demographics.as_ref().and_then(Demographics::sex),
    ) else {
        return Err(violations);
    };
    violations.into_result()?;

    Ok(ValidSnapshot {
        demographics: demographics.clone(),
        sex,
        medical_history,
        survey_responses: survey_responses.clone(),
        external_signal: snapshot.external_signal.clone(),
    })
}

fn check_demographics(demographics: &Demographics, path: &FieldPath, violations: &mut Violations) {
    if demographics.age <= 0 {
        violations.push(path.child("age"), "age must be positive");
    }

    let measurements = [
        ("height_cm", demographics.height_cm),
        ("weight_kg", demographics.weight_kg),
        ("neck_circumference_cm", demographics.neck_circumference_cm),
    ];
    for (name, value) in measurements {
        if !(value.is_finite() && value > 0.0) {
            violations.push(path.child(name), format!("{name} must be positive"));
        }
    }

    if Sex::parse(&demographics.sex).is_none() {
        violations.push(path.child("sex"), "sex must be 'male' or 'female'");
    }
}

fn check_survey_responses(
    responses: &SurveyResponses,
    path: &FieldPath,
    violations: &mut Violations,
) {
    let ess = path.child("ess_responses");

    if responses.ess_responses.len() != ESS_ITEM_COUNT {
        violations.push(
            ess.clone(),
            format!(
                "ess_responses must have {ESS_ITEM_COUNT} entries, got {}",
                responses.ess_responses.len()
            ),
        );
    }

    for (index, value) in responses.ess_responses.iter().enumerate() {
        if !(ESS_MIN..=ESS_MAX).contains(value) {
            violations.push(
                ess.index(index),
                format!("ess_responses[{index}] must be between {ESS_MIN} and {ESS_MAX}, got {value}"),
            );
        }
    }
}

fn check_external_signal(signal: &ExternalSignalData, path: &FieldPath, violations: &mut Violations) {
    if !is_duration(signal.sleep_duration_hours) {
        violations.push(
            path.child("sleep_duration_hours"),
            "sleep_duration_hours must be a finite, non-negative number",
        );
    }

    let weekly = path.child("weekly_sleep_data");
    for (day, hours) in signal.weekly_sleep_data.iter().flatten() {
        if !is_duration(*hours) {
            violations.push(
                weekly.child(day),
                format!("weekly_sleep_data[{day}] must be a finite, non-negative number"),
            );
        }
    }
}

fn is_duration(hours: f64) -> bool {
    hours.is_finite() && hours >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BerlinResponses, StopBangResponses};

    fn complete() -> Snapshot {
        Snapshot {
            demographics: Some(Demographics::new(30, Sex::Male, 175.0, 80.0, 40.0)),
            medical_history: Some(MedicalHistory::default()),
            survey_responses: Some(SurveyResponses::new(
                vec![1; 8],
                BerlinResponses::default(),
                StopBangResponses::default(),
            )),
            external_signal: None,
        }
    }

    fn with_ess(values: Vec<i32>) -> Snapshot {
        let mut snapshot = complete();
        if let Some(responses) = snapshot.survey_responses.as_mut() {
            responses.ess_responses = values;
        }
        snapshot
    }

    fn ess_path() -> FieldPath {
        FieldPath::new("survey_responses.ess_responses")
    }

    #[test]
    fn complete_snapshot_is_valid() {
        let valid = validate(&complete()).unwrap();
        assert_eq!(valid.demographics().age, 30);
        assert_eq!(valid.sex(), Sex::Male);
    }

    #[test]
    fn empty_snapshot_reports_every_missing_slot() {
        let violations = validate(&Snapshot::default()).unwrap_err();
        assert_eq!(violations.len(), 3);
        assert!(violations.cites(&FieldPath::new("demographics")));
        assert!(violations.cites(&FieldPath::new("medical_history")));
        assert!(violations.cites(&FieldPath::new("survey_responses")));
    }

    #[test]
    fn wrong_ess_length_cites_the_field() {
        for len in [0, 1, 7, 9, 16] {
            let violations = validate(&with_ess(vec![0; len])).unwrap_err();
            assert!(violations.cites(&ess_path()), "length {len}");
            let message = &violations.iter().next().unwrap().message;
            assert!(message.contains("must have 8 entries"));
        }
    }

    #[test]
    fn out_of_range_ess_values_are_flagged_by_index() {
        let violations = validate(&with_ess(vec![0, 4, 1, 1, -1, 3, 2, 7])).unwrap_err();
        let flagged: Vec<_> = violations.under(&ess_path()).map(|v| v.path.clone()).collect();
        assert_eq!(
            flagged,
            vec![ess_path().index(1), ess_path().index(4), ess_path().index(7)]
        );
    }

    #[test]
    fn length_and_range_violations_are_reported_together() {
        let violations = validate(&with_ess(vec![5, 0, 0])).unwrap_err();
        assert!(violations.cites(&ess_path()));
        assert!(violations.cites(&ess_path().index(0)));
    }

    #[test]
    fn demographics_must_be_positive() {
        let mut snapshot = complete();
        snapshot.demographics = Some(Demographics {
            age: 0,
            sex: "male".into(),
            height_cm: -175.0,
            weight_kg: f64::NAN,
            neck_circumference_cm: 0.0,
        });

        let violations = validate(&snapshot).unwrap_err();
        let demographics = FieldPath::new("demographics");
        for field in ["age", "height_cm", "weight_kg", "neck_circumference_cm"] {
            assert!(violations.cites(&demographics.child(field)), "{field}");
        }
        assert_eq!(violations.len(), 4);
    }

    #[test]
    fn sex_requires_exact_lowercase_literal() {
        for sex in ["Male", "FEMALE", "other", ""] {
            let mut snapshot = complete();
            if let Some(demographics) = snapshot.demographics.as_mut() {
                demographics.sex = sex.to_string();
            }
            let violations = validate(&snapshot).unwrap_err();
            assert!(violations.cites(&FieldPath::new("demographics.sex")), "{sex:?}");
        }
    }

    #[test]
    fn device_sleep_must_be_a_plain_number() {
        for hours in [f64::NAN, f64::INFINITY, -1.0] {
            let mut snapshot = complete();
            snapshot.external_signal = Some(ExternalSignalData::new(100, hours, 0));

            let violations = validate(&snapshot).unwrap_err();
            assert!(
                violations.cites(&FieldPath::new("google_fit.sleep_duration_hours")),
                "{hours}"
            );
            assert_eq!(violations.len(), 1);
        }
    }

    #[test]
    fn weekly_sleep_values_are_checked_by_day() {
        let mut snapshot = complete();
        snapshot.external_signal = Some(ExternalSignalData::new(100, 7.0, 0).with_weekly_sleep(
            [("Mon".to_string(), 6.5), ("Tue".to_string(), f64::NAN)].into(),
        ));

        let violations = validate(&snapshot).unwrap_err();
        let flagged: Vec<_> = violations
            .under(&FieldPath::new("google_fit"))
            .map(|v| v.path.clone())
            .collect();
        assert_eq!(flagged, vec![FieldPath::new("google_fit.weekly_sleep_data.Tue")]);
    }

    #[test]
    fn valid_device_data_is_carried() {
        let mut snapshot = complete();
        snapshot.external_signal = Some(ExternalSignalData::new(100, 0.0, 0));

        let valid = validate(&snapshot).unwrap();
        assert_eq!(valid.external_signal().map(|s| s.daily_steps), Some(100));
    }

    #[test]
    fn validation_does_not_touch_the_snapshot() {
        let snapshot = with_ess(vec![9; 3]);
        let before = snapshot.clone();
        let _ = validate(&snapshot);
        assert_eq!(snapshot, before);
    }
}
