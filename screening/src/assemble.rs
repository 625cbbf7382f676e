use tracing::debug;

use crate::{ExternalSignalData, FitnessPayload, SubmissionPayload, SurveyResponses, ValidSnapshot};

/// Merge validated answers and optional device data into one payload.
///
/// Device defaults are applied here rather than at capture time: a missing
/// average falls back to today's steps, missing weekly series become empty
/// maps. Blank descriptive answers are dropped. Deterministic: the same
/// inputs always serialize to the same bytes.
pub fn assemble(
    snapshot: &ValidSnapshot,
    signal: Option<&ExternalSignalData>,
) -> SubmissionPayload {
    let fitness = signal.map(fitness_payload);
    debug!(
        ess = ?snapshot.survey_responses().ess_responses,
        with_fitness = fitness.is_some(),
        "assembled submission payload"
    );

    SubmissionPayload {
        demographics: snapshot.demographics().clone(),
        medical_history: *snapshot.medical_history(),
        survey_responses: normalized(snapshot.survey_responses()),
        fitness,
    }
}

fn fitness_payload(signal: &ExternalSignalData) -> FitnessPayload {
    FitnessPayload {
        daily_steps: signal.daily_steps,
        average_daily_steps: signal.average_daily_steps.unwrap_or(signal.daily_steps),
        sleep_duration_hours: signal.sleep_duration_hours,
        weekly_steps_data: signal.weekly_steps_data.clone().unwrap_or_default(),
        weekly_sleep_data: signal.weekly_sleep_data.clone().unwrap_or_default(),
        last_sync_time: signal.last_sync_time,
    }
}

fn normalized(responses: &SurveyResponses) -> SurveyResponses {
    let mut responses = responses.clone();
    for field in [
        &mut responses.snoring_level,
        &mut responses.snoring_frequency,
        &mut responses.tired_during_day,
        &mut responses.tired_after_sleep,
        &mut responses.physical_activity_time,
    ] {
        if field.as_deref().is_some_and(|value| value.trim().is_empty()) {
            *field = None;
        }
    }
    responses
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::{
        BerlinResponses, Demographics, MedicalHistory, Sex, Snapshot, StopBangResponses, validate,
    };

    fn valid() -> ValidSnapshot {
        let mut responses = SurveyResponses::new(
            vec![0, 1, 2, 3, 0, 1, 2, 3],
            BerlinResponses::default().with_category1("q2", true),
            StopBangResponses::default(),
        );
        responses.snoring_level = Some("Loud".into());
        responses.tired_during_day = Some("   ".into());
        responses.snoring_frequency = Some(String::new());

        validate(&Snapshot {
            demographics: Some(Demographics::new(55, Sex::Male, 180.0, 101.0, 44.0)),
            medical_history: Some(MedicalHistory::default()),
            survey_responses: Some(responses),
            external_signal: None,
        })
        .unwrap()
    }

    #[test]
    fn average_defaults_to_daily_steps() {
        let signal = ExternalSignalData::new(100, 7.0, 1_700_000_000_000);
        let payload = assemble(&valid(), Some(&signal));
        let fitness = payload.fitness.unwrap();
        assert_eq!(fitness.average_daily_steps, 100);
    }

    #[test]
    fn explicit_average_wins() {
        let signal = ExternalSignalData::new(100, 7.0, 0).with_average_daily_steps(6_400);
        let fitness = assemble(&valid(), Some(&signal)).fitness.unwrap();
        assert_eq!(fitness.average_daily_steps, 6_400);
    }

    #[test]
    fn missing_weekly_series_become_empty_maps() {
        let signal = ExternalSignalData::new(100, 7.0, 0);
        let json = serde_json::to_value(assemble(&valid(), Some(&signal))).unwrap();

        let fit = &json["google_fit"];
        assert_eq!(fit["weekly_steps_data"], serde_json::json!({}));
        assert_eq!(fit["weekly_sleep_data"], serde_json::json!({}));
    }

    #[test]
    fn weekly_series_are_carried_over() {
        let steps = BTreeMap::from([("Mon".to_string(), 5_000), ("Tue".to_string(), 7_000)]);
        let signal = ExternalSignalData::new(100, 7.0, 0).with_weekly_steps(steps.clone());
        let fitness = assemble(&valid(), Some(&signal)).fitness.unwrap();
        assert_eq!(fitness.weekly_steps_data, steps);
        assert!(fitness.weekly_sleep_data.is_empty());
    }

    #[test]
    fn no_signal_means_no_google_fit_field() {
        let json = serde_json::to_value(assemble(&valid(), None)).unwrap();
        assert!(json.get("google_fit").is_none());
    }

    #[test]
    fn blank_descriptive_answers_are_dropped() {
        let responses = assemble(&valid(), None).survey_responses;
        assert_eq!(responses.snoring_level.as_deref(), Some("Loud"));
        assert_eq!(responses.tired_during_day, None);
        assert_eq!(responses.snoring_frequency, None);
    }

    #[test]
    fn assembly_is_deterministic() {
        let snapshot = valid();
        let signal = ExternalSignalData::new(3_210, 6.25, 1_700_000_000_000)
            .with_weekly_sleep(BTreeMap::from([
                ("2024-05-02".to_string(), 6.0),
                ("2024-05-01".to_string(), 7.5),
            ]));

        let first = serde_json::to_vec(&assemble(&snapshot, Some(&signal))).unwrap();
        let second = serde_json::to_vec(&assemble(&snapshot, Some(&signal))).unwrap();
        assert_eq!(first, second);
    }
}
