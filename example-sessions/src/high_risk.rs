use screening::{
    AnswerStore, BerlinResponses, Demographics, MedicalHistory, Sex, StopBangResponses,
    SurveyResponses,
};

use crate::wearable_signal;

/// A 58-year-old man with a BMI above 35 and a wide neck.
pub fn high_risk_demographics() -> Demographics {
    Demographics::new(58, Sex::Male, 172.0, 112.0, 45.0)
}

pub fn high_risk_survey_responses() -> SurveyResponses {
    let mut responses = SurveyResponses::new(
        vec![3, 2, 2, 1, 3, 1, 2, 3],
        BerlinResponses::default()
            .with_category1("q2", true)
            .with_category1("q3", true)
            .with_category1("q5", true)
            .with_category2("q6", true)
            .with_category2("q7", true)
            .sleepy(true),
        StopBangResponses {
            snoring: true,
            tired: true,
            observed_apnea: true,
            hypertension: true,
        },
    );
    responses.snoring_level = Some("Very loud".to_string());
    responses.snoring_frequency = Some("Almost every day".to_string());
    responses.snoring_bothers_others = Some(true);
    responses.tired_during_day = Some("Almost every day".to_string());
    responses.feels_sleepy_daytime = Some(true);
    responses.nodded_off_driving = Some(true);
    responses
}

/// A store with every step completed, including linked device data.
pub fn high_risk_store() -> AnswerStore {
    let mut store = AnswerStore::new();
    store.set_demographics(high_risk_demographics());
    store.set_medical_history(MedicalHistory {
        hypertension: true,
        diabetes: true,
        ..MedicalHistory::default()
    });
    store.set_survey_responses(high_risk_survey_responses());
    store.set_external_signal(wearable_signal());
    store
}
