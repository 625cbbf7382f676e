use screening::{
    AnswerStore, BerlinResponses, Demographics, MedicalHistory, Sex, StopBangResponses,
    SurveyResponses,
};

/// A 30-year-old man of average build.
pub fn typical_demographics() -> Demographics {
    Demographics::new(30, Sex::Male, 175.0, 80.0, 40.0)
}

/// Smokes, no chronic conditions.
pub fn typical_medical_history() -> MedicalHistory {
    MedicalHistory {
        smokes: true,
        ..MedicalHistory::default()
    }
}

/// One point on every ESS item (total 8), one Berlin item, snoring only.
pub fn typical_survey_responses() -> SurveyResponses {
    let mut responses = SurveyResponses::new(
        vec![1; 8],
        BerlinResponses::default().with_category1("q1", true),
        StopBangResponses {
            snoring: true,
            ..StopBangResponses::default()
        },
    );
    responses.snoring_level = Some("Moderate".to_string());
    responses.physical_activity_time = Some("30-60 minutes".to_string());
    responses
}

/// A store with every mandatory step completed and no device linked.
pub fn typical_store() -> AnswerStore {
    let mut store = AnswerStore::new();
    store.set_demographics(typical_demographics());
    store.set_medical_history(typical_medical_history());
    store.set_survey_responses(typical_survey_responses());
    store
}
