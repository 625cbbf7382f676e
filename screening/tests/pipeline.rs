//! End-to-end tests of the screening pipeline against a stubbed backend.

use std::sync::Arc;
use std::time::Duration;

use example_sessions::{
    high_risk_result, high_risk_store, scored_result, typical_demographics,
    typical_medical_history, typical_store, typical_survey_responses, wearable_source,
};
use screening::{
    AnswerStore, ApiError, ExternalSignalData, FieldPath, Session, StubReply, StubScoringService,
    assemble, scoring, signal, validate,
};

#[tokio::test]
async fn typical_session_is_scored() {
    let session = Session::new(typical_store());
    let stub = StubScoringService::new(StubReply::Result(scored_result()));

    let assessment = session.submit(&stub, "token-abc").await.unwrap();

    assert_eq!(assessment.survey_id, Some(42));
    assert_eq!(assessment.ess_score(), Some(8));
    assert_eq!(
        assessment.bmi_consistent_with(&typical_demographics(), 0.05),
        Some(true)
    );

    let payload = stub.last_payload().unwrap();
    assert_eq!(payload.demographics, typical_demographics());
    assert_eq!(payload.medical_history, typical_medical_history());
    assert_eq!(payload.survey_responses, typical_survey_responses());
    assert!(payload.fitness.is_none());
    assert_eq!(stub.last_token().as_deref(), Some("token-abc"));
}

#[tokio::test]
async fn payload_has_the_exact_nested_values() {
    let snapshot = typical_store().snapshot();
    let valid = validate(&snapshot).unwrap();
    let json = serde_json::to_value(assemble(&valid, None)).unwrap();

    assert_eq!(
        json["demographics"],
        serde_json::json!({
            "age": 30,
            "sex": "male",
            "height_cm": 175.0,
            "weight_kg": 80.0,
            "neck_circumference_cm": 40.0
        })
    );
    assert_eq!(json["medical_history"]["smokes"], true);
    assert_eq!(json["medical_history"]["hypertension"], false);
    assert_eq!(
        json["survey_responses"]["ess_responses"],
        serde_json::json!([1, 1, 1, 1, 1, 1, 1, 1])
    );
    assert_eq!(
        json["survey_responses"]["berlin_responses"],
        serde_json::json!({
            "category1": {"q1": true},
            "category2": {},
            "category3_sleepy": false
        })
    );
    assert_eq!(
        json["survey_responses"]["stopbang_responses"],
        serde_json::json!({
            "snoring": true,
            "tired": false,
            "observed_apnea": false,
            "hypertension": false
        })
    );
}

#[tokio::test]
async fn device_data_is_sent_with_high_risk_session() {
    let session = Session::new(high_risk_store());
    let stub = StubScoringService::new(StubReply::Result(high_risk_result()));

    let assessment = session.submit(&stub, "token").await.unwrap();
    assert_eq!(assessment.survey_id, Some(43));
    assert_eq!(assessment.risk_factors.as_ref().map(Vec::len), Some(3));

    let fitness = stub.last_payload().unwrap().fitness.unwrap();
    assert_eq!(fitness.daily_steps, 2_600);
    assert_eq!(fitness.weekly_steps_data.len(), 7);
}

#[tokio::test]
async fn captured_wearable_week_reaches_the_payload() {
    let before = chrono::Utc::now().timestamp_millis();
    let captured = signal::capture(&wearable_source(), 7);
    let after = chrono::Utc::now().timestamp_millis();

    // Today's total over seven days, not the mean of the weekly series.
    assert_eq!(captured.average_daily_steps, Some(371));
    assert!((before..=after).contains(&captured.last_sync_time));

    let mut store = typical_store();
    assert_eq!(store.prefill_from_signal(captured), Some("Less than 15 minutes"));

    let valid = validate(&store.snapshot()).unwrap();
    assert_eq!(
        valid.survey_responses().physical_activity_time.as_deref(),
        Some("Less than 15 minutes")
    );

    let fitness = assemble(&valid, valid.external_signal()).fitness.unwrap();
    assert_eq!(fitness.daily_steps, 2_600);
    assert_eq!(fitness.average_daily_steps, 371);
    assert_eq!(fitness.sleep_duration_hours, 6.0);
    assert_eq!(fitness.weekly_steps_data.len(), 7);
    assert_eq!(fitness.weekly_sleep_data.get("Sat"), Some(&7.0));
    assert!((before..=after).contains(&fitness.last_sync_time));
}

#[tokio::test]
async fn non_numeric_device_sleep_never_reaches_the_service() {
    let mut store = typical_store();
    store.set_external_signal(ExternalSignalData::new(100, f64::NAN, 0));

    let session = Session::new(store);
    let stub = StubScoringService::new(StubReply::Result(scored_result()));

    let err = session.submit(&stub, "token").await.unwrap_err();
    let violations = err.violations().unwrap();
    assert!(violations.cites(&FieldPath::new("google_fit.sleep_duration_hours")));
    assert_eq!(violations.len(), 1);
    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn stored_result_prefills_a_new_session() {
    let mut result = scored_result();
    result.demographics = Some(typical_demographics());
    result.medical_history = Some(typical_medical_history());

    let session = Session::new(AnswerStore::new());
    session.update(|store| store.prefill_from_result(&result)).await;

    let snapshot = session.snapshot().await;
    assert_eq!(snapshot.demographics, Some(typical_demographics()));
    assert_eq!(snapshot.medical_history, Some(typical_medical_history()));
    assert!(snapshot.survey_responses.is_none());
}

#[tokio::test]
async fn local_preview_matches_backend_scores() {
    let valid = validate(&high_risk_store().snapshot()).unwrap();
    let local = scoring::preview(&valid);
    let scores = high_risk_result().scores.unwrap();

    assert_eq!(Some(local.ess.score), scores.ess.map(|s| s.score));
    assert_eq!(Some(local.berlin.score), scores.berlin.map(|s| s.score));
    assert_eq!(Some(local.stopbang.score), scores.stopbang.map(|s| s.score));
}

#[tokio::test]
async fn invalid_answers_never_reach_the_service() {
    let mut store = typical_store();
    let mut responses = typical_survey_responses();
    responses.ess_responses.pop();
    store.set_survey_responses(responses);

    let session = Session::new(store);
    let stub = StubScoringService::new(StubReply::Result(scored_result()));

    let err = session.submit(&stub, "token").await.unwrap_err();
    let violations = err.violations().unwrap();
    assert!(violations.cites(&FieldPath::new("survey_responses.ess_responses")));
    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn failed_submission_leaves_answers_in_place() {
    let session = Session::new(typical_store());
    let before = session.snapshot().await;

    for reply in [
        StubReply::Transport(401, "Invalid or expired token".into()),
        StubReply::Application("Database unavailable".into()),
        StubReply::Io("connection reset".into()),
    ] {
        let stub = StubScoringService::new(reply);
        let err = session.submit(&stub, "token").await.unwrap_err();
        assert!(!matches!(err, ApiError::Validation(_)));
        assert_eq!(session.snapshot().await, before);
    }
}

#[tokio::test]
async fn successful_submission_keeps_answers_until_reset() {
    let session = Session::new(typical_store());
    let stub = StubScoringService::new(StubReply::Result(scored_result()));

    session.submit(&stub, "token").await.unwrap();
    assert!(!session.snapshot().await.is_empty());

    session.reset().await;
    assert!(session.snapshot().await.is_empty());
}

#[tokio::test]
async fn reset_waits_for_in_flight_submission() {
    let session = Session::new(typical_store());
    let stub = Arc::new(
        StubScoringService::new(StubReply::Result(scored_result()))
            .with_delay(Duration::from_millis(100)),
    );

    let submitting = {
        let session = session.clone();
        let stub = Arc::clone(&stub);
        tokio::spawn(async move { session.submit(stub.as_ref(), "token").await })
    };

    while stub.calls() == 0 {
        tokio::time::sleep(Duration::from_millis(1)).await;
    }
    session.reset().await;

    assert_eq!(stub.completed(), 1);
    assert!(session.snapshot().await.is_empty());

    let assessment = submitting.await.unwrap().unwrap();
    assert_eq!(assessment.survey_id, Some(42));
    assert_eq!(stub.last_payload().unwrap().survey_responses.ess_responses, vec![1; 8]);
}

#[tokio::test]
async fn updates_are_shared_between_clones() {
    let session = Session::new(AnswerStore::new());
    let other = session.clone();

    other
        .update(|store| store.set_demographics(typical_demographics()))
        .await;

    let snapshot = session.snapshot().await;
    assert_eq!(snapshot.demographics, Some(typical_demographics()));
    assert!(snapshot.survey_responses.is_none());
}
