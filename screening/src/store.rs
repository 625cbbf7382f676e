use tracing::debug;

use crate::{Demographics, ExternalSignalData, MedicalHistory, SubmissionResult, SurveyResponses};

/// Answers collected across the wizard steps of one session.
///
/// Each step owns one slot and may be completed in any order or revisited;
/// a setter simply overwrites its slot. No validation happens here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerStore {
    demographics: Option<Demographics>,
    medical_history: Option<MedicalHistory>,
    survey_responses: Option<SurveyResponses>,
    external_signal: Option<ExternalSignalData>,
}

/// An owned, read-only copy of an [`AnswerStore`] at one point in time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub demographics: Option<Demographics>,
    pub medical_history: Option<MedicalHistory>,
    pub survey_responses: Option<SurveyResponses>,
    pub external_signal: Option<ExternalSignalData>,
}

impl AnswerStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_demographics(&mut self, demographics: Demographics) {
        self.demographics = Some(demographics);
    }

    pub fn set_medical_history(&mut self, medical_history: MedicalHistory) {
        self.medical_history = Some(medical_history);
    }

    pub fn set_survey_responses(&mut self, survey_responses: SurveyResponses) {
        self.survey_responses = Some(survey_responses);
    }

    pub fn set_external_signal(&mut self, signal: ExternalSignalData) {
        self.external_signal = Some(signal);
    }

    /// Forget linked device data, e.g. after the user revokes access.
    pub fn clear_external_signal(&mut self) {
        self.external_signal = None;
    }

    /// Restore the profile steps from a stored survey result.
    ///
    /// Only slots the result carries are overwritten; survey answers and
    /// device data are never touched.
    pub fn prefill_from_result(&mut self, result: &SubmissionResult) {
        if let Some(demographics) = &result.demographics {
            self.demographics = Some(demographics.clone());
        }
        if let Some(medical_history) = result.medical_history {
            self.medical_history = Some(medical_history);
        }
        debug!(
            demographics = result.demographics.is_some(),
            medical_history = result.medical_history.is_some(),
            "prefilled answers from stored result"
        );
    }

    /// Store freshly captured device data and derive the physical-activity
    /// answer from its average step count.
    ///
    /// Returns the suggested answer, or `None` when the signal has no steps.
    /// The suggestion is written into the survey responses only if that step
    /// has already been filled; otherwise it is up to the caller to apply it.
    pub fn prefill_from_signal(&mut self, signal: ExternalSignalData) -> Option<&'static str> {
        let average = signal.average_daily_steps.unwrap_or(signal.daily_steps);
        self.external_signal = Some(signal);

        if average == 0 {
            return None;
        }
        let bucket = crate::scoring::activity_time_bucket(average);
        if let Some(responses) = &mut self.survey_responses {
            responses.physical_activity_time = Some(bucket.to_string());
        }
        debug!(average, bucket, "suggested physical activity time");
        Some(bucket)
    }

    pub fn demographics(&self) -> Option<&Demographics> {
        self.demographics.as_ref()
    }

    pub fn medical_history(&self) -> Option<&MedicalHistory> {
        self.medical_history.as_ref()
    }

    pub fn survey_responses(&self) -> Option<&SurveyResponses> {
        self.survey_responses.as_ref()
    }

    pub fn external_signal(&self) -> Option<&ExternalSignalData> {
        self.external_signal.as_ref()
    }

    /// Check if no slot has been filled.
    pub fn is_empty(&self) -> bool {
        self.demographics.is_none()
            && self.medical_history.is_none()
            && self.survey_responses.is_none()
            && self.external_signal.is_none()
    }

    /// Clear every slot. The store is afterwards equal to `AnswerStore::new()`.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            demographics: self.demographics.clone(),
            medical_history: self.medical_history,
            survey_responses: self.survey_responses.clone(),
            external_signal: self.external_signal.clone(),
        }
    }
}

impl Snapshot {
    /// Check if every slot is absent.
    pub fn is_empty(&self) -> bool {
        self.demographics.is_none()
            && self.medical_history.is_none()
            && self.survey_responses.is_none()
            && self.external_signal.is_none()
    }
}
