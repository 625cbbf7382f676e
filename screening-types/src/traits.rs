use std::collections::BTreeMap;
use std::future::Future;

use crate::{ApiError, SubmissionPayload, SubmissionResult};

/// Capability interface of a fitness/health data source.
///
/// The concrete platform behind it is swappable; the pipeline only needs
/// today's totals and, when the platform offers them, the weekly series.
pub trait SignalSource {
    /// Steps recorded today.
    fn daily_steps(&self) -> u32;

    /// Hours slept in the last night.
    fn sleep_duration_hours(&self) -> f64;

    /// Steps per day label (e.g. `"Mon"`), if the source keeps history.
    fn weekly_steps(&self) -> Option<BTreeMap<String, u32>> {
        None
    }

    /// Sleep hours per day label, if the source keeps history.
    fn weekly_sleep(&self) -> Option<BTreeMap<String, f64>> {
        None
    }
}

/// Trait for backends that score a submission.
///
/// Implementations make exactly one attempt per call and classify the
/// outcome into `ApiError` variants; retrying is left to the caller.
pub trait ScoringService {
    /// Submit an assembled payload on behalf of the holder of `auth_token`.
    ///
    /// # Returns
    /// * `Ok(result)` if the backend accepted and scored the survey
    /// * `Err(ApiError::Transport)` for non-2xx statuses
    /// * `Err(ApiError::Application)` for 2xx bodies reporting failure
    /// * `Err(ApiError::Io)` for network, timeout or encoding failures
    fn submit(
        &self,
        payload: &SubmissionPayload,
        auth_token: &str,
    ) -> impl Future<Output = Result<SubmissionResult, ApiError>> + Send;
}
