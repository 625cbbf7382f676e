use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Step and sleep data captured from a linked fitness/health source.
///
/// Optional fields stay optional here; the payload assembler fills them in
/// at merge time, so a later correction (e.g. a re-sync that delivers the
/// weekly series) is reflected in the next submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalSignalData {
    pub daily_steps: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_daily_steps: Option<u32>,
    pub sleep_duration_hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_steps_data: Option<BTreeMap<String, u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_sleep_data: Option<BTreeMap<String, f64>>,
    /// Capture instant in milliseconds since the Unix epoch.
    pub last_sync_time: i64,
}

impl ExternalSignalData {
    pub fn new(daily_steps: u32, sleep_duration_hours: f64, last_sync_time: i64) -> Self {
        Self {
            daily_steps,
            average_daily_steps: None,
            sleep_duration_hours,
            weekly_steps_data: None,
            weekly_sleep_data: None,
            last_sync_time,
        }
    }

    pub fn with_average_daily_steps(mut self, steps: u32) -> Self {
        self.average_daily_steps = Some(steps);
        self
    }

    pub fn with_weekly_steps(mut self, series: BTreeMap<String, u32>) -> Self {
        self.weekly_steps_data = Some(series);
        self
    }

    pub fn with_weekly_sleep(mut self, series: BTreeMap<String, f64>) -> Self {
        self.weekly_sleep_data = Some(series);
        self
    }
}
