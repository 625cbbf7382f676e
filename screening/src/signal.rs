//! Capturing device signals into [`ExternalSignalData`].
//!
//! `FixedSignalSource` allows you to feed the pipeline pre-defined step and
//! sleep readings, which is useful for tests and demos without a linked
//! fitness platform.
//!
//! # Example
//!
//! ```rust,ignore
//! use screening::signal::{FixedSignalSource, capture};
//!
//! let source = FixedSignalSource::new()
//!     .with_daily_steps(8_400)
//!     .with_sleep_hours(6.5);
//!
//! let signal = capture(&source, 7);
//! assert_eq!(signal.daily_steps, 8_400);
//! assert_eq!(signal.average_daily_steps, Some(1_200));
//! ```

use std::collections::BTreeMap;

use tracing::debug;

use crate::{ExternalSignalData, SignalSource};

/// Read a source once and stamp the reading with the current time.
///
/// The average is today's total divided by `days`, matching the figure the
/// backend has always received. It is not a mean over the weekly series.
/// With `days == 0` no average is recorded and the assembler falls back to
/// today's steps.
pub fn capture(source: &impl SignalSource, days: u32) -> ExternalSignalData {
    let daily_steps = source.daily_steps();
    let mut signal = ExternalSignalData::new(
        daily_steps,
        source.sleep_duration_hours(),
        chrono::Utc::now().timestamp_millis(),
    );

    if let Some(average) = daily_steps.checked_div(days) {
        signal = signal.with_average_daily_steps(average);
    }
    if let Some(series) = source.weekly_steps() {
        signal = signal.with_weekly_steps(series);
    }
    if let Some(series) = source.weekly_sleep() {
        signal = signal.with_weekly_sleep(series);
    }

    debug!(
        daily_steps,
        average = ?signal.average_daily_steps,
        "captured device signal"
    );
    signal
}

/// A signal source with fixed readings.
#[derive(Debug, Clone, Default)]
pub struct FixedSignalSource {
    daily_steps: u32,
    sleep_hours: f64,
    weekly_steps: Option<BTreeMap<String, u32>>,
    weekly_sleep: Option<BTreeMap<String, f64>>,
}

impl FixedSignalSource {
    /// Create a source reporting zero steps and zero sleep.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_daily_steps(mut self, steps: u32) -> Self {
        self.daily_steps = steps;
        self
    }

    pub fn with_sleep_hours(mut self, hours: f64) -> Self {
        self.sleep_hours = hours;
        self
    }

    /// Add a weekly step series, keyed by day label.
    pub fn with_weekly_steps<K: Into<String>>(
        mut self,
        series: impl IntoIterator<Item = (K, u32)>,
    ) -> Self {
        self.weekly_steps = Some(series.into_iter().map(|(k, v)| (k.into(), v)).collect());
        self
    }

    /// Add a weekly sleep series, keyed by day label.
    pub fn with_weekly_sleep<K: Into<String>>(
        mut self,
        series: impl IntoIterator<Item = (K, f64)>,
    ) -> Self {
        self.weekly_sleep = Some(series.into_iter().map(|(k, v)| (k.into(), v)).collect());
        self
    }
}

impl SignalSource for FixedSignalSource {
    fn daily_steps(&self) -> u32 {
        self.daily_steps
    }

    fn sleep_duration_hours(&self) -> f64 {
        self.sleep_hours
    }

    fn weekly_steps(&self) -> Option<BTreeMap<String, u32>> {
        self.weekly_steps.clone()
    }

    fn weekly_sleep(&self) -> Option<BTreeMap<String, f64>> {
        self.weekly_sleep.clone()
    }
}
