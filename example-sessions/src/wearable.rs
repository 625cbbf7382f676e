use screening::{ExternalSignalData, FixedSignalSource};

/// 2024-05-06T08:00:00Z in milliseconds.
pub const WEARABLE_SYNC_TIME: i64 = 1_714_982_400_000;

const WEEK: [(&str, u32, f64); 7] = [
    ("Mon", 2_100, 5.5),
    ("Tue", 3_400, 6.0),
    ("Wed", 1_800, 5.0),
    ("Thu", 2_900, 6.5),
    ("Fri", 2_200, 5.5),
    ("Sat", 4_000, 7.0),
    ("Sun", 2_600, 6.0),
];

/// A sedentary week from a wrist-worn tracker.
pub fn wearable_source() -> FixedSignalSource {
    FixedSignalSource::new()
        .with_daily_steps(2_600)
        .with_sleep_hours(6.0)
        .with_weekly_steps(WEEK.map(|(day, steps, _)| (day, steps)))
        .with_weekly_sleep(WEEK.map(|(day, _, hours)| (day, hours)))
}

/// A synced week of [`wearable_source`] data with a fixed sync time.
///
/// The average here is the weekly mean, as a platform that reports it
/// directly would deliver.
pub fn wearable_signal() -> ExternalSignalData {
    ExternalSignalData::new(2_600, 6.0, WEARABLE_SYNC_TIME)
        .with_average_daily_steps(2_714)
        .with_weekly_steps(
            WEEK.iter()
                .map(|(day, steps, _)| (day.to_string(), *steps))
                .collect(),
        )
        .with_weekly_sleep(
            WEEK.iter()
                .map(|(day, _, hours)| (day.to_string(), *hours))
                .collect(),
        )
}
