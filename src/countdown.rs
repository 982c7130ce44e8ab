// File: ./src/countdown.rs
// Countdown text shown under the selected festival.
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use std::time::Duration;

pub const ALREADY_PASSED: &str = "Already passed";

/// How often a running countdown is re-formatted.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// The instant a countdown to `date` runs out: local midnight at its start.
pub fn countdown_target(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Formats the time left until `target` as `"{d}d {hh}h {mm}m {ss}s"`.
///
/// Components are truncated, never rounded. A target in the past, even by a
/// fraction of a second, yields [`ALREADY_PASSED`].
pub fn format_remaining(target: NaiveDateTime, now: NaiveDateTime) -> String {
    let delta = target - now;
    if delta < TimeDelta::zero() {
        return ALREADY_PASSED.to_string();
    }

    let total = delta.num_seconds();
    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;
    format!("{}d {:02}h {:02}m {:02}s", days, hours, minutes, seconds)
}
