use chrono::{NaiveDateTime, Timelike};

/// Statutory day window is 06:00-22:00, night is the remainder.
pub const DAY_START_HOUR: f64 = 6.0;
pub const DAY_END_HOUR: f64 = 22.0;

/// Assessment period T_R in hours.
pub const DAY_PERIOD_HOURS: f64 = 16.0;
pub const NIGHT_PERIOD_HOURS: f64 = 8.0;

/// Local clock hour as a real number in [0, 24), minute precision.
pub fn clock_hour(t: NaiveDateTime) -> f64 {
    t.hour() as f64 + t.minute() as f64 / 60.0
}

/// T_R classified from the event *start* only. Events crossing the
/// 22:00 boundary keep the period of their start (known simplification).
pub fn assessment_period_hours(start: NaiveDateTime) -> f64 {
    let h = clock_hour(start);
    if (DAY_START_HOUR..DAY_END_HOUR).contains(&h) {
        DAY_PERIOD_HOURS
    } else {
        NIGHT_PERIOD_HOURS
    }
}
