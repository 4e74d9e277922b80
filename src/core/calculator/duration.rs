use chrono::NaiveDateTime;

/// Event duration T_E in fractional hours (minute precision).
pub fn event_duration_hours(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    (end - start).num_minutes() as f64 / 60.0
}
