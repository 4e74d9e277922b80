use crate::core::calculator::period::{DAY_PERIOD_HOURS, clock_hour};
use crate::models::zoning::Zoning;
use chrono::{Datelike, NaiveDateTime, Weekday};

/// Fixed surcharge values in dB.
pub const IMPULSE_SURCHARGE: f64 = 4.0;
pub const TONE_SURCHARGE: f64 = 3.0;
pub const REST_TIME_SURCHARGE: f64 = 6.0;
pub const DURATION_SURCHARGE: f64 = 3.0;

/// Sensitive rest-time windows as half-open [start, end) clock-hour ranges.
/// Holidays are not detected, only weekends (known simplification).
const WEEKDAY_WINDOWS: &[(f64, f64)] = &[(6.0, 7.0), (20.0, 22.0)];
const WEEKEND_WINDOWS: &[(f64, f64)] = &[(6.0, 9.0), (13.0, 15.0), (20.0, 22.0)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayClass {
    Weekday,
    WeekendOrHoliday,
}

pub fn day_class(start: NaiveDateTime) -> DayClass {
    match start.weekday() {
        Weekday::Sat | Weekday::Sun => DayClass::WeekendOrHoliday,
        _ => DayClass::Weekday,
    }
}

pub fn impulse_surcharge(requested: bool) -> f64 {
    if requested { IMPULSE_SURCHARGE } else { 0.0 }
}

pub fn tone_surcharge(requested: bool) -> f64 {
    if requested { TONE_SURCHARGE } else { 0.0 }
}

/// k_R: granted only in noise-sensitive zonings, and only when the event
/// *starts* inside a rest-time window of the applicable day class.
pub fn rest_time_surcharge(zoning: Zoning, start: NaiveDateTime) -> f64 {
    if !zoning.is_noise_sensitive() {
        return 0.0;
    }

    let windows = match day_class(start) {
        DayClass::Weekday => WEEKDAY_WINDOWS,
        DayClass::WeekendOrHoliday => WEEKEND_WINDOWS,
    };

    let h = clock_hour(start);
    if windows.iter().any(|&(from, to)| h >= from && h < to) {
        REST_TIME_SURCHARGE
    } else {
        0.0
    }
}

/// Extra surcharge for an event that fills a whole working day (about 8 h)
/// inside the 16 h day period. Tolerance band is +/- 0.5 h.
pub fn duration_surcharge(duration_hours: f64, period_hours: f64) -> f64 {
    if period_hours == DAY_PERIOD_HOURS && (duration_hours - 8.0).abs() < 0.5 {
        DURATION_SURCHARGE
    } else {
        0.0
    }
}
