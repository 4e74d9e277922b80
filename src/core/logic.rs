use crate::core::calculator::{duration, limits, period, surcharges};
use crate::errors::{AppError, AppResult};
use crate::models::assessment::{AssessmentResult, RatingResult};
use crate::models::event::EventInput;
use chrono::NaiveDateTime;

/// Meteorological correction C_met, fixed at 0 in this simplified variant.
const MET_CORRECTION: f64 = 0.0;

pub struct Core;

impl Core {
    /// Extended calculator: maximum allowed average and peak levels for the
    /// event, from the threshold table and the surcharge lookups.
    /// Pure and deterministic; the only failure is `end <= start`.
    pub fn assess(input: &EventInput) -> AppResult<AssessmentResult> {
        if input.end <= input.start {
            return Err(AppError::InvalidTimeRange(format!(
                "end time {} must be later than start time {}",
                input.end_str(),
                input.start_str()
            )));
        }

        let duration_hours = duration::event_duration_hours(input.start, input.end);
        let assessment_period_hours = period::assessment_period_hours(input.start);

        let tone_surcharge = surcharges::tone_surcharge(input.tone);
        let impulse_surcharge = surcharges::impulse_surcharge(input.impulse);
        let rest_time_surcharge = surcharges::rest_time_surcharge(input.zoning, input.start);
        let duration_surcharge =
            surcharges::duration_surcharge(duration_hours, assessment_period_hours);

        let allowed_level = limits::allowed_level(input.zoning, input.class);

        // Energetic time-averaging: negative when the event is shorter than
        // the assessment period, raising the allowed instantaneous level.
        let adjustment = 10.0 * (duration_hours / assessment_period_hours).log10();

        let allowed_average_level = allowed_level
            - (tone_surcharge + impulse_surcharge + rest_time_surcharge + duration_surcharge)
            - adjustment;
        let allowed_peak_level = allowed_average_level + limits::peak_addend(input.class);

        Ok(AssessmentResult {
            duration_hours,
            assessment_period_hours,
            allowed_level,
            tone_surcharge,
            impulse_surcharge,
            rest_time_surcharge,
            duration_surcharge,
            allowed_average_level,
            allowed_peak_level,
        })
    }

    /// Prototype calculator: rating level L_r from a *measured* average
    /// level over an adjustable assessment period (single time slice, N=1;
    /// C_met and k_R fixed at 0).
    ///
    /// L_r = 10 * log10( T_E * 10^(0.1 * (L_Aeq - C_met + k_T + k_I)) / T_R )
    pub fn rating_level(
        measured_level: f64,
        start: NaiveDateTime,
        end: NaiveDateTime,
        assessment_period_hours: f64,
        impulse: bool,
        tone: bool,
    ) -> AppResult<RatingResult> {
        if end <= start {
            return Err(AppError::InvalidTimeRange(format!(
                "end time {} must be later than start time {}",
                end.format("%Y-%m-%d %H:%M"),
                start.format("%Y-%m-%d %H:%M")
            )));
        }
        if !(1.0..=24.0).contains(&assessment_period_hours) {
            return Err(AppError::InvalidPeriod(format!(
                "{assessment_period_hours} h (must be between 1 and 24)"
            )));
        }
        if !measured_level.is_finite() || !(0.0..=140.0).contains(&measured_level) {
            return Err(AppError::InvalidLevel(format!(
                "{measured_level} dB (must be between 0 and 140)"
            )));
        }

        let duration_hours = duration::event_duration_hours(start, end);
        let tone_surcharge = surcharges::tone_surcharge(tone);
        let impulse_surcharge = surcharges::impulse_surcharge(impulse);

        let exponent = 0.1 * (measured_level - MET_CORRECTION + tone_surcharge + impulse_surcharge);
        let rating_level =
            10.0 * (duration_hours * 10f64.powf(exponent) / assessment_period_hours).log10();

        Ok(RatingResult {
            duration_hours,
            assessment_period_hours,
            measured_level,
            tone_surcharge,
            impulse_surcharge,
            rating_level,
        })
    }
}
