use serde::Serialize;

/// Result of the extended calculator: the maximum allowed average and peak
/// levels for the event, plus every quantity that entered the formula.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentResult {
    pub duration_hours: f64,
    pub assessment_period_hours: f64,
    pub allowed_level: f64,
    pub tone_surcharge: f64,        // k_T
    pub impulse_surcharge: f64,     // k_I
    pub rest_time_surcharge: f64,   // k_R
    pub duration_surcharge: f64,
    pub allowed_average_level: f64, // L_Aeq allowed
    pub allowed_peak_level: f64,
}

/// Result of the prototype calculator: the rating level L_r derived from a
/// measured average level over an adjustable assessment period.
#[derive(Debug, Clone, Serialize)]
pub struct RatingResult {
    pub duration_hours: f64,
    pub assessment_period_hours: f64,
    pub measured_level: f64, // L_Aeq as measured
    pub tone_surcharge: f64,
    pub impulse_surcharge: f64,
    pub rating_level: f64, // L_r
}
