use crate::models::event_type::DisturbanceClass;
use crate::models::zoning::Zoning;

/// Immission threshold table in dB, rows by zoning, columns by disturbance
/// class (not / slightly / disturbing). Total over both enums, loaded once
/// at compile time and never mutated.
const ALLOWED_LEVELS: [[f64; 3]; 6] = [
    [70.0, 70.0, 70.0], // GI  - industrial
    [65.0, 70.0, 70.0], // GE  - commercial
    [60.0, 65.0, 70.0], // MK  - core
    [55.0, 60.0, 70.0], // WA  - general residential
    [50.0, 55.0, 70.0], // WR  - pure residential
    [45.0, 50.0, 70.0], // KUR - spa
];

/// Base allowed rating level L_r for the given site and event class.
pub fn allowed_level(zoning: Zoning, class: DisturbanceClass) -> f64 {
    ALLOWED_LEVELS[zoning.index()][class.index()]
}

/// Addend from allowed average level to allowed peak level (Spitzenpegel).
pub fn peak_addend(class: DisturbanceClass) -> f64 {
    match class {
        DisturbanceClass::NotDisturbing => 30.0,
        DisturbanceClass::SlightlyDisturbing => 25.0,
        DisturbanceClass::Disturbing => 20.0,
    }
}
