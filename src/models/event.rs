use super::{event_type::DisturbanceClass, zoning::Zoning};
use chrono::NaiveDateTime;
use serde::Serialize;

/// Caller-supplied description of a temporary event.
/// Invariant: `end > start` (checked again by the calculator).
#[derive(Debug, Clone, Serialize)]
pub struct EventInput {
    pub class: DisturbanceClass,
    pub zoning: Zoning,
    pub start: NaiveDateTime, // local time, minute precision
    pub end: NaiveDateTime,
    pub impulse: bool, // impulsive noise -> k_I
    pub tone: bool,    // tonal/informational noise -> k_T
}

impl EventInput {
    pub fn new(
        class: DisturbanceClass,
        zoning: Zoning,
        start: NaiveDateTime,
        end: NaiveDateTime,
        impulse: bool,
        tone: bool,
    ) -> Self {
        Self {
            class,
            zoning,
            start,
            end,
            impulse,
            tone,
        }
    }

    pub fn start_str(&self) -> String {
        self.start.format("%Y-%m-%d %H:%M").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format("%Y-%m-%d %H:%M").to_string()
    }
}
