use serde::Serialize;

/// Disturbance classification of a temporary event, as used by the
/// threshold table and the peak-level addend.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum DisturbanceClass {
    NotDisturbing,
    SlightlyDisturbing,
    Disturbing,
}

impl DisturbanceClass {
    pub const ALL: [DisturbanceClass; 3] = [
        DisturbanceClass::NotDisturbing,
        DisturbanceClass::SlightlyDisturbing,
        DisturbanceClass::Disturbing,
    ];

    /// Parse a CLI code ('n', 's', 'd') or a long name.
    pub fn from_code(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "n" | "not" | "not-disturbing" => Some(Self::NotDisturbing),
            "s" | "slightly" | "slightly-disturbing" => Some(Self::SlightlyDisturbing),
            "d" | "disturbing" => Some(Self::Disturbing),
            _ => None,
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            DisturbanceClass::NotDisturbing => "n",
            DisturbanceClass::SlightlyDisturbing => "s",
            DisturbanceClass::Disturbing => "d",
        }
    }

    /// Human-readable label for CLI output.
    pub fn label(&self) -> &'static str {
        match self {
            DisturbanceClass::NotDisturbing => "not disturbing",
            DisturbanceClass::SlightlyDisturbing => "slightly disturbing",
            DisturbanceClass::Disturbing => "disturbing",
        }
    }

    /// Column index into the threshold table.
    pub fn index(&self) -> usize {
        match self {
            DisturbanceClass::NotDisturbing => 0,
            DisturbanceClass::SlightlyDisturbing => 1,
            DisturbanceClass::Disturbing => 2,
        }
    }
}
