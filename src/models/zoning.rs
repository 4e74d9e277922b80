use serde::Serialize;

/// Area zoning classification (Gebietsausweisung) of the immission site.
/// Codes follow the usual German planning abbreviations.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Zoning {
    /// GI - industrial area
    Industrial,
    /// GE - commercial area
    Commercial,
    /// MK - core (mixed urban) area
    Core,
    /// WA - general residential area
    GeneralResidential,
    /// WR - pure residential area
    PureResidential,
    /// KUR - spa / health resort area
    Spa,
}

impl Zoning {
    pub const ALL: [Zoning; 6] = [
        Zoning::Industrial,
        Zoning::Commercial,
        Zoning::Core,
        Zoning::GeneralResidential,
        Zoning::PureResidential,
        Zoning::Spa,
    ];

    /// Parse a CLI code ('gi', 'ge', 'mk', 'wa', 'wr', 'ku') or a long name.
    pub fn from_code(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "gi" | "industrial" => Some(Self::Industrial),
            "ge" | "commercial" => Some(Self::Commercial),
            "mk" | "core" => Some(Self::Core),
            "wa" | "general-residential" => Some(Self::GeneralResidential),
            "wr" | "pure-residential" => Some(Self::PureResidential),
            "ku" | "kur" | "spa" => Some(Self::Spa),
            _ => None,
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Zoning::Industrial => "GI",
            Zoning::Commercial => "GE",
            Zoning::Core => "MK",
            Zoning::GeneralResidential => "WA",
            Zoning::PureResidential => "WR",
            Zoning::Spa => "KUR",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Zoning::Industrial => "Industrial area",
            Zoning::Commercial => "Commercial area",
            Zoning::Core => "Core area",
            Zoning::GeneralResidential => "General residential area",
            Zoning::PureResidential => "Pure residential area",
            Zoning::Spa => "Spa area",
        }
    }

    /// Row index into the threshold table.
    pub fn index(&self) -> usize {
        match self {
            Zoning::Industrial => 0,
            Zoning::Commercial => 1,
            Zoning::Core => 2,
            Zoning::GeneralResidential => 3,
            Zoning::PureResidential => 4,
            Zoning::Spa => 5,
        }
    }

    /// Only residential and spa areas receive the rest-time surcharge (k_R).
    pub fn is_noise_sensitive(&self) -> bool {
        matches!(
            self,
            Zoning::GeneralResidential | Zoning::PureResidential | Zoning::Spa
        )
    }
}
