//! Non-volatile status conditions

/// Non-volatile status conditions (persist through switching)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    Burn,
    Freeze,
    Paralysis,
    Poison,
    BadPoison, // Toxic
    Sleep,
    Fainted,
}

impl Status {
    /// Parse from protocol string ("brn", "frz", "par", "psn", "tox", "slp", "fnt")
    pub fn from_protocol(s: &str) -> Option<Self> {
        match s {
            "brn" => Some(Status::Burn),
            "frz" => Some(Status::Freeze),
            "par" => Some(Status::Paralysis),
            "psn" => Some(Status::Poison),
            "tox" => Some(Status::BadPoison),
            "slp" => Some(Status::Sleep),
            "fnt" => Some(Status::Fainted),
            _ => None,
        }
    }

    /// Stable numeric code for tabular export (0 is "no status")
    pub fn code(&self) -> u8 {
        match self {
            Status::Burn => 1,
            Status::Freeze => 2,
            Status::Paralysis => 3,
            Status::Poison => 4,
            Status::BadPoison => 5,
            Status::Sleep => 6,
            Status::Fainted => 7,
        }
    }

    /// Get display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Burn => "Burn",
            Status::Freeze => "Freeze",
            Status::Paralysis => "Paralysis",
            Status::Poison => "Poison",
            Status::BadPoison => "Toxic",
            Status::Sleep => "Sleep",
            Status::Fainted => "Fainted",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
