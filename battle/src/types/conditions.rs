//! Field and side conditions

/// Weather conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Weather {
    Sun,
    Snow,
    Rain,
    Sand,
}

impl Weather {
    /// Parse from protocol string
    ///
    /// Returns `None` for "none"/empty; unknown names also map to `None`
    /// and are the caller's to log.
    pub fn from_protocol(s: &str) -> Option<Self> {
        let normalized = s.to_lowercase().replace([' ', '-'], "");

        match normalized.as_str() {
            "sunnyday" | "sun" => Some(Weather::Sun),
            "snow" | "hail" => Some(Weather::Snow),
            "raindance" | "rain" => Some(Weather::Rain),
            "sandstorm" | "sand" => Some(Weather::Sand),
            _ => None,
        }
    }

    /// Stable numeric code for tabular export (0 is "no weather")
    pub fn code(&self) -> u8 {
        match self {
            Weather::Sun => 1,
            Weather::Snow => 2,
            Weather::Rain => 3,
            Weather::Sand => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Weather::Sun => "Sun",
            Weather::Snow => "Snow",
            Weather::Rain => "Rain",
            Weather::Sand => "Sandstorm",
        }
    }
}

impl std::fmt::Display for Weather {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Terrain conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    Electric,
    Psychic,
    Misty,
    Grassy,
}

impl Terrain {
    /// Parse from a field-condition string like "move: Grassy Terrain"
    pub fn from_protocol(s: &str) -> Option<Self> {
        let clean = s.strip_prefix("move: ").unwrap_or(s);
        let normalized = clean.to_lowercase().replace([' ', '-'], "");

        match normalized.as_str() {
            "electricterrain" | "electric" => Some(Terrain::Electric),
            "psychicterrain" | "psychic" => Some(Terrain::Psychic),
            "mistyterrain" | "misty" => Some(Terrain::Misty),
            "grassyterrain" | "grassy" => Some(Terrain::Grassy),
            _ => None,
        }
    }

    /// Stable numeric code for tabular export (0 is "no terrain")
    pub fn code(&self) -> u8 {
        match self {
            Terrain::Electric => 1,
            Terrain::Psychic => 2,
            Terrain::Misty => 3,
            Terrain::Grassy => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Terrain::Electric => "Electric Terrain",
            Terrain::Psychic => "Psychic Terrain",
            Terrain::Misty => "Misty Terrain",
            Terrain::Grassy => "Grassy Terrain",
        }
    }
}

impl std::fmt::Display for Terrain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Side conditions tracked per side (hazards and screens)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SideCondition {
    // Entry hazards
    StealthRock,
    Spikes,      // Stackable 1-3
    ToxicSpikes, // Stackable 1-2
    StickyWeb,

    // Screens and team protection
    Reflect,
    LightScreen,
    Mist,
    AuroraVeil,
    Safeguard,
}

impl SideCondition {
    /// Parse from a side-condition string like "Spikes" or "move: Stealth Rock"
    pub fn from_protocol(s: &str) -> Option<Self> {
        let clean = s.strip_prefix("move: ").unwrap_or(s);
        let normalized = clean.to_lowercase().replace([' ', '-'], "");

        match normalized.as_str() {
            "stealthrock" => Some(SideCondition::StealthRock),
            "spikes" => Some(SideCondition::Spikes),
            "toxicspikes" => Some(SideCondition::ToxicSpikes),
            "stickyweb" => Some(SideCondition::StickyWeb),
            "reflect" => Some(SideCondition::Reflect),
            "lightscreen" => Some(SideCondition::LightScreen),
            "mist" => Some(SideCondition::Mist),
            "auroraveil" => Some(SideCondition::AuroraVeil),
            "safeguard" => Some(SideCondition::Safeguard),
            _ => None,
        }
    }

    /// Maximum stacked layers for this condition
    pub fn max_layers(&self) -> u8 {
        match self {
            SideCondition::Spikes => 3,
            SideCondition::ToxicSpikes => 2,
            _ => 1,
        }
    }

    /// Check if this is an entry hazard
    pub fn is_hazard(&self) -> bool {
        matches!(
            self,
            SideCondition::StealthRock
                | SideCondition::Spikes
                | SideCondition::ToxicSpikes
                | SideCondition::StickyWeb
        )
    }

    /// Check if this is a screen
    pub fn is_screen(&self) -> bool {
        !self.is_hazard()
    }
}

/// One side's hazards and screens
///
/// Spikes and Toxic Spikes stack with a cap; everything else is a
/// presence flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SideConditions {
    pub stealth_rock: bool,
    pub spikes: u8,
    pub toxic_spikes: u8,
    pub sticky_web: bool,
    pub reflect: bool,
    pub light_screen: bool,
    pub mist: bool,
    pub aurora_veil: bool,
    pub safeguard: bool,
}

impl SideConditions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a `-sidestart` for the given condition
    pub fn start(&mut self, cond: SideCondition) {
        match cond {
            SideCondition::StealthRock => self.stealth_rock = true,
            SideCondition::Spikes => {
                self.spikes = (self.spikes + 1).min(cond.max_layers());
            }
            SideCondition::ToxicSpikes => {
                self.toxic_spikes = (self.toxic_spikes + 1).min(cond.max_layers());
            }
            SideCondition::StickyWeb => self.sticky_web = true,
            SideCondition::Reflect => self.reflect = true,
            SideCondition::LightScreen => self.light_screen = true,
            SideCondition::Mist => self.mist = true,
            SideCondition::AuroraVeil => self.aurora_veil = true,
            SideCondition::Safeguard => self.safeguard = true,
        }
    }

    /// Apply a `-sideend` for the given condition
    pub fn end(&mut self, cond: SideCondition) {
        match cond {
            SideCondition::StealthRock => self.stealth_rock = false,
            SideCondition::Spikes => self.spikes = 0,
            SideCondition::ToxicSpikes => self.toxic_spikes = 0,
            SideCondition::StickyWeb => self.sticky_web = false,
            SideCondition::Reflect => self.reflect = false,
            SideCondition::LightScreen => self.light_screen = false,
            SideCondition::Mist => self.mist = false,
            SideCondition::AuroraVeil => self.aurora_veil = false,
            SideCondition::Safeguard => self.safeguard = false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_from_protocol() {
        assert_eq!(Weather::from_protocol("SunnyDay"), Some(Weather::Sun));
        assert_eq!(Weather::from_protocol("RainDance"), Some(Weather::Rain));
        assert_eq!(Weather::from_protocol("Sandstorm"), Some(Weather::Sand));
        assert_eq!(Weather::from_protocol("Snow"), Some(Weather::Snow));
        assert_eq!(Weather::from_protocol("Hail"), Some(Weather::Snow));
        assert_eq!(Weather::from_protocol("none"), None);
        assert_eq!(Weather::from_protocol("DeltaStream"), None);
    }

    #[test]
    fn test_terrain_from_protocol() {
        assert_eq!(
            Terrain::from_protocol("move: Electric Terrain"),
            Some(Terrain::Electric)
        );
        assert_eq!(
            Terrain::from_protocol("Grassy Terrain"),
            Some(Terrain::Grassy)
        );
        assert_eq!(Terrain::from_protocol("Trick Room"), None);
    }

    #[test]
    fn test_side_condition_from_protocol() {
        assert_eq!(
            SideCondition::from_protocol("move: Stealth Rock"),
            Some(SideCondition::StealthRock)
        );
        assert_eq!(
            SideCondition::from_protocol("Spikes"),
            Some(SideCondition::Spikes)
        );
        assert_eq!(
            SideCondition::from_protocol("Light Screen"),
            Some(SideCondition::LightScreen)
        );
        assert_eq!(SideCondition::from_protocol("Tailwind"), None);
    }

    #[test]
    fn test_spikes_clamp_at_three_layers() {
        let mut conditions = SideConditions::new();
        for _ in 0..4 {
            conditions.start(SideCondition::Spikes);
        }
        assert_eq!(conditions.spikes, 3);

        conditions.end(SideCondition::Spikes);
        assert_eq!(conditions.spikes, 0);
    }

    #[test]
    fn test_toxic_spikes_clamp_at_two_layers() {
        let mut conditions = SideConditions::new();
        for _ in 0..3 {
            conditions.start(SideCondition::ToxicSpikes);
        }
        assert_eq!(conditions.toxic_spikes, 2);
    }

    #[test]
    fn test_screens_are_presence_flags() {
        let mut conditions = SideConditions::new();
        conditions.start(SideCondition::Reflect);
        conditions.start(SideCondition::Reflect);
        assert!(conditions.reflect);

        conditions.end(SideCondition::Reflect);
        assert!(!conditions.reflect);
    }

    #[test]
    fn test_hazard_screen_split() {
        assert!(SideCondition::StealthRock.is_hazard());
        assert!(SideCondition::StickyWeb.is_hazard());
        assert!(SideCondition::AuroraVeil.is_screen());
        assert!(SideCondition::Safeguard.is_screen());
    }
}
