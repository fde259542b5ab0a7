//! Pokemon type system

/// Pokemon types (18 types as of Gen 6+)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Type {
    Normal = 0,
    Fire = 1,
    Water = 2,
    Electric = 3,
    Grass = 4,
    Ice = 5,
    Fighting = 6,
    Poison = 7,
    Ground = 8,
    Flying = 9,
    Psychic = 10,
    Bug = 11,
    Rock = 12,
    Ghost = 13,
    Dragon = 14,
    Dark = 15,
    Steel = 16,
    Fairy = 17,
}

impl Type {
    /// Parse from a type name (case-insensitive)
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "normal" => Some(Type::Normal),
            "fire" => Some(Type::Fire),
            "water" => Some(Type::Water),
            "electric" => Some(Type::Electric),
            "grass" => Some(Type::Grass),
            "ice" => Some(Type::Ice),
            "fighting" => Some(Type::Fighting),
            "poison" => Some(Type::Poison),
            "ground" => Some(Type::Ground),
            "flying" => Some(Type::Flying),
            "psychic" => Some(Type::Psychic),
            "bug" => Some(Type::Bug),
            "rock" => Some(Type::Rock),
            "ghost" => Some(Type::Ghost),
            "dragon" => Some(Type::Dragon),
            "dark" => Some(Type::Dark),
            "steel" => Some(Type::Steel),
            "fairy" => Some(Type::Fairy),
            _ => None,
        }
    }

    /// Stable 1-based numeric code for tabular export (0 is "no type")
    pub fn code(&self) -> u8 {
        *self as u8 + 1
    }

    /// Canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Type::Normal => "Normal",
            Type::Fire => "Fire",
            Type::Water => "Water",
            Type::Electric => "Electric",
            Type::Grass => "Grass",
            Type::Ice => "Ice",
            Type::Fighting => "Fighting",
            Type::Poison => "Poison",
            Type::Ground => "Ground",
            Type::Flying => "Flying",
            Type::Psychic => "Psychic",
            Type::Bug => "Bug",
            Type::Rock => "Rock",
            Type::Ghost => "Ghost",
            Type::Dragon => "Dragon",
            Type::Dark => "Dark",
            Type::Steel => "Steel",
            Type::Fairy => "Fairy",
        }
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A species' type pair (secondary type optional, both absent for
/// unrevealed placeholder slots)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypePair {
    pub primary: Option<Type>,
    pub secondary: Option<Type>,
}

impl TypePair {
    pub fn single(primary: Type) -> Self {
        Self {
            primary: Some(primary),
            secondary: None,
        }
    }

    pub fn dual(primary: Type, secondary: Type) -> Self {
        Self {
            primary: Some(primary),
            secondary: Some(secondary),
        }
    }

    /// Export codes for (type1, type2); 0 means no type
    pub fn codes(&self) -> (u8, u8) {
        (
            self.primary.map_or(0, |t| t.code()),
            self.secondary.map_or(0, |t| t.code()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Type::from_name("Electric"), Some(Type::Electric));
        assert_eq!(Type::from_name("fairy"), Some(Type::Fairy));
        assert_eq!(Type::from_name("???"), None);
    }

    #[test]
    fn test_codes_are_one_based() {
        assert_eq!(Type::Normal.code(), 1);
        assert_eq!(Type::Fairy.code(), 18);
        assert_eq!(TypePair::default().codes(), (0, 0));
        assert_eq!(TypePair::dual(Type::Water, Type::Ground).codes(), (3, 9));
    }
}
