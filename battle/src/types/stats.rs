//! Base stats and stat stages

use turnstone_protocol::Stat;

/// Base stat sextuple for a species
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub hp: u16,
    pub atk: u16,
    pub def: u16,
    pub spa: u16,
    pub spd: u16,
    pub spe: u16,
}

impl BaseStats {
    pub fn new(hp: u16, atk: u16, def: u16, spa: u16, spd: u16, spe: u16) -> Self {
        Self {
            hp,
            atk,
            def,
            spa,
            spd,
            spe,
        }
    }

    /// Stats in canonical order (hp, atk, def, spa, spd, spe)
    pub fn as_array(&self) -> [u16; 6] {
        [self.hp, self.atk, self.def, self.spa, self.spd, self.spe]
    }
}

/// Stat stages (-6 to +6)
///
/// Resets always construct a fresh zero value (`BoostStages::new()`);
/// sharing one zeroed instance between sides would let a later boost on
/// one side corrupt the other's reset state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoostStages {
    pub atk: i8,
    pub def: i8,
    pub spa: i8,
    pub spd: i8,
    pub spe: i8,
    pub accuracy: i8,
    pub evasion: i8,
}

impl BoostStages {
    /// Create new stat stages (all at 0)
    pub fn new() -> Self {
        Self::default()
    }

    /// Get stage for a stat
    pub fn get(&self, stat: Stat) -> i8 {
        match stat {
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::Spa => self.spa,
            Stat::Spd => self.spd,
            Stat::Spe => self.spe,
            Stat::Accuracy => self.accuracy,
            Stat::Evasion => self.evasion,
        }
    }

    /// Set stage for a stat (clamped to -6..+6)
    pub fn set(&mut self, stat: Stat, value: i8) {
        let clamped = value.clamp(-6, 6);
        match stat {
            Stat::Atk => self.atk = clamped,
            Stat::Def => self.def = clamped,
            Stat::Spa => self.spa = clamped,
            Stat::Spd => self.spd = clamped,
            Stat::Spe => self.spe = clamped,
            Stat::Accuracy => self.accuracy = clamped,
            Stat::Evasion => self.evasion = clamped,
        }
    }

    /// Apply a boost to a stat, returns actual change applied
    pub fn boost(&mut self, stat: Stat, amount: i8) -> i8 {
        let current = self.get(stat);
        let new_value = current.saturating_add(amount).clamp(-6, 6);
        self.set(stat, new_value);
        new_value - current
    }

    /// Apply an unboost (negative boost) to a stat, returns actual change applied
    pub fn unboost(&mut self, stat: Stat, amount: i8) -> i8 {
        self.boost(stat, amount.saturating_neg())
    }

    /// Reset all stages to 0
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check if all stages are at 0
    pub fn is_clear(&self) -> bool {
        self == &Self::default()
    }

    /// Stages in export order (atk, def, spa, spd, spe, evasion, accuracy)
    pub fn as_array(&self) -> [i8; 7] {
        [
            self.atk,
            self.def,
            self.spa,
            self.spd,
            self.spe,
            self.evasion,
            self.accuracy,
        ]
    }
}
