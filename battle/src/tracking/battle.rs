//! BattleState - per-match mutable state

use turnstone_protocol::Player;

use crate::types::{SideState, Terrain, Weather};

/// The full state of one battle being replayed
///
/// Created empty at replay start, mutated event by event through
/// [`BattleState::apply`](crate::BattleState::apply), discarded at `win`
/// or end of input. All state is owned by the value; `Clone` produces
/// the deep copy used for turn-boundary baselines.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleState {
    /// Player sides (index 0 = p1, index 1 = p2)
    pub sides: [SideState; 2],

    /// Current weather (None = clear)
    pub weather: Option<Weather>,

    /// Current terrain (None = no terrain)
    pub terrain: Option<Terrain>,

    /// Current turn number (0 = not started)
    pub turn: u32,

    /// Whether the battle has ended
    pub ended: bool,

    /// Winner's username (if ended)
    pub winner: Option<String>,
}

impl BattleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a side by player
    pub fn side(&self, player: Player) -> &SideState {
        &self.sides[player.index()]
    }

    /// Get a side mutably by player
    pub fn side_mut(&mut self, player: Player) -> &mut SideState {
        &mut self.sides[player.index()]
    }

    /// Exchange both sides' hazard and screen sets (Court Change)
    pub fn swap_side_conditions(&mut self) {
        let [p1, p2] = &mut self.sides;
        std::mem::swap(&mut p1.conditions, &mut p2.conditions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SideCondition;

    #[test]
    fn test_new_battle_is_empty() {
        let battle = BattleState::new();
        assert_eq!(battle.turn, 0);
        assert!(!battle.ended);
        assert!(battle.weather.is_none());
        assert!(battle.terrain.is_none());
        assert_eq!(battle.side(Player::P1).revealed_count(), 0);
    }

    #[test]
    fn test_swap_side_conditions_is_atomic_exchange() {
        let mut battle = BattleState::new();
        battle
            .side_mut(Player::P1)
            .conditions
            .start(SideCondition::Spikes);
        battle
            .side_mut(Player::P1)
            .conditions
            .start(SideCondition::Spikes);
        battle
            .side_mut(Player::P2)
            .conditions
            .start(SideCondition::Reflect);

        battle.swap_side_conditions();

        assert_eq!(battle.side(Player::P1).conditions.spikes, 0);
        assert!(battle.side(Player::P1).conditions.reflect);
        assert_eq!(battle.side(Player::P2).conditions.spikes, 2);
        assert!(!battle.side(Player::P2).conditions.reflect);
    }
}
