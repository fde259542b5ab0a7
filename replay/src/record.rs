//! Labeled decision snapshots
//!
//! An [`ActionRecord`] is one flat training row: the acting side's view
//! of the battle at the last turn boundary, plus the label for the
//! action taken. Fields are side-relative ("Player" is always the
//! acting side) so records from either seat share one schema.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use turnstone_battle::{BaseStats, BattleState, Player, SideState, TypePair};

use crate::dex::Dex;

/// Label value for a switch decision (move ids start at 1)
pub const SWITCH_LABEL: u32 = 0;

/// Snapshot of one roster slot, reduced to export codes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlotSnapshot {
    /// Species code (0 = unrevealed slot or unknown species)
    pub number: u32,
    /// HP percentage 0-100
    pub hp: u8,
    /// Status code (0 = healthy)
    pub status: u8,
    /// Type codes, 0 = no type
    pub type1: u8,
    pub type2: u8,
    /// Base stats in (hp, atk, def, spa, spd, spe) order
    pub stats: [u16; 6],
}

/// One side of an [`ActionRecord`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SideSnapshot {
    /// Slot 0 is the on-field Pokemon, 1-5 the bench
    pub slots: [SlotSnapshot; 6],
    /// Boost stages in (atk, def, spa, spd, spe, evasion, accuracy) order
    pub boosts: [i8; 7],
    /// Hazard and screen values (layer counts; presence flags as 0/1)
    pub stealth_rock: u8,
    pub spikes: u8,
    pub toxic_spikes: u8,
    pub sticky_web: u8,
    pub reflect: u8,
    pub light_screen: u8,
    pub mist: u8,
    pub aurora_veil: u8,
    pub safeguard: u8,
}

impl SideSnapshot {
    /// Freeze one side into export form. Pure: the same side always
    /// produces the same snapshot, whichever seat it is viewed from.
    pub fn from_side(side: &SideState, dex: &Dex) -> Self {
        let mut slots = [SlotSnapshot::default(); 6];
        for (snapshot, slot) in slots.iter_mut().zip(side.roster.iter()) {
            let (type1, type2) = slot.types.codes();
            *snapshot = SlotSnapshot {
                number: dex.species_number(&slot.species),
                hp: slot.hp_percent,
                status: slot.status.map_or(0, |s| s.code()),
                type1,
                type2,
                stats: slot.stats.as_array(),
            };
        }

        let conditions = &side.conditions;
        SideSnapshot {
            slots,
            boosts: side.boosts.as_array(),
            stealth_rock: conditions.stealth_rock.into(),
            spikes: conditions.spikes,
            toxic_spikes: conditions.toxic_spikes,
            sticky_web: conditions.sticky_web.into(),
            reflect: conditions.reflect.into(),
            light_screen: conditions.light_screen.into(),
            mist: conditions.mist.into(),
            aurora_veil: conditions.aurora_veil.into(),
            safeguard: conditions.safeguard.into(),
        }
    }
}

/// Stat/type line for the Pokemon a switch brings in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncomingSpecies {
    pub number: u32,
    pub stats: BaseStats,
    pub types: TypePair,
}

/// One labeled decision snapshot
///
/// Serializes to a flat map of named columns suitable for row-wise
/// tabular export; see [`ActionRecord::serialize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRecord {
    /// The acting side
    pub player: SideSnapshot,
    /// The opposing side
    pub enemy: SideSnapshot,
    /// Weather code (0 = clear)
    pub weather: u8,
    /// Terrain code (0 = none)
    pub terrain: u8,
    /// Stat/type line of the incoming Pokemon, for switch records
    pub incoming: Option<IncomingSpecies>,
    /// Move id, or [`SWITCH_LABEL`] for a switch
    pub label: u32,
}

impl ActionRecord {
    /// Build a record from a frozen battle state for the acting player.
    pub fn from_state(
        state: &BattleState,
        actor: Player,
        label: u32,
        incoming: Option<IncomingSpecies>,
        dex: &Dex,
    ) -> Self {
        ActionRecord {
            player: SideSnapshot::from_side(state.side(actor), dex),
            enemy: SideSnapshot::from_side(state.side(actor.opponent()), dex),
            weather: state.weather.map_or(0, |w| w.code()),
            terrain: state.terrain.map_or(0, |t| t.code()),
            incoming,
            label,
        }
    }
}

const SLOT_NAMES: [&str; 6] = [
    "Pkmn",
    "BenchOne",
    "BenchTwo",
    "BenchThree",
    "BenchFour",
    "BenchFive",
];
const STAT_NAMES: [&str; 6] = ["HP", "Atk", "Def", "SpA", "SpD", "Spe"];
const BOOST_NAMES: [&str; 7] = ["Atk", "Def", "Spa", "Spd", "Spe", "Eva", "Acc"];

fn serialize_side<M: SerializeMap>(
    map: &mut M,
    prefix: &str,
    side: &SideSnapshot,
) -> Result<(), M::Error> {
    for (slot_name, slot) in SLOT_NAMES.iter().zip(side.slots.iter()) {
        // The on-field block uses "PkmnOnField"/"PkmnHealth"; bench
        // blocks use the bare bench name for the species code and "Hp".
        let (number_col, hp_col) = if *slot_name == "Pkmn" {
            (format!("{prefix}PkmnOnField"), format!("{prefix}PkmnHealth"))
        } else {
            (format!("{prefix}{slot_name}"), format!("{prefix}{slot_name}Hp"))
        };

        map.serialize_entry(&number_col, &slot.number)?;
        map.serialize_entry(&hp_col, &slot.hp)?;
        map.serialize_entry(&format!("{prefix}{slot_name}Status"), &slot.status)?;
        map.serialize_entry(&format!("{prefix}{slot_name}Type1"), &slot.type1)?;
        map.serialize_entry(&format!("{prefix}{slot_name}Type2"), &slot.type2)?;
        for (stat_name, value) in STAT_NAMES.iter().zip(slot.stats.iter()) {
            map.serialize_entry(&format!("{prefix}{slot_name}{stat_name}"), value)?;
        }
    }

    for (boost_name, value) in BOOST_NAMES.iter().zip(side.boosts.iter()) {
        map.serialize_entry(&format!("{prefix}Boost{boost_name}"), value)?;
    }

    Ok(())
}

fn serialize_hazards<M: SerializeMap>(
    map: &mut M,
    prefix: &str,
    side: &SideSnapshot,
) -> Result<(), M::Error> {
    map.serialize_entry(&format!("{prefix}StealthRock"), &side.stealth_rock)?;
    map.serialize_entry(&format!("{prefix}Spikes"), &side.spikes)?;
    map.serialize_entry(&format!("{prefix}ToxicSpikes"), &side.toxic_spikes)?;
    map.serialize_entry(&format!("{prefix}StickyWeb"), &side.sticky_web)?;
    map.serialize_entry(&format!("{prefix}Reflect"), &side.reflect)?;
    map.serialize_entry(&format!("{prefix}LightScreen"), &side.light_screen)?;
    map.serialize_entry(&format!("{prefix}Mist"), &side.mist)?;
    map.serialize_entry(&format!("{prefix}AuroraVeil"), &side.aurora_veil)?;
    map.serialize_entry(&format!("{prefix}Safeguard"), &side.safeguard)?;
    Ok(())
}

impl Serialize for ActionRecord {
    /// Flat column layout: player block, enemy block, field, hazards,
    /// incoming species (zeros for move records), then the label as
    /// `PlayerMove`.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;

        serialize_side(&mut map, "Player", &self.player)?;
        serialize_side(&mut map, "Enemy", &self.enemy)?;

        map.serialize_entry("Weather", &self.weather)?;
        map.serialize_entry("Terrain", &self.terrain)?;

        serialize_hazards(&mut map, "Player", &self.player)?;
        serialize_hazards(&mut map, "Enemy", &self.enemy)?;

        let (number, stats, (type1, type2)) = match &self.incoming {
            Some(incoming) => (incoming.number, incoming.stats.as_array(), incoming.types.codes()),
            None => (0, [0; 6], (0, 0)),
        };
        map.serialize_entry("IncomingPkmn", &number)?;
        map.serialize_entry("IncomingType1", &type1)?;
        map.serialize_entry("IncomingType2", &type2)?;
        for (stat_name, value) in STAT_NAMES.iter().zip(stats.iter()) {
            map.serialize_entry(&format!("Incoming{stat_name}"), value)?;
        }

        map.serialize_entry("PlayerMove", &self.label)?;

        map.end()
    }
}
