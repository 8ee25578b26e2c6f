//! Monster instances: the player-owned rows and the ephemeral wild
//! snapshots that exist only for the duration of one encounter.

use chrono::{DateTime, Utc};
use schema::MonsterSpecies;
use serde::{Deserialize, Serialize};

/// A player's individual creature instance.
///
/// Created when a starter is granted or a wild monster is captured.
/// Invariants: `max_hp >= 1` and `current_hp <= max_hp` at all times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedMonster {
    pub id: String,
    pub player_id: String,
    pub species_id: String,
    /// Denormalized from the species record for display.
    pub species_name: String,
    pub nickname: Option<String>,
    pub current_hp: u16,
    pub max_hp: u16,
    pub captured_at: DateTime<Utc>,
}

impl OwnedMonster {
    /// Grants a fresh monster of the given species at full HP.
    pub fn starter(id: String, player_id: String, species: &MonsterSpecies) -> Self {
        Self {
            id,
            player_id,
            species_id: species.id.clone(),
            species_name: species.name.clone(),
            nickname: None,
            current_hp: species.base_hp,
            max_hp: species.base_hp,
            captured_at: Utc::now(),
        }
    }

    /// Converts a wild monster into an owned row with a new identity.
    ///
    /// Current HP carries over from the moment of capture; max HP comes
    /// from the species base.
    pub fn from_capture(
        id: String,
        player_id: String,
        wild: &WildMonster,
        species: &MonsterSpecies,
    ) -> Self {
        Self {
            id,
            player_id,
            species_id: species.id.clone(),
            species_name: species.name.clone(),
            nickname: None,
            current_hp: wild.current_hp.min(species.base_hp),
            max_hp: species.base_hp,
            captured_at: Utc::now(),
        }
    }

    /// Nickname when set, species name otherwise.
    pub fn display_name(&self) -> &str {
        self.nickname.as_deref().unwrap_or(&self.species_name)
    }

    pub fn take_damage(&mut self, damage: u16) {
        self.current_hp = self.current_hp.saturating_sub(damage);
    }

    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }
}

/// An unowned creature instance generated for one encounter.
///
/// Not persisted; converted into an [`OwnedMonster`] only on capture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WildMonster {
    pub species_id: String,
    pub species_name: String,
    pub current_hp: u16,
    pub max_hp: u16,
}

impl WildMonster {
    /// A fresh snapshot at full HP.
    pub fn from_species(species: &MonsterSpecies) -> Self {
        Self {
            species_id: species.id.clone(),
            species_name: species.name.clone(),
            current_hp: species.base_hp,
            max_hp: species.base_hp,
        }
    }

    pub fn take_damage(&mut self, damage: u16) {
        self.current_hp = self.current_hp.saturating_sub(damage);
    }

    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }

    /// Fraction of HP remaining, in `0.0..=1.0`.
    pub fn hp_fraction(&self) -> f32 {
        f32::from(self.current_hp) / f32::from(self.max_hp)
    }
}
