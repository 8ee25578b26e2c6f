use serde::{Deserialize, Serialize};

/// The enumerated phase of a single encounter's resolution.
///
/// Every battle starts in `Battle`; the other four phases are terminal and
/// accept no further actions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BattlePhase {
    Battle,
    Capture,
    Victory,
    Defeat,
    Escape,
}

impl BattlePhase {
    /// A battle accepts actions only while it is still in progress.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, BattlePhase::Battle)
    }
}

/// The three commands a player may submit against a live battle.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BattleAction {
    Fight,
    Capture,
    Flee,
}
