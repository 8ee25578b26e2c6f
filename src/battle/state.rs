use crate::monster::WildMonster;
use chrono::{DateTime, Utc};
use schema::BattlePhase;
use serde::{Deserialize, Serialize};

/// One encounter's battle session.
///
/// Lives in the in-memory registry for the duration of a single encounter;
/// it is not expected to survive a server restart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleInfo {
    pub battle_id: String,
    pub player_id: String,
    pub wild_monster: WildMonster,
    pub state: BattlePhase,
    pub started_at: DateTime<Utc>,
}

impl BattleInfo {
    /// A fresh session; the state always starts at `battle`.
    pub fn new(battle_id: String, player_id: String, wild_monster: WildMonster) -> Self {
        Self {
            battle_id,
            player_id,
            wild_monster,
            state: BattlePhase::Battle,
            started_at: Utc::now(),
        }
    }
}

/// Everything noteworthy that happened while resolving one action.
///
/// Events carry the display strings and numbers they need, and `format`
/// renders the narrative line shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleEvent {
    DamageDealt {
        target: String,
        damage: u16,
        remaining_hp: u16,
    },
    WildDefeated {
        name: String,
    },
    CounterAttack {
        attacker: String,
        target: String,
        damage: u16,
        remaining_hp: u16,
    },
    PlayerMonsterFainted {
        name: String,
    },
    CaptureSucceeded {
        name: String,
    },
    CaptureFailed {
        name: String,
    },
    Escaped,
}

impl BattleEvent {
    pub fn format(&self) -> String {
        match self {
            BattleEvent::DamageDealt { target, damage, .. } => {
                format!("{}に{}のダメージ！", target, damage)
            }
            BattleEvent::WildDefeated { name } => format!("{}をたおした！", name),
            BattleEvent::CounterAttack {
                attacker,
                target,
                damage,
                ..
            } => format!(
                "{}のはんげき！{}は{}のダメージをうけた！",
                attacker, target, damage
            ),
            BattleEvent::PlayerMonsterFainted { name } => {
                format!("{}はたおれてしまった…", name)
            }
            BattleEvent::CaptureSucceeded { name } => {
                format!("やったー！{}をつかまえた！", name)
            }
            BattleEvent::CaptureFailed { name } => {
                format!("ああっ！{}はボールからとびだした！", name)
            }
            BattleEvent::Escaped => "うまくにげきれた！".to_string(),
        }
    }
}
