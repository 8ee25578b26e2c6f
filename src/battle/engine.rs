//! Battle resolution: one action in, the next battle state plus the
//! narrative events out.
//!
//! The engine is pure over `BattleInfo`, the player's lead monster, and an
//! injected `GameRng`; identity allocation and persistence stay with the
//! caller.

use crate::battle::catch::{calculate_capture_chance, roll_capture_success};
use crate::battle::state::{BattleEvent, BattleInfo};
use crate::monster::{OwnedMonster, WildMonster};
use crate::rng::GameRng;
use crate::errors::StateConflictError;
use schema::{BattleAction, BattlePhase};

const FIGHT_DAMAGE_MIN: u16 = 8;
const FIGHT_DAMAGE_MAX: u16 = 12;
const COUNTER_DAMAGE_MIN: u16 = 3;
const COUNTER_DAMAGE_MAX: u16 = 7;

/// Opens a new battle session against the given wild monster.
pub fn start_battle(battle_id: String, player_id: String, wild: WildMonster) -> BattleInfo {
    BattleInfo::new(battle_id, player_id, wild)
}

/// Applies one action to a live battle.
///
/// Only valid while the state is `battle`; terminal sessions reject the
/// action with a state-conflict error. The player's lead monster is
/// optional — with no usable monster there is nobody for the wild side to
/// counter-attack, so the defeat branch cannot fire.
pub fn apply_action(
    battle: &mut BattleInfo,
    lead_monster: Option<&mut OwnedMonster>,
    action: BattleAction,
    rng: &mut GameRng,
) -> Result<Vec<BattleEvent>, StateConflictError> {
    if battle.state.is_terminal() {
        return Err(StateConflictError::BattleConcluded {
            battle_id: battle.battle_id.clone(),
            phase: battle.state,
        });
    }

    let mut events = Vec::new();
    match action {
        BattleAction::Fight => {
            let damage = rng.next_in_range(FIGHT_DAMAGE_MIN, FIGHT_DAMAGE_MAX, "attack damage");
            deal_damage_to_wild(battle, damage, &mut events);
            if battle.state == BattlePhase::Battle {
                counter_attack(battle, lead_monster, rng, &mut events);
            }
        }
        BattleAction::Capture => {
            let chance = calculate_capture_chance(&battle.wild_monster);
            if roll_capture_success(chance, rng) {
                battle.state = BattlePhase::Capture;
                events.push(BattleEvent::CaptureSucceeded {
                    name: battle.wild_monster.species_name.clone(),
                });
            } else {
                events.push(BattleEvent::CaptureFailed {
                    name: battle.wild_monster.species_name.clone(),
                });
                counter_attack(battle, lead_monster, rng, &mut events);
            }
        }
        BattleAction::Flee => {
            battle.state = BattlePhase::Escape;
            events.push(BattleEvent::Escaped);
        }
    }

    Ok(events)
}

fn deal_damage_to_wild(battle: &mut BattleInfo, damage: u16, events: &mut Vec<BattleEvent>) {
    battle.wild_monster.take_damage(damage);
    events.push(BattleEvent::DamageDealt {
        target: battle.wild_monster.species_name.clone(),
        damage,
        remaining_hp: battle.wild_monster.current_hp,
    });
    if battle.wild_monster.is_fainted() {
        battle.state = BattlePhase::Victory;
        events.push(BattleEvent::WildDefeated {
            name: battle.wild_monster.species_name.clone(),
        });
    }
}

fn counter_attack(
    battle: &mut BattleInfo,
    lead_monster: Option<&mut OwnedMonster>,
    rng: &mut GameRng,
    events: &mut Vec<BattleEvent>,
) {
    let Some(lead) = lead_monster else {
        return;
    };
    let damage = rng.next_in_range(COUNTER_DAMAGE_MIN, COUNTER_DAMAGE_MAX, "counter damage");
    lead.take_damage(damage);
    events.push(BattleEvent::CounterAttack {
        attacker: battle.wild_monster.species_name.clone(),
        target: lead.display_name().to_string(),
        damage,
        remaining_hp: lead.current_hp,
    });
    if lead.is_fainted() {
        battle.state = BattlePhase::Defeat;
        events.push(BattleEvent::PlayerMonsterFainted {
            name: lead.display_name().to_string(),
        });
    }
}
