//! Capture chance calculation.
//!
//! The chance is a pure function of the wild monster's remaining HP:
//! `(3 * max_hp - 2 * current_hp) / (3 * max_hp)` scaled to percent, so a
//! full-HP target sits at roughly 33% and a nearly fainted one approaches
//! 100%, capped at 95%.

use crate::monster::WildMonster;
use crate::rng::GameRng;

const CAPTURE_CHANCE_CAP: f32 = 95.0;

/// Capture success chance in percent for the given wild monster.
pub fn calculate_capture_chance(wild: &WildMonster) -> f32 {
    let max_hp = f32::from(wild.max_hp);
    let current_hp = f32::from(wild.current_hp);
    let hp_multiplier = (max_hp * 3.0 - current_hp * 2.0) / (max_hp * 3.0);
    (hp_multiplier * 100.0).min(CAPTURE_CHANCE_CAP)
}

/// Roll for capture success using the calculated chance.
pub fn roll_capture_success(chance: f32, rng: &mut GameRng) -> bool {
    f32::from(rng.next_outcome("capture roll")) <= chance
}
