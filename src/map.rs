//! Map movement and wild encounter generation.
//!
//! The controller tracks a player's position on a bounded grid. Each
//! accepted step runs an independent encounter roll; when one fires, a
//! rarity-weighted species pick produces the fresh wild snapshot that the
//! battle engine's start operation consumes.

use crate::monster::WildMonster;
use crate::rng::GameRng;
use crate::species::species_of_rarity;
use schema::Rarity;
use serde::{Deserialize, Serialize};

/// Encounter odds per accepted step, in percent.
const ENCOUNTER_RATE_PERCENT: u8 = 15;

/// Rarity weights out of 100: common 70, rare 25, epic 5.
const RARE_THRESHOLD: u8 = 70;
const EPIC_THRESHOLD: u8 = 95;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: u16,
    pub y: u16,
}

/// Grid dimensions, configured once per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapConfig {
    pub width: u16,
    pub height: u16,
    pub encounter_rate_percent: u8,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 15,
            encounter_rate_percent: ENCOUNTER_RATE_PERCENT,
        }
    }
}

/// What one movement command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Position updated; nothing appeared.
    Moved(Position),
    /// Position updated and a wild monster appeared.
    Encounter(WildMonster),
    /// The move would leave the grid; position unchanged.
    Blocked,
}

/// One player's walk across the map.
pub struct MapSession {
    config: MapConfig,
    position: Position,
    status_message: String,
}

impl MapSession {
    pub fn new(config: MapConfig) -> Self {
        Self {
            config,
            position: Position {
                x: config.width / 2,
                y: config.height / 2,
            },
            status_message: String::new(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// The most recent status line for display.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Applies one movement command.
    ///
    /// Out-of-bounds moves are rejected without consuming an encounter
    /// roll. The encounter check is independent of the direction moved.
    pub fn step(&mut self, direction: Direction, rng: &mut GameRng) -> StepOutcome {
        let Some(next) = self.next_position(direction) else {
            self.status_message = "そちらへは進めない".to_string();
            return StepOutcome::Blocked;
        };
        self.position = next;

        if rng.next_outcome("encounter check") <= self.config.encounter_rate_percent {
            let wild = pick_wild_monster(rng);
            self.status_message = format!("あっ！やせいの{}がとびだしてきた！", wild.species_name);
            return StepOutcome::Encounter(wild);
        }

        self.status_message = String::new();
        StepOutcome::Moved(self.position)
    }

    fn next_position(&self, direction: Direction) -> Option<Position> {
        let Position { x, y } = self.position;
        let (x, y) = match direction {
            Direction::Up => (Some(x), y.checked_sub(1)),
            Direction::Down => (Some(x), y.checked_add(1)),
            Direction::Left => (x.checked_sub(1), Some(y)),
            Direction::Right => (x.checked_add(1), Some(y)),
        };
        match (x, y) {
            (Some(x), Some(y)) if x < self.config.width && y < self.config.height => {
                Some(Position { x, y })
            }
            _ => None,
        }
    }
}

/// Rarity-weighted wild monster pick, uniform within the chosen tier.
fn pick_wild_monster(rng: &mut GameRng) -> WildMonster {
    let tier_roll = rng.next_outcome("rarity tier");
    let rarity = if tier_roll <= RARE_THRESHOLD {
        Rarity::Common
    } else if tier_roll <= EPIC_THRESHOLD {
        Rarity::Rare
    } else {
        Rarity::Epic
    };

    let candidates = species_of_rarity(rarity);
    let index = usize::from(rng.next_outcome("species pick") - 1) % candidates.len();
    WildMonster::from_species(candidates[index])
}
