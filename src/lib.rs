//! Monster Quest Game Backend
//!
//! A browser-game backend for a monster-collecting RPG: player
//! registration with a starter monster, grid-map movement with random wild
//! encounters, and a fight/capture/flee battle engine over an in-memory
//! store. The HTTP JSON surface lives in the server binary; everything
//! here is callable directly, which is how the tests drive it.

// --- MODULE DECLARATIONS ---
pub mod api;
pub mod battle;
pub mod errors;
pub mod ids;
pub mod map;
pub mod monster;
pub mod player;
pub mod rng;
pub mod species;
pub mod store;
pub mod validation;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
// Re-export the shared data definitions.
pub use schema::{BattleAction, BattlePhase, MonsterSpecies, Rarity};

// --- From this crate's modules (`src/`) ---

// Core battle engine functions and state.
pub use battle::engine::{apply_action, start_battle};
pub use battle::state::{BattleEvent, BattleInfo};

// Core runtime types.
pub use monster::{OwnedMonster, WildMonster};
pub use player::Player;
pub use rng::GameRng;

// Map movement and encounters.
pub use map::{Direction, MapConfig, MapSession, Position, StepOutcome};

// Primary data access functions.
pub use species::{all_species, get_species_data, STARTER_SPECIES_ID};

// Crate-specific error and result types.
pub use errors::{
    GameError, GameResult, InfrastructureError, NotFoundError, StateConflictError, ValidationError,
};
