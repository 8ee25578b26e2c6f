// Monster Quest Schema - Shared type definitions
// This crate contains the core enums and data records that are shared between
// the game library, the HTTP server binary, and the tests.

// Re-export the main types
pub use battle_data::*;
pub use species_data::*;

pub mod battle_data;
pub mod species_data;
