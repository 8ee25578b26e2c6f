pub mod catch;
pub mod engine;
pub mod state;
