//! Game-level plumbing: configuration, observable state, and the turn
//! scheduler.

pub mod config;
pub mod scheduler;
pub mod state;

pub use config::GameConfig;
pub use scheduler::Game;
pub use state::{GameMode, GameState, Outcome};
