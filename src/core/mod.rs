//! Core engine types: players, cells, the board, and deterministic RNG.
//!
//! Everything here is pure data and pure functions; turn order, timing,
//! and the opponent live in `game` and `search`.

pub mod board;
pub mod player;
pub mod rng;

pub use board::{Board, InvalidMove, ParseBoardError, LINES};
pub use player::{Cell, Player};
pub use rng::GameRng;
