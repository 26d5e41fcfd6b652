//! Observable game state.
//!
//! [`GameState`] is the snapshot the presentation layer reads: plain
//! public fields, serializable, mutated only through
//! [`Game`](super::Game).

use serde::{Deserialize, Serialize};

use crate::core::{Board, Player};

/// How the game is being played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Two humans sharing the board.
    TwoPlayer,
    /// A human as X against the computer as O.
    VsComputer,
}

/// Where the game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves are still being accepted.
    InProgress,
    /// A line was completed.
    Won(Player),
    /// The board filled with no winner.
    Draw,
}

impl Outcome {
    /// Whether the game has ended.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Observable snapshot of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Current board.
    pub board: Board,
    /// Whose turn it is. Meaningful only while the game is in progress.
    pub current_player: Player,
    /// Selected mode, or `None` on the mode-select screen.
    pub mode: Option<GameMode>,
    /// Terminal status.
    pub outcome: Outcome,
    /// True from the moment a computer reply is scheduled until it fires
    /// or is cancelled. Human moves are rejected while set.
    pub awaiting_computer: bool,
}

impl GameState {
    /// A fresh state on the mode-select screen.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            mode: None,
            outcome: Outcome::InProgress,
            awaiting_computer: false,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
