//! # tictactoe-engine
//!
//! A tic-tac-toe engine with an exhaustive minimax computer opponent.
//!
//! ## Design Principles
//!
//! 1. **Engine, not app**: no rendering, no input devices. Hosts draw the
//!    [`GameState`] snapshot and feed cell indices back in.
//!
//! 2. **Deterministic**: randomness reaches the opponent only through an
//!    injected seeded RNG, so the same seed and the same inputs replay
//!    the same game.
//!
//! 3. **Single-threaded**: the computer's think delay is data (a deadline
//!    the host polls), not a spawned thread.
//!
//! ## Architecture
//!
//! - **Exhaustive search**: the game tree is small enough to walk to the
//!   bottom every turn, so the evaluator does. No pruning, no caching.
//!
//! - **Blended opponent**: 30% of the computer's moves are uniformly
//!   random, the rest come from the full minimax sweep. Policies are
//!   trait objects and can be swapped per game.
//!
//! - **Silent rejection**: illegal inputs return [`InvalidMove`] and
//!   change nothing; nothing in the engine panics on user input.
//!
//! ## Modules
//!
//! - `core`: players, cells, the board, move validation, RNG
//! - `search`: exhaustive minimax and the decision policies
//! - `game`: configuration, observable state, the turn scheduler
//!
//! ## Usage
//!
//! ```
//! use std::time::Duration;
//! use tictactoe_engine::{Game, GameConfig, GameMode};
//!
//! // Zero think delay keeps the example snappy; the default is 500 ms.
//! let config = GameConfig::default().with_think_delay(Duration::ZERO);
//! let mut game = Game::new(config);
//! game.select_mode(GameMode::VsComputer);
//!
//! // The human plays X by cell index, 0 through 8.
//! game.submit_move(4)?;
//!
//! // The computer replies once the delay passes; poll each tick.
//! let reply = game.poll().expect("zero delay fires immediately");
//! println!("computer took cell {}", reply.index);
//! # Ok::<(), tictactoe_engine::InvalidMove>(())
//! ```

pub mod core;
pub mod game;
pub mod search;

// Re-export commonly used types
pub use crate::core::{Board, Cell, GameRng, InvalidMove, ParseBoardError, Player, LINES};

pub use crate::search::{
    BlendedPolicy, DecisionKind, MoveDecision, MovePolicy, PerfectPolicy, RandomPolicy,
    SearchResult,
};

pub use crate::game::{Game, GameConfig, GameMode, GameState, Outcome};
