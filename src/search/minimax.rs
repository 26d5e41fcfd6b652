//! Exhaustive minimax over the full game tree.
//!
//! ## Scoring
//!
//! Terminal boards score [`WIN_SCORE`] (+10) when O has won,
//! [`LOSS_SCORE`] (-10) when X has won, and 0 for a draw. There is no
//! depth discount: a win in one ply and a win in five score identically,
//! and the root sweep keeps the first strict maximum, so ties between
//! equally scored moves always fall on the lowest index.
//!
//! ## Shape
//!
//! The remaining game tree is at most 9 plies deep, so the search runs to
//! the bottom every time without pruning or a depth cap. Recursion works
//! on trial copies (`Board` is `Copy`) and never mutates the caller's
//! board.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Player};

/// Score of a terminal board that O has won.
pub const WIN_SCORE: i32 = 10;
/// Score of a terminal board that X has won.
pub const LOSS_SCORE: i32 = -10;
/// Score of a drawn board.
pub const DRAW_SCORE: i32 = 0;

/// Result of a root sweep: the chosen cell plus search diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Chosen cell index.
    pub index: usize,
    /// Minimax score of the chosen move, from O's point of view.
    pub score: i32,
    /// Boards evaluated during the sweep, terminal boards included.
    pub nodes: u64,
}

/// Score a terminal board from O's point of view.
///
/// Returns [`DRAW_SCORE`] for boards with no winner, including boards
/// that are not terminal at all; callers check for terminality first.
#[must_use]
pub fn score(board: &Board) -> i32 {
    match board.winner() {
        Some(Player::O) => WIN_SCORE,
        Some(Player::X) => LOSS_SCORE,
        None => DRAW_SCORE,
    }
}

/// Exhaustively evaluate `board` with `maximizing` to move.
///
/// `maximizing` means O picks the next move; otherwise X does. Pure: the
/// board is unchanged and repeated calls return the same score.
#[must_use]
pub fn minimax(board: &Board, maximizing: bool) -> i32 {
    let mut nodes = 0;
    minimax_counted(board, maximizing, &mut nodes)
}

/// [`minimax`] with a node counter threaded through for diagnostics.
pub(crate) fn minimax_counted(board: &Board, maximizing: bool, nodes: &mut u64) -> i32 {
    *nodes += 1;

    if board.winner().is_some() || board.is_full() {
        return score(board);
    }

    let player = if maximizing { Player::O } else { Player::X };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for index in board.available_moves() {
        // available_moves only yields empty cells, so the trial cannot fail.
        if let Ok(trial) = board.with_move(index, player) {
            let value = minimax_counted(&trial, !maximizing, nodes);
            best = if maximizing {
                best.max(value)
            } else {
                best.min(value)
            };
        }
    }

    best
}

/// Find O's best move: sweep every available cell in ascending order and
/// keep the first strict maximum.
///
/// Returns `None` exactly when the board is full. The strict `>`
/// tie-break is observable behavior: among equally scored moves, the
/// lowest index wins.
#[must_use]
pub fn best_move(board: &Board) -> Option<SearchResult> {
    let mut nodes = 0;
    let mut best: Option<(usize, i32)> = None;

    for index in board.available_moves() {
        if let Ok(trial) = board.with_move(index, Player::O) {
            let value = minimax_counted(&trial, false, &mut nodes);
            match best {
                Some((_, best_score)) if value <= best_score => {}
                _ => best = Some((index, value)),
            }
        }
    }

    best.map(|(index, score)| SearchResult {
        index,
        score,
        nodes,
    })
}
