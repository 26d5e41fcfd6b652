//! Decision policies for the computer player.
//!
//! Policies are trait-based so the scheduler can swap opponents:
//! - [`BlendedPolicy`]: the production opponent, part random, part perfect
//! - [`PerfectPolicy`]: the full sweep every turn, never loses
//! - [`RandomPolicy`]: uniform over available cells
//!
//! A policy sees the live board and the game's RNG and answers with a
//! [`MoveDecision`]. `None` means no cell is available.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::core::{Board, GameRng};

use super::minimax::{best_move, SearchResult};

/// Which branch of a policy produced a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecisionKind {
    /// Uniform pick among available cells.
    Random,
    /// Full minimax sweep.
    Search,
}

/// A chosen computer move plus diagnostics for the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveDecision {
    /// Chosen cell index.
    pub index: usize,
    /// Minimax score of the move; 0 for random picks.
    pub score: i32,
    /// Which branch chose it.
    pub kind: DecisionKind,
    /// Boards evaluated; 0 for random picks.
    pub nodes: u64,
    /// Wall-clock time spent deciding, in microseconds.
    pub time_us: u64,
}

/// How the computer picks its move.
///
/// Implementations play O. They must be pure with respect to the board:
/// only the RNG may carry state between calls.
pub trait MovePolicy: Send + Sync {
    /// Choose a cell for O on `board`, or `None` when no cell is
    /// available.
    fn choose(&self, board: &Board, rng: &mut GameRng) -> Option<MoveDecision>;
}

/// The production opponent: part random, part perfect.
///
/// With probability [`random_move_chance`](Self::random_move_chance) the
/// move is a uniform pick among the available cells; otherwise it is the
/// full [`best_move`] sweep.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct BlendedPolicy {
    /// Probability of the random branch, in `[0, 1]`.
    pub random_move_chance: f64,
}

impl BlendedPolicy {
    /// Policy with the given random-branch probability.
    #[must_use]
    pub fn new(random_move_chance: f64) -> Self {
        Self { random_move_chance }
    }
}

impl Default for BlendedPolicy {
    fn default() -> Self {
        Self {
            random_move_chance: 0.3,
        }
    }
}

impl MovePolicy for BlendedPolicy {
    fn choose(&self, board: &Board, rng: &mut GameRng) -> Option<MoveDecision> {
        let start = Instant::now();

        // gen_bool panics outside [0, 1]
        let chance = self.random_move_chance.clamp(0.0, 1.0);
        if rng.gen_bool(chance) {
            let moves = board.available_moves();
            let index = *rng.choose(&moves)?;
            return Some(MoveDecision {
                index,
                score: 0,
                kind: DecisionKind::Random,
                nodes: 0,
                time_us: start.elapsed().as_micros() as u64,
            });
        }

        let SearchResult {
            index,
            score,
            nodes,
        } = best_move(board)?;
        Some(MoveDecision {
            index,
            score,
            kind: DecisionKind::Search,
            nodes,
            time_us: start.elapsed().as_micros() as u64,
        })
    }
}

/// The full sweep every turn. Never loses.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct PerfectPolicy;

impl MovePolicy for PerfectPolicy {
    fn choose(&self, board: &Board, _rng: &mut GameRng) -> Option<MoveDecision> {
        let start = Instant::now();
        let SearchResult {
            index,
            score,
            nodes,
        } = best_move(board)?;
        Some(MoveDecision {
            index,
            score,
            kind: DecisionKind::Search,
            nodes,
            time_us: start.elapsed().as_micros() as u64,
        })
    }
}

/// Uniform over available cells. The easiest opponent.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct RandomPolicy;

impl MovePolicy for RandomPolicy {
    fn choose(&self, board: &Board, rng: &mut GameRng) -> Option<MoveDecision> {
        let start = Instant::now();
        let moves = board.available_moves();
        let index = *rng.choose(&moves)?;
        Some(MoveDecision {
            index,
            score: 0,
            kind: DecisionKind::Random,
            nodes: 0,
            time_us: start.elapsed().as_micros() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_perfect_policy_answers_center_with_a_corner() {
        let board = board(". . .\n. X .\n. . .");
        let mut rng = GameRng::new(42);
        let decision = PerfectPolicy.choose(&board, &mut rng).unwrap();
        assert!([0, 2, 6, 8].contains(&decision.index));
        assert_eq!(decision.kind, DecisionKind::Search);
        assert!(decision.nodes > 0);
    }

    #[test]
    fn test_all_policies_return_none_on_full_board() {
        let board = board("X O X\nX X O\nO X O");
        let mut rng = GameRng::new(42);
        assert_eq!(PerfectPolicy.choose(&board, &mut rng), None);
        assert_eq!(RandomPolicy.choose(&board, &mut rng), None);
        assert_eq!(BlendedPolicy::default().choose(&board, &mut rng), None);
        assert_eq!(BlendedPolicy::new(1.0).choose(&board, &mut rng), None);
    }

    #[test]
    fn test_blended_with_zero_chance_matches_perfect() {
        let board = board("X X .\n. O .\n. . .");
        let mut rng1 = GameRng::new(7);
        let mut rng2 = GameRng::new(7);

        let blended = BlendedPolicy::new(0.0).choose(&board, &mut rng1).unwrap();
        let perfect = PerfectPolicy.choose(&board, &mut rng2).unwrap();

        assert_eq!(blended.index, perfect.index);
        assert_eq!(blended.score, perfect.score);
        assert_eq!(blended.kind, DecisionKind::Search);
        assert_eq!(blended.nodes, perfect.nodes);
    }

    #[test]
    fn test_blended_with_full_chance_is_always_random() {
        let board = board("X . .\n. O .\n. . X");
        let mut rng = GameRng::new(11);
        let policy = BlendedPolicy::new(1.0);

        for _ in 0..50 {
            let decision = policy.choose(&board, &mut rng).unwrap();
            assert_eq!(decision.kind, DecisionKind::Random);
            assert_eq!(decision.score, 0);
            assert_eq!(decision.nodes, 0);
            assert!(board.available_moves().contains(&decision.index));
        }
    }

    #[test]
    fn test_blended_random_branch_rate() {
        // Binomial(1000, 0.3) lands in 200..=400 for any reasonable seed.
        let board = board("X . .\n. O .\n. . X");
        let mut rng = GameRng::new(42);
        let policy = BlendedPolicy::default();

        let randoms = (0..1000)
            .map(|_| policy.choose(&board, &mut rng).unwrap())
            .filter(|decision| decision.kind == DecisionKind::Random)
            .count();
        assert!((200..=400).contains(&randoms), "saw {} random picks", randoms);
    }

    #[test]
    fn test_policies_are_deterministic_per_seed() {
        let board = board("X . .\n. . .\n. . .");

        let mut rng1 = GameRng::new(99);
        let mut rng2 = GameRng::new(99);
        let policy = BlendedPolicy::default();
        for _ in 0..20 {
            let d1 = policy.choose(&board, &mut rng1).unwrap();
            let d2 = policy.choose(&board, &mut rng2).unwrap();
            assert_eq!(d1.index, d2.index);
            assert_eq!(d1.kind, d2.kind);
        }

        let mut rng1 = GameRng::new(5);
        let mut rng2 = GameRng::new(5);
        for _ in 0..20 {
            let d1 = RandomPolicy.choose(&board, &mut rng1).unwrap();
            let d2 = RandomPolicy.choose(&board, &mut rng2).unwrap();
            assert_eq!(d1.index, d2.index);
        }
    }

    #[test]
    fn test_decision_serde_round_trip() {
        let decision = MoveDecision {
            index: 4,
            score: 10,
            kind: DecisionKind::Search,
            nodes: 1234,
            time_us: 56,
        };
        let json = serde_json::to_string(&decision).unwrap();
        assert_eq!(serde_json::from_str::<MoveDecision>(&json).unwrap(), decision);
    }
}
