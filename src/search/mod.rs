//! Exhaustive search and the computer's decision policies.
//!
//! [`minimax`] walks the entire remaining game tree (at most 9 plies);
//! [`best_move`] turns it into a root sweep with a first-strict-maximum
//! tie-break. The [`MovePolicy`] trait makes opponents pluggable;
//! [`BlendedPolicy`] is the production one.

pub mod minimax;
pub mod policy;

pub use minimax::{best_move, minimax, score, SearchResult, DRAW_SCORE, LOSS_SCORE, WIN_SCORE};
pub use policy::{
    BlendedPolicy, DecisionKind, MoveDecision, MovePolicy, PerfectPolicy, RandomPolicy,
};
