//! Turn scheduling and the delayed computer reply.
//!
//! ## State machine
//!
//! A [`Game`] starts on the mode-select screen (`mode == None`).
//! [`Game::select_mode`] starts a fresh game with X to move. Accepted
//! moves alternate the turn until a line completes or the board fills;
//! [`Game::reset`] returns to the mode-select screen from anywhere.
//! Rejected moves return [`InvalidMove`] and change nothing, so hosts can
//! feed in raw input and drop the errors.
//!
//! ## The computer's turn
//!
//! In [`GameMode::VsComputer`] the engine answers each accepted human
//! move after a fixed think delay. The pending reply is data, not a
//! thread: [`Game::submit_move`] stores a deadline, and the host calls
//! [`Game::poll`] (or [`Game::poll_at`] with its own clock) each tick
//! until the deadline passes and the reply fires against the live board.
//! While a reply is pending, human input is rejected with
//! [`InvalidMove::AwaitingComputer`].
//!
//! ## Cancellation
//!
//! `reset` and `select_mode` drop the pending reply and bump the game
//! epoch. A pending reply captures the epoch at scheduling time and fires
//! only if it still matches, so a fire driven by a timer armed before the
//! reset hits a dead epoch and changes nothing.

use std::time::Instant;

use tracing::{debug, instrument, trace};

use crate::core::{Board, GameRng, InvalidMove, Player};
use crate::search::{BlendedPolicy, MoveDecision, MovePolicy};

use super::config::GameConfig;
use super::state::{GameMode, GameState, Outcome};

/// A scheduled computer reply.
#[derive(Clone, Copy, Debug)]
struct PendingMove {
    /// Earliest instant the reply may fire.
    fire_at: Instant,
    /// Epoch captured at scheduling time; stale epochs never fire.
    epoch: u64,
}

/// The turn scheduler: owns the observable state and drives the game.
pub struct Game {
    state: GameState,
    config: GameConfig,
    rng: GameRng,
    policy: Box<dyn MovePolicy>,
    pending: Option<PendingMove>,
    /// Bumped by `reset` and `select_mode`; pending replies from older
    /// epochs are dead.
    epoch: u64,
    last_decision: Option<MoveDecision>,
}

impl Game {
    /// Create a game on the mode-select screen.
    ///
    /// The opponent is a [`BlendedPolicy`] built from the config; swap it
    /// with [`Game::with_policy`].
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let rng = GameRng::new(config.seed);
        let policy = Box::new(BlendedPolicy::new(config.random_move_chance));
        Self {
            state: GameState::new(),
            config,
            rng,
            policy,
            pending: None,
            epoch: 0,
            last_decision: None,
        }
    }

    /// Replace the opponent policy.
    #[must_use]
    pub fn with_policy(mut self, policy: impl MovePolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Observable snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The configuration this game was built with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.state.current_player
    }

    /// Selected mode, or `None` on the mode-select screen.
    #[must_use]
    pub fn mode(&self) -> Option<GameMode> {
        self.state.mode
    }

    /// Terminal status.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.state.outcome
    }

    /// Whether a computer reply is pending.
    #[must_use]
    pub fn awaiting_computer(&self) -> bool {
        self.state.awaiting_computer
    }

    /// The last computer decision, kept for display until the next reset.
    #[must_use]
    pub fn last_decision(&self) -> Option<&MoveDecision> {
        self.last_decision.as_ref()
    }

    /// Earliest instant the pending computer reply may fire.
    #[must_use]
    pub fn think_deadline(&self) -> Option<Instant> {
        self.pending.map(|pending| pending.fire_at)
    }

    /// Whether a human may move right now.
    #[must_use]
    pub fn is_human_turn(&self) -> bool {
        match self.state.mode {
            None => false,
            Some(GameMode::TwoPlayer) => !self.state.outcome.is_terminal(),
            Some(GameMode::VsComputer) => {
                !self.state.outcome.is_terminal()
                    && self.state.current_player == Player::X
                    && !self.state.awaiting_computer
            }
        }
    }

    /// Whether the engine owns the current turn (now or once the delay
    /// passes).
    #[must_use]
    pub fn is_computer_turn(&self) -> bool {
        self.state.mode == Some(GameMode::VsComputer)
            && !self.state.outcome.is_terminal()
            && self.state.current_player == Player::O
    }

    /// Select a mode and start a fresh game with X to move.
    ///
    /// Allowed from any state; a pending computer reply is cancelled.
    #[instrument(skip(self))]
    pub fn select_mode(&mut self, mode: GameMode) {
        self.cancel_pending();
        self.state = GameState::new();
        self.state.mode = Some(mode);
        self.last_decision = None;
        debug!(?mode, "new game");
    }

    /// Discard the game and return to the mode-select screen.
    ///
    /// Allowed from any state; a pending computer reply is cancelled.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cancel_pending();
        self.state = GameState::new();
        self.last_decision = None;
    }

    /// Submit a human move at `index`.
    ///
    /// Rejections leave the game untouched and are safe to drop.
    #[instrument(skip(self), fields(player = %self.state.current_player))]
    pub fn submit_move(&mut self, index: usize) -> Result<(), InvalidMove> {
        if self.state.mode.is_none() {
            return Err(InvalidMove::ModeNotSelected);
        }
        if self.state.outcome.is_terminal() {
            return Err(InvalidMove::GameOver);
        }
        if self.state.awaiting_computer || self.is_computer_turn() {
            return Err(InvalidMove::AwaitingComputer);
        }

        let player = self.state.current_player;
        self.state.board.apply_move(index, player)?;
        trace!(index, %player, "move accepted");
        self.finish_move();
        Ok(())
    }

    /// Fire the pending computer reply if its deadline has passed.
    ///
    /// Returns the applied decision, or `None` when nothing fired. Hosts
    /// call this every tick.
    pub fn poll(&mut self) -> Option<MoveDecision> {
        self.poll_at(Instant::now())
    }

    /// [`poll`](Self::poll) against a caller-supplied clock.
    pub fn poll_at(&mut self, now: Instant) -> Option<MoveDecision> {
        let pending = self.pending?;
        if pending.epoch != self.epoch {
            // Armed before a reset or mode change.
            self.pending = None;
            trace!("dropped stale computer reply");
            return None;
        }
        if now < pending.fire_at {
            return None;
        }

        self.pending = None;
        self.state.awaiting_computer = false;
        self.fire_computer_move()
    }

    /// Run the policy on the live board and apply its move as O.
    fn fire_computer_move(&mut self) -> Option<MoveDecision> {
        debug_assert!(self.is_computer_turn());

        let decision = self.policy.choose(&self.state.board, &mut self.rng)?;
        debug!(
            index = decision.index,
            kind = ?decision.kind,
            score = decision.score,
            nodes = decision.nodes,
            "computer reply"
        );

        if self
            .state
            .board
            .apply_move(decision.index, Player::O)
            .is_err()
        {
            // A policy picked an occupied or out-of-range cell; absorb it.
            return None;
        }
        self.last_decision = Some(decision);
        self.finish_move();
        Some(decision)
    }

    /// Shared post-move bookkeeping: outcome, turn swap, scheduling.
    fn finish_move(&mut self) {
        if let Some(winner) = self.state.board.winner() {
            self.state.outcome = Outcome::Won(winner);
            debug!(%winner, "game won");
            return;
        }
        if self.state.board.is_full() {
            self.state.outcome = Outcome::Draw;
            debug!("game drawn");
            return;
        }

        self.state.current_player = self.state.current_player.opponent();

        if self.is_computer_turn() {
            self.schedule_computer_move();
        }
    }

    fn schedule_computer_move(&mut self) {
        let fire_at = Instant::now() + self.config.think_delay;
        self.pending = Some(PendingMove {
            fire_at,
            epoch: self.epoch,
        });
        self.state.awaiting_computer = true;
        trace!(
            delay_ms = self.config.think_delay.as_millis() as u64,
            "computer reply scheduled"
        );
    }

    fn cancel_pending(&mut self) {
        self.epoch += 1;
        if self.pending.take().is_some() {
            debug!(epoch = self.epoch, "cancelled pending computer reply");
        }
    }
}
