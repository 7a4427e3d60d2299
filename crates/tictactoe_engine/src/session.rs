//! Game session: the object a UI drives.
//!
//! A session owns one [`Game`], the [`ScoreTally`] for every game played in
//! it, the injected [`GameMode`] and the computer's [`MoveSelector`]. Human
//! input goes through [`GameSession::handle_cell_click`]; the computer's reply
//! is queued as a [`PendingMove`] and played after the configured delay by
//! [`GameSession::run_pending_computer_move`].
//!
//! The session takes `&mut self` for every mutation, so a single owner
//! serializes all moves.

use crate::action::MoveError;
use crate::config::EngineConfig;
use crate::engine::Game;
use crate::mode::GameMode;
use crate::strategy::{MoveSelector, StrategyError, selector_for};
use crate::tally::{ScoreTally, record_result};
use crate::types::{Board, GameResult, Side};
use derive_getters::Getters;
use derive_more::Display;
use serde::Serialize;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, error, info, instrument, warn};

/// Error returned by session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SessionError {
    /// The move was rejected by the engine.
    #[display("Invalid move: {}", _0)]
    Move(MoveError),

    /// The selector could not produce a move.
    #[display("Computer failed to move: {}", _0)]
    Strategy(StrategyError),

    /// A human tried to move while the computer is to play.
    #[display("Waiting for the computer to move")]
    ComputerToMove,
}

impl std::error::Error for SessionError {}

impl From<MoveError> for SessionError {
    fn from(err: MoveError) -> Self {
        SessionError::Move(err)
    }
}

impl From<StrategyError> for SessionError {
    fn from(err: StrategyError) -> Self {
        SessionError::Strategy(err)
    }
}

/// Everything a UI needs to render the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize)]
pub struct Snapshot {
    board: Board,
    to_move: Side,
    result: GameResult,
    tally: ScoreTally,
    mode: GameMode,
    awaiting_computer: bool,
}

impl Snapshot {
    /// True when clicks on `index` should be ignored.
    ///
    /// That is the case for marked or out-of-range cells and for every cell
    /// once the game is over.
    pub fn is_cell_disabled(&self, index: usize) -> bool {
        self.result.is_terminal() || !self.board.is_empty(index)
    }
}

/// A queued computer reply.
///
/// Tied to the board state it was scheduled for; any later move or reset
/// makes it stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingMove {
    generation: u64,
    due: Instant,
}

impl PendingMove {
    /// When the reply should be played.
    pub fn due(&self) -> Instant {
        self.due
    }
}

/// Callback invoked with a fresh snapshot after every state change.
pub type Observer = Box<dyn Fn(&Snapshot) + Send>;

/// A sequence of games sharing one score tally.
pub struct GameSession {
    game: Game,
    tally: ScoreTally,
    mode: GameMode,
    computer_side: Side,
    delay: Duration,
    selector: Box<dyn MoveSelector>,
    observers: Vec<Observer>,
    pending: Option<PendingMove>,
    generation: u64,
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("game", &self.game)
            .field("tally", &self.tally)
            .field("mode", &self.mode)
            .field("computer_side", &self.computer_side)
            .field("delay", &self.delay)
            .field("selector", &self.selector.name())
            .field("observers", &self.observers.len())
            .field("pending", &self.pending)
            .finish()
    }
}

impl GameSession {
    /// Creates a session from configuration.
    #[instrument(skip(config), fields(strategy = %config.strategy()))]
    pub fn new(config: &EngineConfig, mode: GameMode) -> Self {
        let selector = selector_for(*config.strategy(), *config.scoring(), *config.seed());
        Self::with_selector(mode, *config.computer_side(), config.computer_delay(), selector)
    }

    /// Creates a session with an explicit selector.
    #[instrument(skip(selector), fields(selector = selector.name()))]
    pub fn with_selector(
        mode: GameMode,
        computer_side: Side,
        delay: Duration,
        selector: Box<dyn MoveSelector>,
    ) -> Self {
        info!("Creating game session");
        let mut session = Self {
            game: Game::new(),
            tally: ScoreTally::new(),
            mode,
            computer_side,
            delay,
            selector,
            observers: Vec::new(),
            pending: None,
            generation: 0,
        };
        session.schedule_if_computer_turn();
        session
    }

    /// Registers an observer called after every move and reset.
    pub fn subscribe(&mut self, observer: impl Fn(&Snapshot) + Send + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Current render data.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: *self.game.board(),
            to_move: self.game.to_move(),
            result: self.game.result(),
            tally: self.tally,
            mode: self.mode,
            awaiting_computer: self.pending.is_some(),
        }
    }

    /// Current board.
    pub fn current_board(&self) -> &Board {
        self.game.board()
    }

    /// Side whose mark the next move places.
    pub fn current_side(&self) -> Side {
        self.game.to_move()
    }

    /// Result of the current board.
    pub fn current_result(&self) -> GameResult {
        self.game.result()
    }

    /// Scores across all games in this session.
    pub fn current_tally(&self) -> ScoreTally {
        self.tally
    }

    /// The injected game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// The current game, including its move history.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// See [`Snapshot::is_cell_disabled`].
    pub fn is_cell_disabled(&self, index: usize) -> bool {
        self.snapshot().is_cell_disabled(index)
    }

    /// The queued computer reply, if any.
    pub fn pending_computer_move(&self) -> Option<PendingMove> {
        self.pending
    }

    /// True when the game is live and the computer plays the side to move.
    pub fn is_computer_turn(&self) -> bool {
        self.mode.has_computer()
            && self.game.to_move() == self.computer_side
            && !self.game.result().is_terminal()
    }

    /// Applies a human click on `index`.
    ///
    /// # Errors
    ///
    /// - [`SessionError::ComputerToMove`] in single-player mode on the
    ///   computer's turn
    /// - [`SessionError::Move`] if the engine rejects the move
    ///
    /// Neither changes any state; UIs may ignore them.
    #[instrument(skip(self))]
    pub fn handle_cell_click(&mut self, index: usize) -> Result<GameResult, SessionError> {
        if self.is_computer_turn() {
            debug!("Click ignored while computer is to move");
            return Err(SessionError::ComputerToMove);
        }
        Ok(self.apply(index)?)
    }

    /// Waits for the queued computer reply and plays it.
    ///
    /// Returns the index played, or `None` if nothing was queued or the queued
    /// reply went stale while waiting.
    #[instrument(skip(self))]
    pub async fn run_pending_computer_move(&mut self) -> Result<Option<usize>, SessionError> {
        let Some(pending) = self.pending else {
            return Ok(None);
        };
        tokio::time::sleep_until(pending.due).await;
        self.fire(pending)
    }

    /// Plays a queued reply now if it is still current.
    ///
    /// A stale reply (the board moved on or was reset after scheduling) is
    /// dropped and `Ok(None)` returned.
    #[instrument(skip(self))]
    pub fn fire(&mut self, pending: PendingMove) -> Result<Option<usize>, SessionError> {
        if self.pending != Some(pending) || pending.generation != self.generation {
            warn!(
                scheduled = pending.generation,
                current = self.generation,
                "Dropping stale computer move"
            );
            return Ok(None);
        }
        self.pending = None;
        self.play_computer_move()
    }

    /// Lets the computer move immediately if it is its turn.
    ///
    /// Cancels any queued reply. Returns the index played, or `None` when it
    /// is not the computer's turn.
    ///
    /// # Errors
    ///
    /// [`SessionError::Strategy`] means the selector was asked to move on a
    /// full board, which only happens if turn bookkeeping is broken.
    #[instrument(skip(self))]
    pub fn play_computer_move(&mut self) -> Result<Option<usize>, SessionError> {
        self.pending = None;
        if !self.is_computer_turn() {
            debug!("Not the computer's turn");
            return Ok(None);
        }

        let side = self.game.to_move();
        let index = self
            .selector
            .select_move(self.game.board(), side)
            .map_err(|e| {
                error!(error = %e, board = %self.game.board(), %side, "Selector found no move");
                SessionError::Strategy(e)
            })?;

        self.apply(index)?;
        info!(index, %side, selector = self.selector.name(), "Computer moved");
        Ok(Some(index))
    }

    /// Drops any queued computer reply.
    pub fn cancel_pending(&mut self) {
        if self.pending.take().is_some() {
            debug!("Cancelled pending computer move");
        }
    }

    /// Starts a new board. The tally is kept.
    #[instrument(skip(self))]
    pub fn reset_board(&mut self) {
        self.game.reset();
        self.generation += 1;
        self.pending = None;
        info!(tally = %self.tally, "Board reset");
        self.schedule_if_computer_turn();
        self.notify();
    }

    fn apply(&mut self, index: usize) -> Result<GameResult, MoveError> {
        let before = self.game.result();
        let result = self.game.make_move(index)?;
        self.generation += 1;
        self.pending = None;

        if !before.is_terminal() && result.is_terminal() {
            self.tally = record_result(self.tally, result);
            info!(%result, tally = %self.tally, "Game over");
        }

        self.schedule_if_computer_turn();
        self.notify();
        Ok(result)
    }

    fn schedule_if_computer_turn(&mut self) {
        if self.is_computer_turn() {
            let pending = PendingMove {
                generation: self.generation,
                due: Instant::now() + self.delay,
            };
            debug!(delay_ms = self.delay.as_millis() as u64, "Scheduling computer move");
            self.pending = Some(pending);
        }
    }

    fn notify(&self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for observer in &self.observers {
            observer(&snapshot);
        }
    }
}
