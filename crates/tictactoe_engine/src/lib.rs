//! Tic-tac-toe game-state engine.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Cell`], [`Side`], [`GameResult`]
//! - **Rules**: [`evaluate`] classifies a board as won, tied or in progress
//! - **Engine**: [`apply_move`] is the pure move step; [`Game`] tracks turn
//!   order and history on top of it
//! - **Strategies**: [`MoveSelector`] implementations for the computer side,
//!   [`RandomStrategy`] and [`MinimaxStrategy`]
//! - **Session**: [`GameSession`] ties a game, a [`ScoreTally`], a
//!   [`GameMode`] and a selector together for a UI
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{EngineConfig, GameMode, GameResult, GameSession, Side, StrategyKind};
//!
//! let config = EngineConfig::new(StrategyKind::Minimax).with_computer_delay_ms(0);
//! let mut session = GameSession::new(&config, GameMode::SinglePlayer);
//!
//! session.handle_cell_click(0).unwrap();
//! assert_eq!(session.play_computer_move().unwrap(), Some(4));
//! assert_eq!(session.current_side(), Side::X);
//! assert_eq!(session.current_result(), GameResult::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod engine;
pub mod invariants;
mod mode;
mod position;
pub mod rules;
mod session;
mod strategy;
mod tally;
mod types;

// Crate-level exports - Core types
pub use types::{Board, CELL_COUNT, Cell, GameResult, ParseBoardError, Side};

// Crate-level exports - Moves
pub use action::{Move, MoveError};
pub use position::Position;

// Crate-level exports - Engine
pub use engine::{Game, apply_move, reset_board};
pub use rules::evaluate;
pub use tally::{ScoreTally, record_result};

// Crate-level exports - Strategies
pub use strategy::{
    MinimaxStrategy, MoveSelector, RandomStrategy, Scoring, StrategyError, StrategyKind,
    selector_for,
};

// Crate-level exports - Session
pub use config::{ConfigError, EngineConfig};
pub use mode::GameMode;
pub use session::{GameSession, Observer, PendingMove, SessionError, Snapshot};
