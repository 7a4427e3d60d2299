//! Command-line interface for the tic-tac-toe engine.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_engine::{GameMode, StrategyKind};

/// Tic-tac-toe against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Terminal tic-tac-toe with random and minimax opponents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on the terminal
    Play {
        /// Game mode: one-player or two-player
        #[arg(short, long, default_value = "one-player")]
        mode: GameMode,

        /// Path to engine configuration
        #[arg(short, long, default_value = "tictactoe.toml")]
        config: PathBuf,
    },

    /// Let two strategies play each other and print the tally
    Selfplay {
        /// Number of games to play
        #[arg(short, long, default_value = "10")]
        games: u32,

        /// Strategy for X
        #[arg(long, default_value = "random")]
        x: StrategyKind,

        /// Strategy for O
        #[arg(long, default_value = "minimax")]
        o: StrategyKind,

        /// Path to engine configuration
        #[arg(short, long, default_value = "tictactoe.toml")]
        config: PathBuf,

        /// Print the tally as JSON
        #[arg(long)]
        json: bool,
    },
}
