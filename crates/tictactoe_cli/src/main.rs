//! Tic-tac-toe terminal driver.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use strum::IntoEnumIterator;
use tictactoe_engine::{
    EngineConfig, Game, GameMode, GameResult, GameSession, MoveSelector, Position, ScoreTally, Side,
    Snapshot, StrategyKind, record_result, selector_for,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Board output goes to stdout; logs go to stderr.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Command::Play { mode, config } => run_play(mode, &config).await,
        Command::Selfplay {
            games,
            x,
            o,
            config,
            json,
        } => run_selfplay(games, x, o, &config, json),
    }
}

/// Loads engine configuration, falling back to defaults when the file is absent.
fn load_config(path: &Path) -> Result<EngineConfig> {
    if path.exists() {
        EngineConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))
    } else {
        info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        Ok(EngineConfig::default())
    }
}

fn render(snapshot: &Snapshot) {
    println!();
    println!("{}", snapshot.board().display());
    if snapshot.result().is_terminal() {
        println!("{}  ({})", snapshot.result(), snapshot.tally());
        println!("Enter r to play again or q to quit.");
    } else if *snapshot.awaiting_computer() {
        println!("Computer is thinking...");
    } else {
        println!("{} to move", snapshot.to_move());
    }
}

/// Run an interactive game reading moves from stdin
#[instrument]
async fn run_play(mode: GameMode, config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    let mut session = GameSession::new(&config, mode);
    session.subscribe(render);

    let labels: Vec<&str> = Position::iter().map(|p| p.label()).collect();
    println!("Playing {}", session.mode());
    println!("Enter a cell 0-8 or one of: {}", labels.join(", "));
    println!("r resets the board, q quits.");
    render(&session.snapshot());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        if session.pending_computer_move().is_some() {
            session.run_pending_computer_move().await?;
            continue;
        }

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let input = line.trim();

        match input {
            "" => continue,
            "q" | "quit" => break,
            "r" | "reset" => session.reset_board(),
            _ => match Position::from_label_or_number(input) {
                Some(position) => {
                    if let Err(e) = session.handle_cell_click(position.to_index()) {
                        debug!(error = %e, "Click ignored");
                        println!("{}", e);
                    }
                }
                None => println!("Unknown cell '{}'", input),
            },
        }
    }

    println!("Final score: {}", session.current_tally());
    Ok(())
}

/// Play `games` computer-vs-computer games
#[instrument]
fn run_selfplay(
    games: u32,
    x: StrategyKind,
    o: StrategyKind,
    config_path: &Path,
    json: bool,
) -> Result<()> {
    let config = load_config(config_path)?;
    let seed = *config.seed();
    let mut x_selector = selector_for(x, *config.scoring(), seed);
    let mut o_selector = selector_for(o, *config.scoring(), seed.map(|s| s.wrapping_add(1)));

    let mut tally = ScoreTally::new();
    for game_number in 1..=games {
        let result = play_one(x_selector.as_mut(), o_selector.as_mut())?;
        debug!(game_number, %result, "Game finished");
        tally = record_result(tally, result);
    }

    info!(%tally, "Self-play complete");
    if json {
        println!("{}", serde_json::to_string_pretty(&tally)?);
    } else {
        println!("{} ({}) vs {} ({}): {}", Side::X, x, Side::O, o, tally);
    }
    Ok(())
}

fn play_one(
    x: &mut dyn MoveSelector,
    o: &mut dyn MoveSelector,
) -> Result<GameResult> {
    let mut game = Game::new();
    loop {
        let result = game.result();
        if result.is_terminal() {
            return Ok(result);
        }
        let selector: &mut dyn MoveSelector = match game.to_move() {
            Side::X => &mut *x,
            Side::O => &mut *o,
        };
        let index = selector
            .select_move(game.board(), game.to_move())
            .with_context(|| format!("{} found no move on {}", selector.name(), game.board()))?;
        if let Err(e) = game.make_move(index) {
            warn!(error = %e, selector = selector.name(), "Selector chose an illegal move");
            return Err(e.into());
        }
    }
}
