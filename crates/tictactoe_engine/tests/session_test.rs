//! Session tests: tally bookkeeping and the delayed computer reply.

use std::time::Duration;
use tictactoe_engine::{
    EngineConfig, GameMode, GameResult, GameSession, MinimaxStrategy, RandomStrategy,
    ScoreTally, SessionError, Side, StrategyKind, record_result,
};
use tokio::time::Instant;

fn two_player() -> GameSession {
    GameSession::with_selector(
        GameMode::TwoPlayer,
        Side::O,
        Duration::ZERO,
        Box::new(MinimaxStrategy::default()),
    )
}

#[test]
fn test_x_win_increments_only_x_once() {
    let mut session = two_player();
    for index in [0, 4, 1, 5] {
        session.handle_cell_click(index).unwrap();
    }
    assert_eq!(session.current_tally(), ScoreTally::new());

    assert_eq!(session.handle_cell_click(2), Ok(GameResult::Win(Side::X)));
    let tally = session.current_tally();
    assert_eq!(*tally.x_wins(), 1);
    assert_eq!(*tally.o_wins(), 0);
    assert_eq!(*tally.ties(), 0);

    // Further clicks are rejected and do not count again.
    for index in [3, 6, 7, 8] {
        assert!(matches!(
            session.handle_cell_click(index),
            Err(SessionError::Move(_))
        ));
    }
    assert_eq!(session.current_tally(), tally);
}

#[test]
fn test_tally_survives_reset() {
    let mut session = two_player();
    for index in [0, 2, 1, 3, 5, 4, 6, 7, 8] {
        session.handle_cell_click(index).unwrap();
    }
    assert_eq!(session.current_result(), GameResult::Tie);

    session.reset_board();
    assert_eq!(session.current_result(), GameResult::InProgress);
    assert_eq!(session.current_side(), Side::X);
    assert_eq!(*session.current_tally().ties(), 1);

    for index in [3, 0, 4, 1, 8, 2] {
        session.handle_cell_click(index).unwrap();
    }
    let expected = record_result(
        record_result(ScoreTally::new(), GameResult::Tie),
        GameResult::Win(Side::O),
    );
    assert_eq!(session.current_tally(), expected);
}

#[test]
fn test_unselected_mode_plays_like_two_player() {
    let mut session = GameSession::new(&EngineConfig::default(), GameMode::Unselected);
    session.handle_cell_click(4).unwrap();
    assert!(!session.is_computer_turn());
    assert_eq!(session.pending_computer_move(), None);
    session.handle_cell_click(0).unwrap();
    assert_eq!(session.current_board().filled(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_computer_replies_after_delay() {
    let config = EngineConfig::new(StrategyKind::Minimax);
    let mut session = GameSession::new(&config, GameMode::SinglePlayer);

    let start = Instant::now();
    session.handle_cell_click(0).unwrap();
    let pending = session.pending_computer_move().unwrap();
    assert_eq!(pending.due() - start, Duration::from_millis(500));

    let played = session.run_pending_computer_move().await.unwrap();
    assert_eq!(played, Some(4));
    assert!(start.elapsed() >= Duration::from_millis(500));
    assert_eq!(session.current_side(), Side::X);
    assert_eq!(session.pending_computer_move(), None);
}

#[tokio::test(start_paused = true)]
async fn test_nothing_pending_returns_immediately() {
    let mut session = two_player();
    let start = Instant::now();
    assert_eq!(session.run_pending_computer_move().await, Ok(None));
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn test_reset_during_delay_cancels_reply() {
    let config = EngineConfig::new(StrategyKind::Minimax);
    let mut session = GameSession::new(&config, GameMode::SinglePlayer);

    session.handle_cell_click(0).unwrap();
    let stale = session.pending_computer_move().unwrap();

    tokio::time::sleep(Duration::from_millis(200)).await;
    session.reset_board();
    tokio::time::sleep(Duration::from_millis(400)).await;

    assert_eq!(session.fire(stale), Ok(None));
    assert_eq!(session.current_board().filled(), 0);
    assert_eq!(session.run_pending_computer_move().await, Ok(None));
}

#[tokio::test(start_paused = true)]
async fn test_computer_as_x_opens_after_each_reset() {
    let config = EngineConfig::new(StrategyKind::Random)
        .with_computer_side(Side::X)
        .with_seed(7);
    let mut session = GameSession::new(&config, GameMode::SinglePlayer);

    assert_eq!(
        session.handle_cell_click(4),
        Err(SessionError::ComputerToMove)
    );
    let first = session.run_pending_computer_move().await.unwrap();
    assert!(first.is_some());
    assert_eq!(session.current_side(), Side::O);

    session.reset_board();
    assert!(session.pending_computer_move().is_some());
    session.run_pending_computer_move().await.unwrap();
    assert_eq!(session.current_board().count(Side::X), 1);
}

#[tokio::test(start_paused = true)]
async fn test_random_opponent_game_reaches_terminal() {
    let mut session = GameSession::with_selector(
        GameMode::SinglePlayer,
        Side::O,
        Duration::from_millis(500),
        Box::new(RandomStrategy::seeded(11)),
    );

    while !session.current_result().is_terminal() {
        if session.pending_computer_move().is_some() {
            session.run_pending_computer_move().await.unwrap();
            continue;
        }
        let index = session.current_board().empty_cells().next().unwrap();
        session.handle_cell_click(index).unwrap();
    }

    assert_eq!(session.current_tally().games(), 1);
    assert_eq!(session.pending_computer_move(), None);
}

#[test]
fn test_stored_one_player_selection_gets_computer_opponent() {
    let mode = GameMode::from_selection(Some("onePlayer"));
    assert_eq!(mode, GameMode::SinglePlayer);

    let config = EngineConfig::new(StrategyKind::Minimax).with_computer_delay_ms(0);
    let mut session = GameSession::new(&config, mode);
    session.handle_cell_click(0).unwrap();
    assert!(session.pending_computer_move().is_some());

    let mode = GameMode::from_selection(Some("twoPlayer"));
    let mut session = GameSession::new(&config, mode);
    session.handle_cell_click(0).unwrap();
    assert_eq!(session.pending_computer_move(), None);
}
