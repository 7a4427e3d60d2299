//! Game mode selection.

use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Who plays the second side: another human or the computer.
///
/// Supplied by the UI and never changed by the engine.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum GameMode {
    /// No mode chosen yet.
    #[default]
    #[strum(serialize = "unselected")]
    Unselected,
    /// One human against the computer.
    #[strum(
        serialize = "One Player",
        serialize = "onePlayer",
        serialize = "one-player",
        serialize = "single"
    )]
    SinglePlayer,
    /// Two humans sharing the board.
    #[strum(
        serialize = "Two Player",
        serialize = "twoPlayer",
        serialize = "two-player",
        serialize = "two"
    )]
    TwoPlayer,
}

impl GameMode {
    /// Returns display name.
    pub fn name(&self) -> &'static str {
        match self {
            GameMode::Unselected => "Unselected",
            GameMode::SinglePlayer => "One Player",
            GameMode::TwoPlayer => "Two Player",
        }
    }

    /// Maps the UI's stored selection to a mode.
    ///
    /// `None` and unknown strings both yield [`GameMode::Unselected`].
    #[instrument]
    pub fn from_selection(selection: Option<&str>) -> Self {
        match selection {
            None => GameMode::Unselected,
            Some(s) => s.trim().parse().unwrap_or_else(|_| {
                warn!(selection = s, "Unknown game mode, treating as unselected");
                GameMode::Unselected
            }),
        }
    }

    /// True when the computer plays one side.
    pub fn has_computer(&self) -> bool {
        matches!(self, GameMode::SinglePlayer)
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
