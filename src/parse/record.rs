//! Game records produced by the splitter.

use std::collections::HashMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Final result token of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameResult {
    WhiteWins,
    BlackWins,
    Draw,
    Unfinished,
}

impl GameResult {
    /// Parses a result token as it appears at the end of movetext.
    #[must_use]
    pub fn from_pgn(token: &str) -> Option<GameResult> {
        match token {
            "1-0" => Some(GameResult::WhiteWins),
            "0-1" => Some(GameResult::BlackWins),
            "1/2-1/2" => Some(GameResult::Draw),
            "*" => Some(GameResult::Unfinished),
            _ => None,
        }
    }

    /// The notation this result is written as.
    #[must_use]
    pub fn as_pgn(self) -> &'static str {
        match self {
            GameResult::WhiteWins => "1-0",
            GameResult::BlackWins => "0-1",
            GameResult::Draw => "1/2-1/2",
            GameResult::Unfinished => "*",
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_pgn())
    }
}

/// One game cut out of a multi-game input stream.
///
/// Records are immutable once produced; each one is handed to exactly
/// one runner.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameRecord {
    /// 1-based position of the game within its batch
    pub id: u32,
    /// Tag pairs from the header section
    pub headers: HashMap<String, String>,
    /// Normalized move tokens in play order
    pub moves: Vec<String>,
    /// Trailing result token, when present
    pub result: Option<GameResult>,
}

impl GameRecord {
    /// Header lookup with the customary `"Unknown"` fallback.
    #[must_use]
    pub fn header_or_unknown(&self, key: &str) -> String {
        self.headers
            .get(key)
            .cloned()
            .unwrap_or_else(|| "Unknown".to_string())
    }
}
