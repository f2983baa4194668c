//! Per-game move replay.

use log::{debug, trace};

use crate::board::{Board, Side};
use crate::parse::{GameRecord, GameResult};
use crate::report::{HeaderSummary, MoveFailure, MoveOutcome};

/// Lifecycle of one game's replay. `Completed` is terminal; re-running
/// a completed runner returns the recorded verdict unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus {
    Pending,
    Running,
    Completed {
        valid: bool,
        error: Option<MoveFailure>,
    },
}

/// Replays one game's tokens against a board of its own.
///
/// Sides alternate starting with White. Replay stops at the first
/// illegal token, or early at a result-shaped token, which is treated
/// as the end of the game rather than a move.
#[derive(Debug)]
pub struct GameRunner {
    record: GameRecord,
    board: Board,
    status: GameStatus,
}

impl GameRunner {
    #[must_use]
    pub fn new(record: GameRecord) -> Self {
        GameRunner {
            record,
            board: Board::new(),
            status: GameStatus::Pending,
        }
    }

    /// Identity of the game under replay; available before the run so
    /// sinks can announce the game ahead of its verdict.
    #[must_use]
    pub fn header_summary(&self) -> HeaderSummary {
        HeaderSummary::from_record(&self.record)
    }

    #[must_use]
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Replays the game and returns its verdict.
    pub fn run(&mut self) -> MoveOutcome {
        if let GameStatus::Completed { valid, ref error } = self.status {
            return MoveOutcome {
                id: self.record.id,
                valid,
                error: error.clone(),
            };
        }
        self.status = GameStatus::Running;
        trace!(
            "game {}: replaying {} tokens",
            self.record.id,
            self.record.moves.len()
        );

        let mut side = Side::White;
        let mut failure = None;
        for (index, token) in self.record.moves.iter().enumerate() {
            if GameResult::from_pgn(token).is_some() {
                break;
            }
            if let Err(error) = self.board.apply(side, token) {
                let ply = index as u32 + 1;
                debug!(
                    "game {}: illegal move {token:?} at half-move {ply}: {error}",
                    self.record.id
                );
                failure = Some(MoveFailure {
                    ply,
                    token: token.clone(),
                    error,
                });
                break;
            }
            side = side.opponent();
        }

        let valid = failure.is_none();
        self.status = GameStatus::Completed {
            valid,
            error: failure.clone(),
        };
        MoveOutcome {
            id: self.record.id,
            valid,
            error: failure,
        }
    }
}
