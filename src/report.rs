//! Report data shapes and the sink boundary.
//!
//! Game threads publish two messages per game through a shared
//! [`ReportSink`]: a [`HeaderSummary`] identifying the game, then the
//! [`MoveOutcome`] verdict. The built-in [`ReportLog`] collects them
//! behind a mutex for presentation layers and tests.

use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::MoveError;
use crate::parse::GameRecord;

/// Identity fields of one game, with `"Unknown"` substituted for any
/// header the input did not carry.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HeaderSummary {
    pub id: u32,
    pub event: String,
    pub white: String,
    pub black: String,
    pub round: String,
    pub result: String,
}

impl HeaderSummary {
    /// Builds the summary straight from a record's header mapping.
    #[must_use]
    pub fn from_record(record: &GameRecord) -> Self {
        HeaderSummary {
            id: record.id,
            event: record.header_or_unknown("Event"),
            white: record.header_or_unknown("White"),
            black: record.header_or_unknown("Black"),
            round: record.header_or_unknown("Round"),
            result: record.header_or_unknown("Result"),
        }
    }
}

/// The first illegal half-move of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveFailure {
    /// 1-based half-move number of the rejected token
    pub ply: u32,
    /// The offending token as written
    pub token: String,
    pub error: MoveError,
}

/// Verdict for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveOutcome {
    pub id: u32,
    pub valid: bool,
    /// Present exactly when `valid` is false
    pub error: Option<MoveFailure>,
}

/// One message submitted to a sink.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Report {
    Header(HeaderSummary),
    Verdict(MoveOutcome),
}

impl Report {
    /// The id of the game this report belongs to.
    #[must_use]
    pub fn game_id(&self) -> u32 {
        match self {
            Report::Header(summary) => summary.id,
            Report::Verdict(outcome) => outcome.id,
        }
    }
}

/// Receiver for per-game reports.
///
/// One sink is shared by every game thread in a batch, so
/// implementations serialize their own interior mutability. Within one
/// game the header always arrives before the verdict; ordering across
/// games is unspecified.
pub trait ReportSink: Send + Sync {
    fn submit(&self, report: Report);
}

/// Built-in sink collecting reports in arrival order.
#[derive(Debug, Default)]
pub struct ReportLog {
    entries: Mutex<Vec<Report>>,
}

impl ReportLog {
    #[must_use]
    pub fn new() -> Self {
        ReportLog::default()
    }

    /// Snapshot of everything submitted so far.
    #[must_use]
    pub fn entries(&self) -> Vec<Report> {
        self.entries.lock().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl ReportSink for ReportLog {
    fn submit(&self, report: Report) {
        self.entries.lock().push(report);
    }
}
