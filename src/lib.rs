pub mod analysis;
pub mod board;
pub mod parse;
pub mod report;
pub mod runner;

pub use analysis::{analyze_reader, analyze_str, BatchSummary};
pub use board::{Board, BoardBuilder, MoveError, PieceKind, Side, Square};
pub use parse::{GameRecord, GameResult};
pub use report::{Report, ReportLog, ReportSink};
