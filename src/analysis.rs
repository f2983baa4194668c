//! Batch analysis driver.
//!
//! Fans a split batch out to one thread per game and funnels results
//! into a shared [`ReportSink`]. Each thread owns its board and runner
//! outright; the sink is the only resource crossed by more than one
//! thread.

use std::io::{self, Read};
use std::thread;

use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::parse::split_games;
use crate::report::{Report, ReportSink};
use crate::runner::GameRunner;

/// Totals for one analyzed batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BatchSummary {
    pub games: usize,
    pub valid: usize,
    pub invalid: usize,
}

/// Analyzes every game in `input`, one thread per game, and blocks
/// until all of them have reported through `sink`.
pub fn analyze_str(input: &str, sink: &dyn ReportSink) -> BatchSummary {
    let records = split_games(input);
    let games = records.len();
    debug!("analyzing batch of {games} game(s)");

    let mut valid = 0;
    thread::scope(|scope| {
        let handles: Vec<_> = records
            .into_iter()
            .map(|record| {
                thread::Builder::new()
                    .name(format!("game-{}", record.id))
                    .spawn_scoped(scope, move || {
                        let mut runner = GameRunner::new(record);
                        sink.submit(Report::Header(runner.header_summary()));
                        let outcome = runner.run();
                        let valid = outcome.valid;
                        sink.submit(Report::Verdict(outcome));
                        valid
                    })
                    .expect("failed to spawn game thread")
            })
            .collect();
        for handle in handles {
            if handle.join().unwrap_or(false) {
                valid += 1;
            }
        }
    });

    BatchSummary {
        games,
        valid,
        invalid: games - valid,
    }
}

/// Reads `reader` to the end, then analyzes it like [`analyze_str`].
pub fn analyze_reader<R: Read>(mut reader: R, sink: &dyn ReportSink) -> io::Result<BatchSummary> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    Ok(analyze_str(&input, sink))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ReportLog;
    use std::io::Cursor;

    const TWO_GAMES: &str = "\
[Event \"First\"]

1. e4 e5 2. Nf3 1-0

[Event \"Second\"]

1. e4 Ra5 *
";

    #[test]
    fn test_batch_totals() {
        let log = ReportLog::new();
        let summary = analyze_str(TWO_GAMES, &log);
        assert_eq!(
            summary,
            BatchSummary {
                games: 2,
                valid: 1,
                invalid: 1,
            }
        );
    }

    #[test]
    fn test_two_reports_per_game() {
        let log = ReportLog::new();
        analyze_str(TWO_GAMES, &log);
        assert_eq!(log.len(), 4);
    }

    #[test]
    fn test_header_precedes_verdict_within_each_game() {
        let log = ReportLog::new();
        analyze_str(TWO_GAMES, &log);
        let entries = log.entries();
        for id in [1, 2] {
            let header_pos = entries
                .iter()
                .position(|r| matches!(r, Report::Header(h) if h.id == id))
                .unwrap();
            let verdict_pos = entries
                .iter()
                .position(|r| matches!(r, Report::Verdict(o) if o.id == id))
                .unwrap();
            assert!(header_pos < verdict_pos);
        }
    }

    #[test]
    fn test_verdicts_keep_game_identity() {
        let log = ReportLog::new();
        analyze_str(TWO_GAMES, &log);
        for report in log.entries() {
            if let Report::Verdict(outcome) = report {
                match outcome.id {
                    1 => assert!(outcome.valid),
                    2 => assert!(!outcome.valid),
                    other => panic!("unexpected game id {other}"),
                }
            }
        }
    }

    #[test]
    fn test_empty_input_produces_no_reports() {
        let log = ReportLog::new();
        let summary = analyze_str("", &log);
        assert_eq!(summary, BatchSummary::default());
        assert!(log.is_empty());
    }

    #[test]
    fn test_analyze_reader_matches_analyze_str() {
        let from_str_log = ReportLog::new();
        let from_reader_log = ReportLog::new();
        let expected = analyze_str(TWO_GAMES, &from_str_log);
        let actual = analyze_reader(Cursor::new(TWO_GAMES), &from_reader_log).unwrap();
        assert_eq!(expected, actual);
        assert_eq!(from_str_log.len(), from_reader_log.len());
    }
}
