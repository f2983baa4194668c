use std::collections::BTreeMap;
use std::env;
use std::fs::File;

use pgn_analyzer::analysis::analyze_reader;
use pgn_analyzer::report::{HeaderSummary, MoveOutcome, Report, ReportLog};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: pgn_analyzer <file.pgn> [file.pgn ...]");
        return;
    }

    for path in args.iter().skip(1) {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) => {
                eprintln!("{path}: {err}");
                continue;
            }
        };
        let log = ReportLog::new();
        let summary = match analyze_reader(file, &log) {
            Ok(summary) => summary,
            Err(err) => {
                eprintln!("{path}: {err}");
                continue;
            }
        };
        render_batch(&log.entries());
        println!(
            "{path}: {} game(s), {} valid, {} invalid",
            summary.games, summary.valid, summary.invalid
        );
    }
}

/// Prints each game's header block and verdict block in id order,
/// regardless of the order the game threads finished in.
fn render_batch(entries: &[Report]) {
    let mut games: BTreeMap<u32, (Option<&HeaderSummary>, Option<&MoveOutcome>)> = BTreeMap::new();
    for report in entries {
        let slot = games.entry(report.game_id()).or_default();
        match report {
            Report::Header(summary) => slot.0 = Some(summary),
            Report::Verdict(outcome) => slot.1 = Some(outcome),
        }
    }
    for (header, verdict) in games.values() {
        if let Some(summary) = header {
            render_header(summary);
        }
        if let Some(outcome) = verdict {
            render_verdict(outcome);
        }
    }
}

fn render_header(summary: &HeaderSummary) {
    println!("{{");
    println!(" Event: \"{}\",", summary.event);
    println!(" White: \"{}\",", summary.white);
    println!(" Black: \"{}\",", summary.black);
    println!(" Round: \"{}\",", summary.round);
    println!(" Result: \"{}\"", summary.result);
    println!("}}");
}

fn render_verdict(outcome: &MoveOutcome) {
    println!("{{");
    println!("  Id: \"{}\",", outcome.id);
    if let Some(failure) = &outcome.error {
        println!("  Valid: \"{}\",", outcome.valid);
        println!(
            "  Error: \"half-move {}: {} ({})\"",
            failure.ply, failure.token, failure.error
        );
    } else {
        println!("  Valid: \"{}\"", outcome.valid);
    }
    println!("}}");
}
