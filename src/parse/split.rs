//! Splitting a multi-game stream into game records.

use log::debug;

use super::headers::extract_headers;
use super::normalize::normalize_moves;
use super::record::GameRecord;

/// Cuts a raw stream into one record per game.
///
/// Lines are classified as header (containing `[`), movetext, or
/// blank. A blank line or the end of input closes pending movetext and
/// emits a game; header blocks separated from their movetext by blank
/// lines are merged forward. Splitting never fails: headers left
/// dangling at the end of input are dropped.
#[must_use]
pub fn split_games(input: &str) -> Vec<GameRecord> {
    let mut games = Vec::new();
    let mut header_block = String::new();
    let mut movetext = String::new();

    for line in input.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            emit(&mut games, &mut header_block, &mut movetext);
        } else if trimmed.contains('[') {
            header_block.push_str(trimmed);
            header_block.push('\n');
        } else {
            movetext.push_str(trimmed);
            movetext.push('\n');
        }
    }
    emit(&mut games, &mut header_block, &mut movetext);

    if !header_block.is_empty() {
        debug!("dropping header block without movetext at end of input");
    }
    games
}

/// Closes the current game if any movetext has accumulated. A blank
/// line directly after headers keeps the header block pending instead.
fn emit(games: &mut Vec<GameRecord>, header_block: &mut String, movetext: &mut String) {
    if movetext.is_empty() {
        return;
    }
    let headers = extract_headers(header_block);
    let (moves, result) = normalize_moves(movetext);
    header_block.clear();
    movetext.clear();
    let id = games.len() as u32 + 1;
    debug!("game {id}: {} move tokens", moves.len());
    games.push(GameRecord {
        id,
        headers,
        moves,
        result,
    });
}
