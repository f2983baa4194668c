//! Notation parsing layer.
//!
//! Turns a raw multi-game stream into [`GameRecord`]s: the splitter
//! cuts games apart, the header extractor reads tag pairs, and the
//! normalizer reduces movetext to bare move tokens.

mod headers;
mod normalize;
mod record;
mod split;

pub use headers::extract_headers;
pub use normalize::normalize_moves;
pub use record::{GameRecord, GameResult};
pub use split::split_games;
