//! Chess rules layer.
//!
//! Everything needed to replay a game from algebraic notation: the
//! square and piece vocabulary, castling rights, the [`Board`] that
//! applies tokens, and a [`BoardBuilder`] for staging positions.

mod builder;
mod error;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{MalformedSquare, MoveError};
pub use state::Board;
pub use types::{CastlingRights, PieceKind, Side, Square};
