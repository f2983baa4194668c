//! Core board types.
//!
//! This module contains the fundamental types used throughout the rules
//! engine:
//! - `PieceKind` and `Side` - piece kinds and the two sides
//! - `Square` - (file, rank) square representation with shape predicates
//! - `CastlingRights` - castling state

mod castling;
mod piece;
mod square;

// Re-export all public types
pub use castling::CastlingRights;
pub use piece::{PieceKind, Side};
pub use square::Square;
