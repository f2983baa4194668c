//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `moves.rs` - Plain moves, captures, and candidate disambiguation
//! - `castling.rs` - Castling rights and both castle moves
//! - `promotion.rs` - Promotions, with and without capture
//! - `en_passant.rs` - The en passant window and capture
//! - `proptest.rs` - Property-based tests

mod promotion;
mod proptest;
