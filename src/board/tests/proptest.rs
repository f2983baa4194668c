//! Property-based tests using proptest.

use crate::board::{Board, Side, Square};
use proptest::prelude::*;

/// Strategy to generate an on-board square
fn square_strategy() -> impl Strategy<Value = Square> {
    (0..8usize, 0..8usize).prop_map(|(file, rank)| Square(file, rank))
}

/// Strategy to generate plausible algebraic move tokens
fn token_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[KQRBN]?[a-h][1-8]",
        "[KQRBNa-h]x[a-h][1-8]",
        "[a-h][18]=[QRBN]",
        "[a-h]x[a-h][18]=[QRBN]",
        Just("O-O".to_string()),
        Just("O-O-O".to_string()),
    ]
}

proptest! {
    /// Property: square notation round-trips through parsing
    #[test]
    fn prop_square_notation_roundtrip(square in square_strategy()) {
        let notation = square.to_string();
        prop_assert_eq!(notation.parse::<Square>().unwrap(), square);
    }

    /// Property: applying arbitrary text never panics
    #[test]
    fn prop_apply_never_panics(token in ".*") {
        let mut board = Board::new();
        let _ = board.apply(Side::White, &token);
    }

    /// Property: any token stream leaves the board consistent, with at
    /// most the starting sixteen pieces per side
    #[test]
    fn prop_token_stream_keeps_board_consistent(
        tokens in prop::collection::vec(token_strategy(), 0..40)
    ) {
        let mut board = Board::new();
        let mut side = Side::White;
        for token in &tokens {
            let _ = board.apply(side, token);
            side = side.opponent();
            prop_assert!(board.consistent());
            prop_assert!(board.piece_count(Side::White) <= 16);
            prop_assert!(board.piece_count(Side::Black) <= 16);
        }
    }

    /// Property: a rejected token leaves the board exactly as it was
    #[test]
    fn prop_failed_apply_is_a_no_op(
        tokens in prop::collection::vec(token_strategy(), 0..20),
        junk in "[A-Za-z0-9=x-]{0,6}"
    ) {
        let mut board = Board::new();
        let mut side = Side::White;
        for token in &tokens {
            let _ = board.apply(side, token);
            side = side.opponent();
        }
        let before = board.clone();
        if board.apply(side, &junk).is_err() {
            prop_assert_eq!(board, before);
        }
    }
}
