//! Promotion tests.

use crate::board::{BoardBuilder, MoveError, PieceKind, Side, Square};

fn sq(notation: &str) -> Square {
    notation.parse().expect("test square")
}

#[test]
fn test_promotion_replaces_pawn() {
    let mut board = BoardBuilder::new()
        .piece(Side::White, PieceKind::Pawn, sq("e7"))
        .build();
    board.apply(Side::White, "e8=Q").unwrap();
    assert_eq!(board.piece_at(sq("e8")), Some((Side::White, PieceKind::Queen)));
    assert_eq!(board.piece_at(sq("e7")), None);
    assert_eq!(board.piece_count(Side::White), 1);
}

#[test]
fn test_black_promotion_to_knight() {
    let mut board = BoardBuilder::new()
        .piece(Side::Black, PieceKind::Pawn, sq("a2"))
        .build();
    board.apply(Side::Black, "a1=N").unwrap();
    assert_eq!(board.piece_at(sq("a1")), Some((Side::Black, PieceKind::Knight)));
}

#[test]
fn test_promotion_to_king_rejected() {
    let mut board = BoardBuilder::new()
        .piece(Side::White, PieceKind::Pawn, sq("e7"))
        .build();
    assert_eq!(
        board.apply(Side::White, "e8=K"),
        Err(MoveError::InvalidPromotion { square: sq("e8") })
    );
    assert_eq!(board.piece_at(sq("e7")), Some((Side::White, PieceKind::Pawn)));
}

#[test]
fn test_promotion_lowercase_letter_rejected() {
    let mut board = BoardBuilder::new()
        .piece(Side::White, PieceKind::Pawn, sq("e7"))
        .build();
    assert_eq!(
        board.apply(Side::White, "e8=q"),
        Err(MoveError::InvalidPromotion { square: sq("e8") })
    );
}

#[test]
fn test_promotion_off_final_rank_rejected() {
    let mut board = BoardBuilder::new()
        .piece(Side::White, PieceKind::Pawn, sq("e6"))
        .build();
    assert_eq!(
        board.apply(Side::White, "e7=Q"),
        Err(MoveError::InvalidPromotion { square: sq("e7") })
    );
}

#[test]
fn test_promotion_requires_pawn_on_origin() {
    let mut board = BoardBuilder::new().build();
    assert_eq!(
        board.apply(Side::White, "e8=Q"),
        Err(MoveError::NoPieceFound {
            piece: PieceKind::Pawn,
            square: sq("e7"),
        })
    );
}

#[test]
fn test_capture_promotion_takes_and_promotes() {
    let mut board = BoardBuilder::new()
        .piece(Side::White, PieceKind::Pawn, sq("d7"))
        .piece(Side::Black, PieceKind::Rook, sq("e8"))
        .build();
    board.apply(Side::White, "dxe8=Q").unwrap();
    assert_eq!(board.piece_at(sq("e8")), Some((Side::White, PieceKind::Queen)));
    assert_eq!(board.piece_at(sq("d7")), None);
    assert_eq!(board.piece_count(Side::Black), 0);
    assert!(board.consistent());
}

#[test]
fn test_capture_promotion_bad_letter_is_atomic() {
    let mut board = BoardBuilder::new()
        .piece(Side::White, PieceKind::Pawn, sq("d7"))
        .piece(Side::Black, PieceKind::Rook, sq("e8"))
        .build();
    let before = board.clone();
    assert_eq!(
        board.apply(Side::White, "dxe8=P"),
        Err(MoveError::InvalidPromotion { square: sq("e8") })
    );
    assert_eq!(board, before);
}

#[test]
fn test_promotion_closes_en_passant_window() {
    let mut board = BoardBuilder::new()
        .piece(Side::White, PieceKind::Pawn, sq("e7"))
        .piece(Side::Black, PieceKind::Pawn, sq("a4"))
        .double_step(sq("a4"))
        .build();
    board.apply(Side::White, "e8=R").unwrap();
    assert_eq!(board.last_double_step(), None);
}
