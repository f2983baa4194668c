//! Incremental construction of arbitrary positions.
//!
//! Most callers replay games from [`Board::new`]; the builder exists so
//! tests can stage midgame positions directly instead of playing out a
//! preamble of moves.
//!
//! ```
//! use pgn_analyzer::board::{BoardBuilder, PieceKind, Side, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Side::White, PieceKind::King, Square(4, 0))
//!     .piece(Side::White, PieceKind::Rook, Square(7, 0))
//!     .build();
//! assert_eq!(board.piece_count(Side::White), 2);
//! ```

use super::state::Board;
use super::types::{CastlingRights, PieceKind, Side, Square};

/// Builder for [`Board`] positions.
///
/// Starts from an empty board with full castling rights and no en
/// passant window; both can be overridden before [`build`].
///
/// [`build`]: BoardBuilder::build
#[derive(Debug, Clone)]
pub struct BoardBuilder {
    board: Board,
}

impl BoardBuilder {
    /// Creates a builder over an empty board.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            board: Board::empty(),
        }
    }

    /// Creates a builder seeded with the standard starting position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            board: Board::new(),
        }
    }

    /// Places a piece. A later placement on the same square displaces
    /// the earlier one.
    #[must_use]
    pub fn piece(mut self, side: Side, kind: PieceKind, square: Square) -> Self {
        self.board.set_piece(side, kind, square);
        self
    }

    /// Overrides the castling rights.
    #[must_use]
    pub fn castling(mut self, rights: CastlingRights) -> Self {
        self.board.set_castling(rights);
        self
    }

    /// Opens the en passant window as if a pawn had just double-stepped
    /// onto `target`.
    #[must_use]
    pub fn double_step(mut self, target: Square) -> Self {
        self.board.set_double_step(Some(target));
        self
    }

    /// Finishes construction.
    #[must_use]
    pub fn build(self) -> Board {
        self.board
    }
}

impl Default for BoardBuilder {
    fn default() -> Self {
        BoardBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_builder_has_no_pieces() {
        let board = BoardBuilder::new().build();
        assert_eq!(board.piece_count(Side::White), 0);
        assert_eq!(board.piece_count(Side::Black), 0);
        assert_eq!(board.castling_rights(), CastlingRights::all());
        assert_eq!(board.last_double_step(), None);
    }

    #[test]
    fn test_starting_position_matches_new() {
        assert_eq!(BoardBuilder::starting_position().build(), Board::new());
    }

    #[test]
    fn test_piece_placement() {
        let board = BoardBuilder::new()
            .piece(Side::Black, PieceKind::Queen, Square(3, 4))
            .build();
        assert_eq!(
            board.piece_at(Square(3, 4)),
            Some((Side::Black, PieceKind::Queen))
        );
    }

    #[test]
    fn test_later_placement_displaces_earlier() {
        let board = BoardBuilder::new()
            .piece(Side::White, PieceKind::Rook, Square(0, 0))
            .piece(Side::Black, PieceKind::Knight, Square(0, 0))
            .build();
        assert_eq!(
            board.piece_at(Square(0, 0)),
            Some((Side::Black, PieceKind::Knight))
        );
        assert_eq!(board.piece_count(Side::White), 0);
    }

    #[test]
    fn test_castling_override() {
        let board = BoardBuilder::new().castling(CastlingRights::none()).build();
        assert!(!board.castling_rights().has(Side::White, true));
        assert!(!board.castling_rights().has(Side::Black, false));
    }

    #[test]
    fn test_double_step_window() {
        let board = BoardBuilder::new()
            .piece(Side::Black, PieceKind::Pawn, Square(4, 4))
            .double_step(Square(4, 4))
            .build();
        assert_eq!(board.last_double_step(), Some(Square(4, 4)));
    }
}
