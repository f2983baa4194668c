//! Board state and move application.
//!
//! [`Board`] keeps per-side piece tables and replays standard algebraic
//! notation tokens one at a time. Application is shape-based: a move is
//! accepted when a piece of the right kind can reach the target square,
//! with sliding pieces additionally requiring a vacant path. Checks,
//! pins, and self-check are not modeled.

use std::collections::BTreeSet;

use super::error::MoveError;
use super::types::{CastlingRights, PieceKind, Side, Square};

/// Occupancy tables for one side, indexed by piece kind.
///
/// Each table is a `BTreeSet` so iteration yields squares in ascending
/// file-then-rank order. Candidate selection relies on that order to
/// stay deterministic when a token underspecifies the moving piece.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct PieceSet {
    tables: [BTreeSet<Square>; 6],
}

impl PieceSet {
    /// Tables holding the standard starting squares for `side`.
    fn starting(side: Side) -> Self {
        let mut set = PieceSet::default();
        let home = side.home_rank();
        for file in 0..8 {
            set.insert(PieceKind::Pawn, Square(file, side.pawn_start_rank()));
        }
        for file in [0, 7] {
            set.insert(PieceKind::Rook, Square(file, home));
        }
        for file in [1, 6] {
            set.insert(PieceKind::Knight, Square(file, home));
        }
        for file in [2, 5] {
            set.insert(PieceKind::Bishop, Square(file, home));
        }
        set.insert(PieceKind::Queen, Square(3, home));
        set.insert(PieceKind::King, Square(4, home));
        set
    }

    fn insert(&mut self, kind: PieceKind, square: Square) {
        self.tables[kind.index()].insert(square);
    }

    fn remove(&mut self, kind: PieceKind, square: Square) -> bool {
        self.tables[kind.index()].remove(&square)
    }

    /// Removes whatever piece sits on `square`, if any.
    fn remove_at(&mut self, square: Square) -> Option<PieceKind> {
        PieceKind::ALL
            .into_iter()
            .find(|kind| self.tables[kind.index()].remove(&square))
    }

    fn contains(&self, kind: PieceKind, square: Square) -> bool {
        self.tables[kind.index()].contains(&square)
    }

    fn kind_at(&self, square: Square) -> Option<PieceKind> {
        PieceKind::ALL
            .into_iter()
            .find(|kind| self.tables[kind.index()].contains(&square))
    }

    fn iter_kind(&self, kind: PieceKind) -> impl Iterator<Item = Square> + '_ {
        self.tables[kind.index()].iter().copied()
    }

    fn len(&self) -> usize {
        self.tables.iter().map(BTreeSet::len).sum()
    }
}

/// Chess position replayed from standard algebraic notation.
///
/// Tokens are applied with [`Board::apply`]. The board tracks castling
/// rights and the en passant window alongside piece placement, and
/// every occupied square holds at most one piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pieces: [PieceSet; 2],
    castling: CastlingRights,
    last_double_step: Option<Square>,
}

impl Board {
    /// Creates a board with the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Board {
            pieces: [
                PieceSet::starting(Side::White),
                PieceSet::starting(Side::Black),
            ],
            castling: CastlingRights::all(),
            last_double_step: None,
        }
    }

    /// Creates a board with no pieces, full castling rights, and no
    /// en passant window. Builders seed positions on top of this.
    pub(crate) fn empty() -> Self {
        Board {
            pieces: [PieceSet::default(), PieceSet::default()],
            castling: CastlingRights::all(),
            last_double_step: None,
        }
    }

    /// Applies one algebraic notation token for `side`.
    ///
    /// The token is classified by its surface form: `O-O` and `O-O-O`
    /// castle, a token containing `=` promotes, a token containing `x`
    /// captures, and anything else is a plain move. On failure the
    /// board is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use pgn_analyzer::board::{Board, Side};
    ///
    /// let mut board = Board::new();
    /// board.apply(Side::White, "e4").unwrap();
    /// board.apply(Side::Black, "e5").unwrap();
    /// assert!(board.apply(Side::White, "Ke3").is_err());
    /// ```
    pub fn apply(&mut self, side: Side, token: &str) -> Result<(), MoveError> {
        if token.is_empty() || !token.is_ascii() {
            return Err(MoveError::MalformedToken {
                token: token.to_string(),
            });
        }
        if token == "O-O" {
            return self.castle(side, true);
        }
        if token == "O-O-O" {
            return self.castle(side, false);
        }
        if let Some((body, promotion)) = token.split_once('=') {
            if let Some((head, tail)) = body.split_once('x') {
                return self.capture_and_promote(side, head, tail, promotion);
            }
            return self.promote(side, body, promotion);
        }
        if let Some((head, tail)) = token.split_once('x') {
            return self.capture(side, head, tail);
        }
        self.plain_move(side, token)
    }

    /// Returns the piece occupying `square`, if any.
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<(Side, PieceKind)> {
        for side in Side::BOTH {
            if let Some(kind) = self.side_tables(side).kind_at(square) {
                return Some((side, kind));
            }
        }
        None
    }

    /// Returns the number of pieces `side` has on the board.
    #[must_use]
    pub fn piece_count(&self, side: Side) -> usize {
        self.side_tables(side).len()
    }

    /// Returns the castling rights still available.
    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    /// Returns the landing square of the previous move if it was a
    /// pawn double step, i.e. the square an en passant capture may
    /// still take a pawn from on the very next move.
    #[inline]
    #[must_use]
    pub fn last_double_step(&self) -> Option<Square> {
        self.last_double_step
    }

    pub(crate) fn set_piece(&mut self, side: Side, kind: PieceKind, square: Square) {
        self.place(side, kind, square);
    }

    pub(crate) fn set_castling(&mut self, rights: CastlingRights) {
        self.castling = rights;
    }

    pub(crate) fn set_double_step(&mut self, target: Option<Square>) {
        self.last_double_step = target;
    }

    fn side_tables(&self, side: Side) -> &PieceSet {
        &self.pieces[side.index()]
    }

    fn side_tables_mut(&mut self, side: Side) -> &mut PieceSet {
        &mut self.pieces[side.index()]
    }

    fn occupied(&self, square: Square) -> bool {
        self.pieces.iter().any(|set| set.kind_at(square).is_some())
    }

    /// Puts a piece on `square`, displacing any previous occupant on
    /// either side so no square ever holds two pieces.
    fn place(&mut self, side: Side, kind: PieceKind, square: Square) {
        for set in &mut self.pieces {
            set.remove_at(square);
        }
        self.side_tables_mut(side).insert(kind, square);
    }

    /// Moves a piece and runs the shared bookkeeping: castling rights
    /// decay and the en passant window, which stays open only for the
    /// half-move directly after a pawn double step.
    fn relocate(&mut self, side: Side, kind: PieceKind, from: Square, to: Square) {
        self.side_tables_mut(side).remove(kind, from);
        self.place(side, kind, to);
        self.update_castling_rights(side, kind, from);
        if kind == PieceKind::Pawn && from.rank().abs_diff(to.rank()) == 2 {
            self.last_double_step = Some(to);
        } else {
            self.last_double_step = None;
        }
    }

    fn update_castling_rights(&mut self, side: Side, kind: PieceKind, from: Square) {
        match kind {
            PieceKind::King => self.castling.remove_all(side),
            PieceKind::Rook => {
                if from == Square(0, side.home_rank()) {
                    self.castling.remove(side, false);
                } else if from == Square(7, side.home_rank()) {
                    self.castling.remove(side, true);
                }
            }
            _ => {}
        }
    }

    /// Finds the origin square for a move, scanning candidates in
    /// ascending square order and keeping the first whose notation
    /// contains the disambiguation text.
    fn find_piece(
        &self,
        side: Side,
        kind: PieceKind,
        target: Square,
        disambig: &str,
        capturing: bool,
    ) -> Result<Square, MoveError> {
        self.side_tables(side)
            .iter_kind(kind)
            .filter(|&from| self.shape_matches(side, kind, from, target, capturing))
            .find(|from| disambig.is_empty() || from.to_string().contains(disambig))
            .ok_or(MoveError::NoPieceFound {
                piece: kind,
                square: target,
            })
    }

    fn shape_matches(
        &self,
        side: Side,
        kind: PieceKind,
        from: Square,
        to: Square,
        capturing: bool,
    ) -> bool {
        match kind {
            PieceKind::King => from.king_shape(to),
            PieceKind::Queen => from.queen_shape(to) && self.path_clear(from, to),
            PieceKind::Rook => from.rook_shape(to) && self.path_clear(from, to),
            PieceKind::Bishop => from.bishop_shape(to) && self.path_clear(from, to),
            PieceKind::Knight => from.knight_shape(to),
            PieceKind::Pawn => {
                if capturing {
                    from.pawn_capture_shape(to, side)
                } else {
                    from.pawn_advance_shape(to, side)
                }
            }
        }
    }

    fn path_clear(&self, from: Square, to: Square) -> bool {
        from.between(to).iter().all(|&square| !self.occupied(square))
    }

    fn plain_move(&mut self, side: Side, token: &str) -> Result<(), MoveError> {
        if token.len() < 2 {
            return Err(MoveError::MalformedToken {
                token: token.to_string(),
            });
        }
        let (head, tail) = token.split_at(token.len() - 2);
        let target: Square = tail.parse()?;
        let kind = head
            .chars()
            .next()
            .map_or(PieceKind::Pawn, PieceKind::from_san);
        let disambig = head.get(1..).unwrap_or("");
        let from = self.find_piece(side, kind, target, disambig, false)?;
        self.relocate(side, kind, from, target);
        Ok(())
    }

    fn capture(&mut self, side: Side, head: &str, tail: &str) -> Result<(), MoveError> {
        let target: Square = tail.parse()?;
        let kind = head
            .chars()
            .next()
            .map_or(PieceKind::Pawn, PieceKind::from_san);
        // Pawn captures lead with the origin file, piece captures with
        // the piece letter followed by any disambiguation.
        let disambig = match kind {
            PieceKind::Pawn => head.get(..1).unwrap_or(""),
            _ => head.get(1..).unwrap_or(""),
        };
        let from = self.find_piece(side, kind, target, disambig, true)?;

        if kind == PieceKind::Pawn {
            let passed = Square(target.file(), from.rank());
            if self.last_double_step == Some(passed)
                && self
                    .side_tables(side.opponent())
                    .contains(PieceKind::Pawn, passed)
            {
                self.side_tables_mut(side.opponent())
                    .remove(PieceKind::Pawn, passed);
                self.relocate(side, kind, from, target);
                return Ok(());
            }
        }

        self.side_tables_mut(side.opponent()).remove_at(target);
        self.relocate(side, kind, from, target);
        Ok(())
    }

    fn castle(&mut self, side: Side, kingside: bool) -> Result<(), MoveError> {
        if !self.castling.has(side, kingside) {
            return Err(MoveError::InvalidCastling { side, kingside });
        }
        let rank = side.home_rank();
        let path: &[usize] = if kingside { &[5, 6] } else { &[1, 2, 3] };
        if path.iter().any(|&file| self.occupied(Square(file, rank))) {
            return Err(MoveError::InvalidCastling { side, kingside });
        }
        let (king_to, rook_from, rook_to) = if kingside {
            (Square(6, rank), Square(7, rank), Square(5, rank))
        } else {
            (Square(2, rank), Square(0, rank), Square(3, rank))
        };
        self.relocate(side, PieceKind::King, Square(4, rank), king_to);
        self.relocate(side, PieceKind::Rook, rook_from, rook_to);
        Ok(())
    }

    fn promote(&mut self, side: Side, body: &str, promotion: &str) -> Result<(), MoveError> {
        let target: Square = body.parse()?;
        if target.rank() != side.promotion_rank() {
            return Err(MoveError::InvalidPromotion { square: target });
        }
        let kind = promotion
            .chars()
            .next()
            .and_then(PieceKind::promotion_from_san)
            .ok_or(MoveError::InvalidPromotion { square: target })?;
        let origin_rank = (target.rank() as isize - side.pawn_direction()) as usize;
        let origin = Square(target.file(), origin_rank);
        if !self.side_tables(side).contains(PieceKind::Pawn, origin) {
            return Err(MoveError::NoPieceFound {
                piece: PieceKind::Pawn,
                square: origin,
            });
        }
        self.side_tables_mut(side).remove(PieceKind::Pawn, origin);
        self.place(side, kind, target);
        self.last_double_step = None;
        Ok(())
    }

    fn capture_and_promote(
        &mut self,
        side: Side,
        head: &str,
        tail: &str,
        promotion: &str,
    ) -> Result<(), MoveError> {
        let target: Square = tail.parse()?;
        // Validate the promotion letter before touching the board so a
        // bad token cannot leave a half-applied capture behind.
        let kind = promotion
            .chars()
            .next()
            .and_then(PieceKind::promotion_from_san)
            .ok_or(MoveError::InvalidPromotion { square: target })?;
        self.capture(side, head, tail)?;
        self.side_tables_mut(side).remove_at(target);
        self.side_tables_mut(side).insert(kind, target);
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

#[cfg(test)]
impl Board {
    /// Checks that no square is claimed by two tables.
    pub(crate) fn consistent(&self) -> bool {
        let mut seen = BTreeSet::new();
        for side in Side::BOTH {
            for kind in PieceKind::ALL {
                for square in self.side_tables(side).iter_kind(kind) {
                    if !seen.insert(square) {
                        return false;
                    }
                }
            }
        }
        true
    }
}
