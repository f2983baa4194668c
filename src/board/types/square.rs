//! Square type and move-shape predicates.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::MalformedSquare;

use super::piece::Side;

/// A square on the chess board, represented as (file, rank).
///
/// Both coordinates are 0-indexed: file 0 is the a-file, rank 0 is rank 1.
/// The derived ordering is lexicographic by file then rank (a1, a2, ...,
/// b1, ...), which is the order candidate squares are considered when a
/// move is ambiguous.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (file, rank)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(file: usize, rank: usize) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Square(file, rank))
        } else {
            None
        }
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.0
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.1
    }

    /// Signed (file, rank) offset from `self` to `to`.
    #[inline]
    #[must_use]
    pub(crate) const fn delta(self, to: Square) -> (isize, isize) {
        (
            to.0 as isize - self.0 as isize,
            to.1 as isize - self.1 as isize,
        )
    }

    /// True if `to` lies on the same file or rank, with a nonzero delta.
    #[must_use]
    pub(crate) fn rook_shape(self, to: Square) -> bool {
        let (df, dr) = self.delta(to);
        (df == 0) != (dr == 0)
    }

    /// True if `to` lies on a shared diagonal, with a nonzero delta.
    #[must_use]
    pub(crate) fn bishop_shape(self, to: Square) -> bool {
        let (df, dr) = self.delta(to);
        df != 0 && df.abs() == dr.abs()
    }

    /// True if `to` is reachable along a rank, file, or diagonal.
    #[must_use]
    pub(crate) fn queen_shape(self, to: Square) -> bool {
        self.rook_shape(to) || self.bishop_shape(to)
    }

    /// True if `to` is a knight jump away.
    #[must_use]
    pub(crate) fn knight_shape(self, to: Square) -> bool {
        let (df, dr) = self.delta(to);
        (df.abs() == 1 && dr.abs() == 2) || (df.abs() == 2 && dr.abs() == 1)
    }

    /// True if `to` is one king step away.
    #[must_use]
    pub(crate) fn king_shape(self, to: Square) -> bool {
        let (df, dr) = self.delta(to);
        df.abs() <= 1 && dr.abs() <= 1 && (df, dr) != (0, 0)
    }

    /// True if `to` is a forward pawn push for `side`: one rank ahead on
    /// the same file, or two ranks ahead from the side's starting rank.
    #[must_use]
    pub(crate) fn pawn_advance_shape(self, to: Square, side: Side) -> bool {
        let (df, dr) = self.delta(to);
        let dir = side.pawn_direction();
        df == 0 && (dr == dir || (dr == 2 * dir && self.rank() == side.pawn_start_rank()))
    }

    /// True if `to` is a diagonal pawn capture for `side`: one file over,
    /// one rank ahead.
    #[must_use]
    pub(crate) fn pawn_capture_shape(self, to: Square, side: Side) -> bool {
        let (df, dr) = self.delta(to);
        df.abs() == 1 && dr == side.pawn_direction()
    }

    /// Squares strictly between `self` and `to` along a shared rank,
    /// file, or diagonal. Empty when the squares are adjacent or not
    /// aligned.
    #[must_use]
    pub(crate) fn between(self, to: Square) -> Vec<Square> {
        if !self.queen_shape(to) {
            return Vec::new();
        }
        let (df, dr) = self.delta(to);
        let (step_f, step_r) = (df.signum(), dr.signum());
        (1..df.abs().max(dr.abs()))
            .map(|i| {
                Square(
                    (self.0 as isize + step_f * i) as usize,
                    (self.1 as isize + step_r * i) as usize,
                )
            })
            .collect()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.0 as u8 + b'a') as char, self.1 + 1)
    }
}

impl FromStr for Square {
    type Err = MalformedSquare;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(MalformedSquare {
                notation: s.to_string(),
            });
        }

        let file = match chars[0] {
            'a'..='h' => chars[0] as usize - 'a' as usize,
            _ => {
                return Err(MalformedSquare {
                    notation: s.to_string(),
                })
            }
        };

        let rank = match chars[1] {
            '1'..='8' => chars[1] as usize - '1' as usize,
            _ => {
                return Err(MalformedSquare {
                    notation: s.to_string(),
                })
            }
        };

        Ok(Square(file, rank))
    }
}
