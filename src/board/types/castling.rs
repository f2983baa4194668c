//! Castling rights type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Side;

pub(crate) const CASTLE_WHITE_K: u8 = 1 << 0;
pub(crate) const CASTLE_WHITE_Q: u8 = 1 << 1;
pub(crate) const CASTLE_BLACK_K: u8 = 1 << 2;
pub(crate) const CASTLE_BLACK_Q: u8 = 1 << 3;

/// All castling rights combined
pub(crate) const ALL_CASTLING_RIGHTS: u8 =
    CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// Castling rights represented as a bitmask.
///
/// Rights only ever decrease during a game: a king move clears both of
/// its side's bits, a rook move off its home corner clears that corner's
/// bit, and castling clears both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, side: Side, kingside: bool) -> bool {
        let bit = Self::bit_for(side, kingside);
        self.0 & bit != 0
    }

    /// Set a specific castling right
    #[inline]
    pub fn set(&mut self, side: Side, kingside: bool) {
        self.0 |= Self::bit_for(side, kingside);
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, side: Side, kingside: bool) {
        self.0 &= !Self::bit_for(side, kingside);
    }

    /// Remove both castling rights for one side
    #[inline]
    pub fn remove_all(&mut self, side: Side) {
        self.remove(side, true);
        self.remove(side, false);
    }

    /// Get the bit for a specific castling right
    #[inline]
    const fn bit_for(side: Side, kingside: bool) -> u8 {
        match (side, kingside) {
            (Side::White, true) => CASTLE_WHITE_K,
            (Side::White, false) => CASTLE_WHITE_Q,
            (Side::Black, true) => CASTLE_BLACK_K,
            (Side::Black, false) => CASTLE_BLACK_Q,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_and_none() {
        let all = CastlingRights::all();
        for side in Side::BOTH {
            assert!(all.has(side, true));
            assert!(all.has(side, false));
        }

        let none = CastlingRights::none();
        for side in Side::BOTH {
            assert!(!none.has(side, true));
            assert!(!none.has(side, false));
        }
    }

    #[test]
    fn test_remove_is_independent() {
        let mut rights = CastlingRights::all();
        rights.remove(Side::White, true);
        assert!(!rights.has(Side::White, true));
        assert!(rights.has(Side::White, false));
        assert!(rights.has(Side::Black, true));
        assert!(rights.has(Side::Black, false));
    }

    #[test]
    fn test_remove_all_clears_one_side() {
        let mut rights = CastlingRights::all();
        rights.remove_all(Side::Black);
        assert!(rights.has(Side::White, true));
        assert!(rights.has(Side::White, false));
        assert!(!rights.has(Side::Black, true));
        assert!(!rights.has(Side::Black, false));
    }
}
