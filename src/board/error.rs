//! Error types for move application.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::{PieceKind, Side, Square};

/// Error type for algebraic square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MalformedSquare {
    /// The text that failed to parse
    pub notation: String,
}

impl fmt::Display for MalformedSquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Malformed square notation '{}'", self.notation)
    }
}

impl std::error::Error for MalformedSquare {}

/// Error type for move application failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveError {
    /// A square inside a move token could not be parsed
    MalformedSquare { notation: String },
    /// The move token fits no recognized form
    MalformedToken { token: String },
    /// No piece of the moving side satisfies the move
    NoPieceFound { piece: PieceKind, square: Square },
    /// Castling right lost or path blocked
    InvalidCastling { side: Side, kingside: bool },
    /// Promotion off the final rank, or to an invalid piece
    InvalidPromotion { square: Square },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::MalformedSquare { notation } => {
                write!(f, "Malformed square notation '{notation}'")
            }
            MoveError::MalformedToken { token } => {
                write!(f, "Malformed move token '{token}'")
            }
            MoveError::NoPieceFound { piece, square } => {
                write!(f, "No {piece} found for square {square}")
            }
            MoveError::InvalidCastling { side, kingside } => {
                let flank = if *kingside { "kingside" } else { "queenside" };
                write!(f, "{side} cannot castle {flank}")
            }
            MoveError::InvalidPromotion { square } => {
                write!(f, "Invalid promotion at {square}")
            }
        }
    }
}

impl std::error::Error for MoveError {}

impl From<MalformedSquare> for MoveError {
    fn from(err: MalformedSquare) -> Self {
        MoveError::MalformedSquare {
            notation: err.notation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_square_display() {
        let err = MalformedSquare {
            notation: "z9".to_string(),
        };
        assert!(err.to_string().contains("z9"));
    }

    #[test]
    fn test_malformed_token_display() {
        let err = MoveError::MalformedToken {
            token: "??".to_string(),
        };
        assert!(err.to_string().contains("??"));
    }

    #[test]
    fn test_no_piece_found_display() {
        let err = MoveError::NoPieceFound {
            piece: PieceKind::Queen,
            square: Square(3, 4),
        };
        assert!(err.to_string().contains("Queen"));
        assert!(err.to_string().contains("d5"));
    }

    #[test]
    fn test_invalid_castling_display() {
        let err = MoveError::InvalidCastling {
            side: Side::Black,
            kingside: false,
        };
        assert!(err.to_string().contains("Black"));
        assert!(err.to_string().contains("queenside"));
    }

    #[test]
    fn test_invalid_promotion_display() {
        let err = MoveError::InvalidPromotion {
            square: Square(0, 6),
        };
        assert!(err.to_string().contains("a7"));
    }

    #[test]
    fn test_from_malformed_square() {
        let err = MalformedSquare {
            notation: "x".to_string(),
        };
        let converted = MoveError::from(err);
        assert_eq!(
            converted,
            MoveError::MalformedSquare {
                notation: "x".to_string()
            }
        );
    }

    #[test]
    fn test_error_clone_and_eq() {
        let err = MoveError::InvalidPromotion {
            square: Square(0, 0),
        };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
