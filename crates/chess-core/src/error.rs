//! Error types for piece construction and text parsing.

use crate::Color;
use thiserror::Error;

/// Errors that can occur when placing a piece on the board.
///
/// Only construction can fail. Movement and capture queries answer
/// `false` for anything that is not a legal destination.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PieceError {
    #[error("color cannot be absent")]
    MissingColor,

    #[error("piece position out of bounds: ({row}, {column})")]
    OutOfBounds { row: i32, column: i32 },

    #[error("{color} pawn cannot be created on row {row}")]
    RoyalRow { color: Color, row: i32 },
}

/// Errors that can occur when parsing colors, piece kinds or squares from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid color: expected 'white' or 'black', got '{0}'")]
    InvalidColor(String),

    #[error("invalid piece kind: '{0}'")]
    InvalidKind(String),

    #[error("invalid square: '{0}'")]
    InvalidSquare(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_error_messages() {
        assert_eq!(PieceError::MissingColor.to_string(), "color cannot be absent");
        assert_eq!(
            PieceError::OutOfBounds { row: 8, column: 0 }.to_string(),
            "piece position out of bounds: (8, 0)"
        );
        assert_eq!(
            PieceError::RoyalRow {
                color: Color::White,
                row: 0
            }
            .to_string(),
            "White pawn cannot be created on row 0"
        );
    }

    #[test]
    fn parse_error_messages() {
        assert_eq!(
            ParseError::InvalidKind("wizard".to_string()).to_string(),
            "invalid piece kind: 'wizard'"
        );
        assert_eq!(
            ParseError::InvalidSquare("j9".to_string()).to_string(),
            "invalid square: 'j9'"
        );
    }
}
