//! A piece standing on a fixed square.

use crate::rules::{self, Delta};
use crate::{Color, PieceError, PieceKind, Square};
use std::fmt;

/// An immutable piece: a kind and a color placed on a square.
///
/// A `ChessPiece` is validated when it is created and never changes
/// afterwards. Queries never fail: anything that is not a legal
/// destination or capture simply answers `false`.
///
/// # Example
///
/// ```
/// use chess_core::{ChessPiece, Color};
///
/// let rook = ChessPiece::rook(3, 3, Color::White)?;
/// let bishop = ChessPiece::bishop(3, 7, Color::Black)?;
///
/// assert!(rook.can_move(3, 0));
/// assert!(rook.can_kill(Some(&bishop)));
/// assert!(!rook.can_move(8, 3));
/// # Ok::<(), chess_core::PieceError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessPiece {
    kind: PieceKind,
    color: Color,
    square: Square,
}

impl ChessPiece {
    /// Places a piece of `kind` at `(row, column)`.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - [`PieceError::MissingColor`] if `color` is `None`.
    /// - [`PieceError::OutOfBounds`] if the coordinate is off the board.
    /// - [`PieceError::RoyalRow`] for a White pawn on row 0 or a Black pawn on row 7.
    pub fn new(
        kind: PieceKind,
        row: i32,
        column: i32,
        color: Option<Color>,
    ) -> Result<Self, PieceError> {
        let color = color.ok_or(PieceError::MissingColor)?;
        let square = Square::new(row, column).ok_or(PieceError::OutOfBounds { row, column })?;
        Self::at(kind, square, color)
    }

    /// Places a piece of `kind` on an already validated square.
    ///
    /// # Errors
    ///
    /// Returns [`PieceError::RoyalRow`] if a pawn would stand on its own royal row.
    pub fn at(kind: PieceKind, square: Square, color: Color) -> Result<Self, PieceError> {
        if kind == PieceKind::Pawn && square.row() == color.royal_row() {
            return Err(PieceError::RoyalRow {
                color,
                row: square.row(),
            });
        }
        Ok(ChessPiece {
            kind,
            color,
            square,
        })
    }

    /// Places a pawn. See [`ChessPiece::new`].
    pub fn pawn(row: i32, column: i32, color: Color) -> Result<Self, PieceError> {
        Self::new(PieceKind::Pawn, row, column, Some(color))
    }

    /// Places a knight. See [`ChessPiece::new`].
    pub fn knight(row: i32, column: i32, color: Color) -> Result<Self, PieceError> {
        Self::new(PieceKind::Knight, row, column, Some(color))
    }

    /// Places a bishop. See [`ChessPiece::new`].
    pub fn bishop(row: i32, column: i32, color: Color) -> Result<Self, PieceError> {
        Self::new(PieceKind::Bishop, row, column, Some(color))
    }

    /// Places a rook. See [`ChessPiece::new`].
    pub fn rook(row: i32, column: i32, color: Color) -> Result<Self, PieceError> {
        Self::new(PieceKind::Rook, row, column, Some(color))
    }

    /// Places a queen. See [`ChessPiece::new`].
    pub fn queen(row: i32, column: i32, color: Color) -> Result<Self, PieceError> {
        Self::new(PieceKind::Queen, row, column, Some(color))
    }

    /// Places a king. See [`ChessPiece::new`].
    pub fn king(row: i32, column: i32, color: Color) -> Result<Self, PieceError> {
        Self::new(PieceKind::King, row, column, Some(color))
    }

    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub const fn square(&self) -> Square {
        self.square
    }

    /// Returns the row (0-7).
    #[inline]
    pub const fn row(&self) -> i32 {
        self.square.row()
    }

    /// Returns the column (0-7).
    #[inline]
    pub const fn column(&self) -> i32 {
        self.square.column()
    }

    /// Returns true if this piece may move to `(row, column)`.
    ///
    /// Any integers are accepted; off-board targets and the piece's own
    /// square are never legal.
    pub fn can_move(&self, row: i32, column: i32) -> bool {
        self.delta_to(row, column)
            .is_some_and(|delta| rules::can_move(self.kind, self.color, self.row(), delta))
    }

    /// Returns true if this piece may move to `square`.
    pub fn can_move_to(&self, square: Square) -> bool {
        self.can_move(square.row(), square.column())
    }

    /// Returns true if this piece could capture an enemy standing on `(row, column)`.
    ///
    /// Colors are not considered here; see [`ChessPiece::can_kill`].
    pub fn attacks(&self, row: i32, column: i32) -> bool {
        self.delta_to(row, column)
            .is_some_and(|delta| rules::can_capture(self.kind, self.color, self.row(), delta))
    }

    /// Returns true if this piece may capture `other`.
    ///
    /// `None` and pieces of the same color can never be captured.
    pub fn can_kill(&self, other: Option<&ChessPiece>) -> bool {
        match other {
            Some(other) if other.color != self.color => self.attacks(other.row(), other.column()),
            _ => false,
        }
    }

    /// Returns every square this piece may move to, in square order.
    pub fn destinations(&self) -> Vec<Square> {
        Square::all().filter(|&sq| self.can_move_to(sq)).collect()
    }

    /// Returns every square on which an enemy piece could be captured, in square order.
    pub fn attacked_squares(&self) -> Vec<Square> {
        Square::all()
            .filter(|sq| self.attacks(sq.row(), sq.column()))
            .collect()
    }

    fn delta_to(&self, row: i32, column: i32) -> Option<Delta> {
        Delta::between(self.row(), self.column(), row, column)
    }
}

impl fmt::Display for ChessPiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} at {}", self.color, self.kind, self.square)
    }
}
