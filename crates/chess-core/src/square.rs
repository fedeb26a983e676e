//! Board coordinates.
//!
//! Rows and columns are numbered 0-7. Row 0 is White's royal row and
//! row 7 is Black's. In algebraic notation the column is written as a
//! letter (`a`-`h`) and the row as a digit one higher than its index
//! (`1`-`8`), so `(0, 0)` is `a1` and `(3, 4)` is `e4`.

use crate::ParseError;
use std::fmt;
use std::str::FromStr;

/// Number of rows (and columns) on the board.
pub const BOARD_SIZE: i32 = 8;

/// Returns true if `(row, column)` lies on the board.
#[inline]
pub const fn in_bounds(row: i32, column: i32) -> bool {
    row >= 0 && row < BOARD_SIZE && column >= 0 && column < BOARD_SIZE
}

/// A square on the board, indexed 0-63.
///
/// Squares are indexed row-major: `(0, 0)` = 0, `(0, 7)` = 7,
/// `(1, 0)` = 8, ..., `(7, 7)` = 63.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Creates a square from a row and column, or `None` if off the board.
    #[inline]
    pub const fn new(row: i32, column: i32) -> Option<Self> {
        if in_bounds(row, column) {
            Some(Square((row * BOARD_SIZE + column) as u8))
        } else {
            None
        }
    }

    /// Creates a square from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let column = match bytes[0].to_ascii_lowercase() {
            c @ b'a'..=b'h' => (c - b'a') as i32,
            _ => return None,
        };
        let row = match bytes[1] {
            r @ b'1'..=b'8' => (r - b'1') as i32,
            _ => return None,
        };
        Square::new(row, column)
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the row (0-7).
    #[inline]
    pub const fn row(self) -> i32 {
        (self.0 / 8) as i32
    }

    /// Returns the column (0-7).
    #[inline]
    pub const fn column(self) -> i32 {
        (self.0 % 8) as i32
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        let column = (b'a' + self.0 % 8) as char;
        let row = (b'1' + self.0 / 8) as char;
        format!("{}{}", column, row)
    }

    /// Iterates over all 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

impl FromStr for Square {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_algebraic(s.trim()).ok_or_else(|| ParseError::InvalidSquare(s.to_string()))
    }
}
