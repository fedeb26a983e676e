//! Text board diagrams of a piece's reach.

use chess_core::{ChessPiece, Square, BOARD_SIZE};
use std::fmt;

/// Marker for a square the piece can move to but not capture on.
pub const MOVE_ONLY: char = '*';
/// Marker for a square the piece can capture on but not move to.
pub const CAPTURE_ONLY: char = 'x';
/// Marker for a square the piece can both move to and capture on.
pub const MOVE_AND_CAPTURE: char = '+';
const EMPTY: char = '.';

/// A board diagram of one piece's reach, seen from White's side with row 8 on top.
///
/// The piece itself is drawn with its FEN letter.
pub struct Diagram<'a>(pub &'a ChessPiece);

impl fmt::Display for Diagram<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = format!("  +{}+", "-".repeat(BOARD_SIZE as usize * 2 + 1));
        writeln!(f, "{}", border)?;

        for row in (0..BOARD_SIZE).rev() {
            write!(f, "{} |", row + 1)?;
            for column in 0..BOARD_SIZE {
                write!(f, " {}", marker(self.0, row, column))?;
            }
            writeln!(f, " |")?;
        }

        writeln!(f, "{}", border)?;
        write!(f, "   ")?;
        for column in 0..BOARD_SIZE {
            write!(f, " {}", (b'a' + column as u8) as char)?;
        }
        writeln!(f)
    }
}

/// Renders the diagram of `piece` as a string.
pub fn render(piece: &ChessPiece) -> String {
    Diagram(piece).to_string()
}

fn marker(piece: &ChessPiece, row: i32, column: i32) -> char {
    if row == piece.row() && column == piece.column() {
        return piece.kind().to_fen_char(piece.color());
    }
    match (piece.can_move(row, column), piece.attacks(row, column)) {
        (true, true) => MOVE_AND_CAPTURE,
        (true, false) => MOVE_ONLY,
        (false, true) => CAPTURE_ONLY,
        (false, false) => EMPTY,
    }
}

/// Formats squares as a space-separated list, or "-" when empty.
pub fn square_list(squares: &[Square]) -> String {
    if squares.is_empty() {
        return "-".to_string();
    }
    squares
        .iter()
        .map(|sq| sq.to_algebraic())
        .collect::<Vec<_>>()
        .join(" ")
}
