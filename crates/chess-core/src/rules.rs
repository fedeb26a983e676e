//! Movement and capture geometry for every piece kind.
//!
//! The functions here look at a single piece in isolation. Nothing in this
//! module knows about other pieces on the board, so sliding pieces are never
//! blocked and there is no notion of check.

use crate::square::in_bounds;
use crate::{Color, PieceKind};

/// Displacement from a piece's square to a target square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Delta {
    /// Target row minus origin row.
    pub rows: i32,
    /// Target column minus origin column.
    pub columns: i32,
}

impl Delta {
    /// Computes the delta from an on-board origin to `(row, column)`.
    ///
    /// Returns `None` when the target is off the board or is the origin itself;
    /// neither is ever a legal destination.
    #[inline]
    pub fn between(origin_row: i32, origin_column: i32, row: i32, column: i32) -> Option<Self> {
        if !in_bounds(row, column) || (row == origin_row && column == origin_column) {
            return None;
        }
        Some(Delta {
            rows: row - origin_row,
            columns: column - origin_column,
        })
    }

    #[inline]
    fn is_diagonal(self) -> bool {
        self.rows.abs() == self.columns.abs()
    }

    #[inline]
    fn is_straight(self) -> bool {
        self.rows == 0 || self.columns == 0
    }
}

/// Returns true if a piece of `kind` and `color` standing on `origin_row`
/// may move by `delta`.
pub(crate) fn can_move(kind: PieceKind, color: Color, origin_row: i32, delta: Delta) -> bool {
    match kind {
        PieceKind::Pawn => pawn_moves(color, origin_row, delta),
        PieceKind::Knight => knight_moves(delta),
        PieceKind::Bishop => delta.is_diagonal(),
        PieceKind::Rook => delta.is_straight(),
        PieceKind::Queen => delta.is_straight() || delta.is_diagonal(),
        PieceKind::King => delta.rows.abs() <= 1 && delta.columns.abs() <= 1,
    }
}

/// Returns true if an enemy piece offset by `delta` could be captured.
///
/// Pawns capture one step diagonally forward. Every other kind captures
/// exactly where it could move.
pub(crate) fn can_capture(kind: PieceKind, color: Color, origin_row: i32, delta: Delta) -> bool {
    match kind {
        PieceKind::Pawn => pawn_captures(color, delta),
        PieceKind::Knight
        | PieceKind::Bishop
        | PieceKind::Rook
        | PieceKind::Queen
        | PieceKind::King => can_move(kind, color, origin_row, delta),
    }
}

fn knight_moves(delta: Delta) -> bool {
    let (rows, columns) = (delta.rows.abs(), delta.columns.abs());
    (rows == 2 && columns == 1) || (rows == 1 && columns == 2)
}

/// Straight ahead in the same column: one step, or two from the start row.
fn pawn_moves(color: Color, origin_row: i32, delta: Delta) -> bool {
    if delta.columns != 0 {
        return false;
    }
    let forward = color.pawn_direction();
    delta.rows == forward || (delta.rows == 2 * forward && origin_row == color.start_row())
}

fn pawn_captures(color: Color, delta: Delta) -> bool {
    delta.rows == color.pawn_direction() && delta.columns.abs() == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delta(rows: i32, columns: i32) -> Delta {
        Delta { rows, columns }
    }

    #[test]
    fn delta_rejects_off_board_and_origin() {
        assert_eq!(Delta::between(3, 3, 3, 3), None);
        assert_eq!(Delta::between(3, 3, 8, 3), None);
        assert_eq!(Delta::between(3, 3, 3, -1), None);
        assert_eq!(Delta::between(3, 3, i32::MAX, i32::MIN), None);
        assert_eq!(Delta::between(3, 3, 5, 1), Some(delta(2, -2)));
    }

    #[test]
    fn knight_pattern() {
        for (r, c) in [(2, 1), (1, 2), (-2, 1), (-1, -2), (2, -1), (-2, -1)] {
            assert!(knight_moves(delta(r, c)), "({}, {})", r, c);
        }
        for (r, c) in [(1, 1), (2, 2), (0, 2), (3, 1), (2, 0)] {
            assert!(!knight_moves(delta(r, c)), "({}, {})", r, c);
        }
    }

    #[test]
    fn pawn_forward_is_color_relative() {
        assert!(pawn_moves(Color::White, 3, delta(1, 0)));
        assert!(!pawn_moves(Color::White, 3, delta(-1, 0)));
        assert!(pawn_moves(Color::Black, 3, delta(-1, 0)));
        assert!(!pawn_moves(Color::Black, 3, delta(1, 0)));
    }

    #[test]
    fn pawn_double_step_only_from_start_row() {
        assert!(pawn_moves(Color::White, 1, delta(2, 0)));
        assert!(!pawn_moves(Color::White, 2, delta(2, 0)));
        assert!(!pawn_moves(Color::White, 1, delta(3, 0)));
        assert!(pawn_moves(Color::Black, 6, delta(-2, 0)));
        assert!(!pawn_moves(Color::Black, 5, delta(-2, 0)));
    }

    #[test]
    fn pawn_never_leaves_its_column_when_moving() {
        assert!(!pawn_moves(Color::White, 1, delta(1, 1)));
        assert!(!pawn_moves(Color::Black, 6, delta(-1, -1)));
    }

    #[test]
    fn pawn_captures_forward_diagonals() {
        assert!(pawn_captures(Color::White, delta(1, 1)));
        assert!(pawn_captures(Color::White, delta(1, -1)));
        assert!(!pawn_captures(Color::White, delta(-1, 1)));
        assert!(!pawn_captures(Color::White, delta(1, 0)));
        assert!(pawn_captures(Color::Black, delta(-1, 1)));
        assert!(pawn_captures(Color::Black, delta(-1, -1)));
        assert!(!pawn_captures(Color::Black, delta(1, 1)));
        assert!(!pawn_captures(Color::Black, delta(-2, 2)));
    }

    #[test]
    fn non_pawn_capture_matches_move() {
        let deltas = [delta(1, 1), delta(0, 4), delta(2, 1), delta(-3, 0), delta(5, -2)];
        for kind in PieceKind::ALL.into_iter().filter(|&k| k != PieceKind::Pawn) {
            for d in deltas {
                assert_eq!(
                    can_capture(kind, Color::White, 3, d),
                    can_move(kind, Color::White, 3, d),
                    "{} {:?}",
                    kind,
                    d
                );
            }
        }
    }
}
