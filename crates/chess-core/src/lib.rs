//! Movement and capture rules for individual chess pieces.
//!
//! This crate answers two questions about a single piece standing on a
//! fixed square:
//! - may it move to a given square ([`ChessPiece::can_move`])?
//! - may it capture a given enemy piece ([`ChessPiece::can_kill`])?
//!
//! It provides:
//! - [`Color`] and [`PieceKind`] for piece identity
//! - [`Square`] and [`in_bounds`] for board coordinates
//! - [`ChessPiece`] for validated, immutable placed pieces
//! - [`PieceError`] and [`ParseError`] for the ways construction and parsing fail
//!
//! Each piece is judged in isolation. Occupancy, blocked paths, turn order
//! and check belong to whatever board sits on top of this crate.

mod chess_piece;
mod color;
mod error;
mod piece;
mod rules;
mod square;

pub use chess_piece::ChessPiece;
pub use color::Color;
pub use error::{ParseError, PieceError};
pub use piece::PieceKind;
pub use square::{in_bounds, Square, BOARD_SIZE};
