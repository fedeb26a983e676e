//! Scenario file loading and evaluation.
//!
//! A scenario is a TOML file that places named pieces and lists
//! move/capture checks to run against them:
//!
//! ```toml
//! [[pieces]]
//! name = "white-rook"
//! kind = "rook"
//! color = "white"
//! square = "d4"
//!
//! [[pieces]]
//! name = "black-bishop"
//! kind = "b"
//! color = "black"
//! row = 3
//! column = 7
//!
//! [[checks]]
//! piece = "white-rook"
//! kill = "black-bishop"
//! expect = true
//! ```

use chess_core::{ChessPiece, Color, ParseError, PieceError, PieceKind, Square};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading a scenario.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the scenario file from disk.
    #[error("Failed to read scenario file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the scenario file as valid TOML.
    #[error("Failed to parse scenario: {0}")]
    ParseError(#[from] toml::de::Error),
    /// A piece's kind, color or square could not be parsed.
    #[error("Invalid value in piece '{name}': {source}")]
    InvalidValue {
        name: String,
        #[source]
        source: ParseError,
    },
    /// The piece could not be placed on the board.
    #[error("Cannot place piece '{name}': {source}")]
    InvalidPiece {
        name: String,
        #[source]
        source: PieceError,
    },
    /// The piece has neither a square nor both row and column.
    #[error("Piece '{0}' needs a square or both row and column")]
    MissingPosition(String),
    /// A piece has an empty name, which `kill = ""` could never refer to.
    #[error("Piece names cannot be empty")]
    EmptyName,
    /// Two pieces share a name.
    #[error("Duplicate piece name: {0}")]
    DuplicatePiece(String),
    /// A check refers to a piece that was never defined.
    #[error("Unknown piece: {0}")]
    UnknownPiece(String),
    /// A check's `move_to` square could not be parsed.
    #[error("Invalid target in check #{index}: {source}")]
    InvalidTarget {
        index: usize,
        #[source]
        source: ParseError,
    },
    /// A check has no move target and no kill target.
    #[error("Check #{0} needs move_to, target_row/target_column or kill")]
    MissingTarget(usize),
    /// A check has more than one target form.
    #[error("Check #{0} must use only one of move_to, target_row/target_column or kill")]
    AmbiguousTarget(usize),
}

/// A scenario file exactly as written on disk.
///
/// Unknown keys are rejected so that a misspelled `expect` cannot turn a
/// check into one that always passes.
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ScenarioFile {
    #[serde(default)]
    pub pieces: Vec<PieceSpec>,
    #[serde(default)]
    pub checks: Vec<CheckSpec>,
}

/// A named piece placement.
///
/// Either `square` or both `row` and `column` must be given. When both
/// forms are present, `square` wins.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct PieceSpec {
    pub name: String,
    /// Piece name ("knight") or FEN letter ("n").
    pub kind: String,
    /// Omitting the color is reported as a placement error.
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub square: Option<String>,
    #[serde(default)]
    pub row: Option<i32>,
    #[serde(default)]
    pub column: Option<i32>,
}

/// A single move or capture check against a named piece.
///
/// Exactly one target form must be given: `move_to`, the pair
/// `target_row`/`target_column`, or `kill`.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct CheckSpec {
    pub piece: String,
    /// Target square in algebraic notation.
    #[serde(default)]
    pub move_to: Option<String>,
    /// Raw target row; may lie off the board.
    #[serde(default)]
    pub target_row: Option<i32>,
    /// Raw target column; may lie off the board.
    #[serde(default)]
    pub target_column: Option<i32>,
    /// Name of the piece to capture. An empty string means "no piece".
    #[serde(default)]
    pub kill: Option<String>,
    #[serde(default)]
    pub expect: Option<bool>,
}

/// What a check asks of its piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Move { row: i32, column: i32 },
    Kill { target: Option<String> },
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Query::Move { row, column } => match Square::new(*row, *column) {
                Some(square) => write!(f, "move to {}", square),
                None => write!(f, "move to ({}, {})", row, column),
            },
            Query::Kill { target: Some(name) } => write!(f, "kill {}", name),
            Query::Kill { target: None } => write!(f, "kill nothing"),
        }
    }
}

/// A validated check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub piece: String,
    pub query: Query,
    pub expect: Option<bool>,
}

/// The result of evaluating one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub piece: String,
    pub query: String,
    pub result: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expect: Option<bool>,
}

impl CheckOutcome {
    /// A check without an expectation always passes.
    pub fn passed(&self) -> bool {
        self.expect.map_or(true, |expect| expect == self.result)
    }
}

/// A loaded scenario: placed pieces and the checks to run against them.
#[derive(Debug, Default)]
pub struct Scenario {
    pieces: HashMap<String, ChessPiece>,
    checks: Vec<Check>,
}

impl Scenario {
    /// Loads and validates a scenario file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file cannot be read,
    /// [`ConfigError::ParseError`] if it is not valid TOML, or any of the
    /// validation errors of [`Scenario::from_file`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parses and validates a scenario from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let file: ScenarioFile = toml::from_str(content)?;
        Self::from_file(file)
    }

    /// Places every piece and validates every check.
    ///
    /// # Errors
    ///
    /// Fails on the first piece that cannot be placed, the first duplicate
    /// name, or the first check that has no target or names an unknown piece.
    pub fn from_file(file: ScenarioFile) -> Result<Self, ConfigError> {
        let mut pieces = HashMap::with_capacity(file.pieces.len());
        for spec in &file.pieces {
            let piece = place(spec)?;
            if pieces.insert(spec.name.clone(), piece).is_some() {
                return Err(ConfigError::DuplicatePiece(spec.name.clone()));
            }
        }

        let checks = file
            .checks
            .iter()
            .enumerate()
            .map(|(index, spec)| build_check(index, spec, &pieces))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Scenario { pieces, checks })
    }

    /// Looks up a placed piece by name.
    pub fn piece(&self, name: &str) -> Option<&ChessPiece> {
        self.pieces.get(name)
    }

    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// Evaluates every check in file order.
    pub fn evaluate(&self) -> Vec<CheckOutcome> {
        self.checks
            .iter()
            .map(|check| {
                let result = self.answer(check);
                tracing::debug!(piece = %check.piece, query = %check.query, result, "evaluated check");
                CheckOutcome {
                    piece: check.piece.clone(),
                    query: check.query.to_string(),
                    result,
                    expect: check.expect,
                }
            })
            .collect()
    }

    fn answer(&self, check: &Check) -> bool {
        // Names were resolved when the check was built.
        let Some(piece) = self.piece(&check.piece) else {
            return false;
        };
        match &check.query {
            Query::Move { row, column } => piece.can_move(*row, *column),
            Query::Kill { target } => {
                piece.can_kill(target.as_deref().and_then(|name| self.piece(name)))
            }
        }
    }
}

fn place(spec: &PieceSpec) -> Result<ChessPiece, ConfigError> {
    if spec.name.is_empty() {
        return Err(ConfigError::EmptyName);
    }

    let invalid = |source| ConfigError::InvalidValue {
        name: spec.name.clone(),
        source,
    };

    let kind: PieceKind = spec.kind.parse().map_err(invalid)?;
    let color = spec
        .color
        .as_deref()
        .map(str::parse::<Color>)
        .transpose()
        .map_err(invalid)?;
    let (row, column) = match (&spec.square, spec.row, spec.column) {
        (Some(square), _, _) => {
            let square: Square = square.parse().map_err(invalid)?;
            (square.row(), square.column())
        }
        (None, Some(row), Some(column)) => (row, column),
        _ => return Err(ConfigError::MissingPosition(spec.name.clone())),
    };

    ChessPiece::new(kind, row, column, color).map_err(|source| ConfigError::InvalidPiece {
        name: spec.name.clone(),
        source,
    })
}

fn build_check(
    index: usize,
    spec: &CheckSpec,
    pieces: &HashMap<String, ChessPiece>,
) -> Result<Check, ConfigError> {
    if !pieces.contains_key(&spec.piece) {
        return Err(ConfigError::UnknownPiece(spec.piece.clone()));
    }

    let forms = [
        spec.move_to.is_some(),
        spec.target_row.is_some() || spec.target_column.is_some(),
        spec.kill.is_some(),
    ];
    if forms.iter().filter(|&&given| given).count() > 1 {
        return Err(ConfigError::AmbiguousTarget(index));
    }

    let query = match (&spec.move_to, spec.target_row, spec.target_column, &spec.kill) {
        (Some(square), _, _, _) => {
            let square: Square = square
                .parse()
                .map_err(|source| ConfigError::InvalidTarget { index, source })?;
            Query::Move {
                row: square.row(),
                column: square.column(),
            }
        }
        (None, Some(row), Some(column), _) => Query::Move { row, column },
        (None, _, _, Some(name)) if name.is_empty() => Query::Kill { target: None },
        (None, _, _, Some(name)) => {
            if !pieces.contains_key(name) {
                return Err(ConfigError::UnknownPiece(name.clone()));
            }
            Query::Kill {
                target: Some(name.clone()),
            }
        }
        _ => return Err(ConfigError::MissingTarget(index)),
    };

    Ok(Check {
        piece: spec.piece.clone(),
        query,
        expect: spec.expect,
    })
}
