//! Piece Probe - inspect how individual chess pieces move and capture.
//!
//! Places a single piece (or a scenario file of pieces) and answers
//! movement and capture questions about it, one piece at a time.

mod diagram;
mod report;
mod scenario;

use anyhow::Context;
use chess_core::{ChessPiece, Color, PieceKind, Square};
use clap::{Parser, Subcommand};
use report::Summary;
use scenario::Scenario;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "piece-probe")]
#[command(about = "Inspect how individual chess pieces move and capture")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw every square a piece can move to or capture on
    Show {
        /// Piece kind (name or FEN letter)
        kind: PieceKind,
        /// Piece color
        color: Color,
        /// Square the piece stands on (e.g. d4)
        square: Square,
    },
    /// Ask whether a piece can move to a square
    Move {
        kind: PieceKind,
        color: Color,
        square: Square,
        /// Destination square
        target: Square,
    },
    /// Ask whether a piece can capture another piece
    Kill {
        kind: PieceKind,
        color: Color,
        square: Square,
        /// Kind of the piece to capture
        target_kind: PieceKind,
        /// Color of the piece to capture
        target_color: Color,
        /// Square of the piece to capture
        target_square: Square,
    },
    /// Run every check in a scenario file
    Run {
        /// Path to a TOML scenario file
        file: PathBuf,
        /// Print the results as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Show {
            kind,
            color,
            square,
        } => {
            let piece = ChessPiece::at(kind, square, color)?;
            tracing::debug!(%piece, "showing piece");
            print!("{}", diagram::render(&piece));
            println!();
            println!("{}", piece);
            println!("moves:    {}", diagram::square_list(&piece.destinations()));
            println!("captures: {}", diagram::square_list(&piece.attacked_squares()));
        }
        Commands::Move {
            kind,
            color,
            square,
            target,
        } => {
            let piece = ChessPiece::at(kind, square, color)?;
            let result = piece.can_move_to(target);
            tracing::debug!(%piece, %target, result, "move query");
            println!("{}", result);
        }
        Commands::Kill {
            kind,
            color,
            square,
            target_kind,
            target_color,
            target_square,
        } => {
            let piece = ChessPiece::at(kind, square, color)?;
            let target = ChessPiece::at(target_kind, target_square, target_color)
                .context("Cannot place the target piece")?;
            let result = piece.can_kill(Some(&target));
            tracing::debug!(%piece, %target, result, "kill query");
            println!("{}", result);
        }
        Commands::Run { file, json } => run_scenario(&file, json)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_scenario(file: &Path, json: bool) -> anyhow::Result<()> {
    let scenario = Scenario::load(file)
        .with_context(|| format!("Failed to load scenario {}", file.display()))?;
    tracing::info!("Loaded {} checks from {:?}", scenario.checks().len(), file);

    let outcomes = scenario.evaluate();
    for failed in outcomes.iter().filter(|o| !o.passed()) {
        tracing::warn!(
            piece = %failed.piece,
            query = %failed.query,
            result = failed.result,
            "check did not match its expectation"
        );
    }

    if json {
        println!("{}", report::to_json(&file.display().to_string(), &outcomes)?);
    } else if !outcomes.is_empty() {
        println!("{}", report::to_text(&outcomes));
    }

    let summary = Summary::of(&outcomes);
    tracing::info!("{} passed, {} failed", summary.passed, summary.failed);
    if summary.failed > 0 {
        anyhow::bail!("{} of {} checks failed", summary.failed, outcomes.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::Write;

    const BIN: &str = env!("CARGO_PKG_NAME");

    const PASSING: &str = r#"
[[pieces]]
name = "rook"
kind = "rook"
color = "white"
square = "d4"

[[checks]]
piece = "rook"
move_to = "d8"
expect = true
"#;

    fn scenario_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_cli_debug_assert() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_show() {
        let cli = Cli::try_parse_from([BIN, "show", "N", "white", "d4"]).unwrap();
        assert!(!cli.verbose);
        match cli.command {
            Commands::Show {
                kind,
                color,
                square,
            } => {
                assert_eq!(kind, PieceKind::Knight);
                assert_eq!(color, Color::White);
                assert_eq!(square, Square::from_algebraic("d4").unwrap());
            }
            _ => panic!("expected show command"),
        }
    }

    #[test]
    fn test_parse_rejects_bad_square() {
        assert!(Cli::try_parse_from([BIN, "move", "rook", "white", "z9", "d5"]).is_err());
        assert!(Cli::try_parse_from([BIN, "move", "wizard", "white", "d4", "d5"]).is_err());
        assert!(Cli::try_parse_from([BIN, "show", "rook", "red", "d4"]).is_err());
    }

    #[test]
    fn test_parse_kill() {
        let cli = Cli::try_parse_from([
            BIN,
            "kill",
            "pawn",
            "b",
            "e5",
            "knight",
            "w",
            "d4",
        ])
        .unwrap();
        match cli.command {
            Commands::Kill {
                kind,
                color,
                target_kind,
                target_color,
                target_square,
                ..
            } => {
                assert_eq!(kind, PieceKind::Pawn);
                assert_eq!(color, Color::Black);
                assert_eq!(target_kind, PieceKind::Knight);
                assert_eq!(target_color, Color::White);
                assert_eq!(target_square, Square::from_algebraic("d4").unwrap());
            }
            _ => panic!("expected kill command"),
        }
    }

    #[test]
    fn test_parse_run_json() {
        let cli = Cli::try_parse_from([BIN, "run", "x.toml", "--json"]).unwrap();
        match cli.command {
            Commands::Run { file, json } => {
                assert_eq!(file, PathBuf::from("x.toml"));
                assert!(json);
            }
            _ => panic!("expected run command"),
        }

        let cli = Cli::try_parse_from([BIN, "run", "x.toml"]).unwrap();
        assert!(matches!(cli.command, Commands::Run { json: false, .. }));
    }

    #[test]
    fn test_verbose_is_global() {
        let before = Cli::try_parse_from([BIN, "--verbose", "run", "x.toml"]).unwrap();
        assert!(before.verbose);
        let after = Cli::try_parse_from([BIN, "run", "x.toml", "-v"]).unwrap();
        assert!(after.verbose);
    }

    #[test]
    fn test_run_scenario_passes() {
        let file = scenario_file(PASSING);
        assert!(run_scenario(file.path(), false).is_ok());
        assert!(run_scenario(file.path(), true).is_ok());
    }

    #[test]
    fn test_run_scenario_fails_on_mismatch() {
        let failing = PASSING.replace("move_to = \"d8\"", "move_to = \"e5\"");
        let file = scenario_file(&failing);
        let err = run_scenario(file.path(), false).unwrap_err();
        assert_eq!(err.to_string(), "1 of 1 checks failed");
    }

    #[test]
    fn test_run_scenario_reports_load_errors() {
        let file = scenario_file("[[pieces]]\nname = \"rook\"\n");
        let err = run_scenario(file.path(), false).unwrap_err();
        assert!(err.to_string().starts_with("Failed to load scenario"));
    }
}
