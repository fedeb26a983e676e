//! Text and JSON reports for evaluated scenarios.

use crate::scenario::CheckOutcome;
use serde::Serialize;

/// JSON representation of a scenario run.
#[derive(Serialize)]
struct ReportJson<'a> {
    /// Path of the scenario file.
    scenario: &'a str,
    passed: usize,
    failed: usize,
    checks: &'a [CheckOutcome],
}

/// Counts of passed and failed checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
}

impl Summary {
    pub fn of(outcomes: &[CheckOutcome]) -> Self {
        let passed = outcomes.iter().filter(|o| o.passed()).count();
        Summary {
            passed,
            failed: outcomes.len() - passed,
        }
    }
}

/// Formats one line per check, e.g. `ok    white-rook: kill black-bishop -> true`.
pub fn to_text(outcomes: &[CheckOutcome]) -> String {
    outcomes
        .iter()
        .map(|o| {
            let status = match (o.passed(), o.expect) {
                (false, _) => "FAIL",
                (true, Some(_)) => "ok",
                (true, None) => "-",
            };
            format!("{:<5} {}: {} -> {}", status, o.piece, o.query, o.result)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Serializes the outcomes as pretty-printed JSON.
pub fn to_json(scenario: &str, outcomes: &[CheckOutcome]) -> serde_json::Result<String> {
    let summary = Summary::of(outcomes);
    serde_json::to_string_pretty(&ReportJson {
        scenario,
        passed: summary.passed,
        failed: summary.failed,
        checks: outcomes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(result: bool, expect: Option<bool>) -> CheckOutcome {
        CheckOutcome {
            piece: "white-rook".to_string(),
            query: "move to d8".to_string(),
            result,
            expect,
        }
    }

    #[test]
    fn summary_counts() {
        let outcomes = [
            outcome(true, Some(true)),
            outcome(true, Some(false)),
            outcome(false, None),
        ];
        assert_eq!(
            Summary::of(&outcomes),
            Summary {
                passed: 2,
                failed: 1
            }
        );
    }

    #[test]
    fn text_lines() {
        let outcomes = [outcome(true, Some(true)), outcome(false, Some(true)), outcome(false, None)];
        let text = to_text(&outcomes);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "ok    white-rook: move to d8 -> true");
        assert_eq!(lines[1], "FAIL  white-rook: move to d8 -> false");
        assert_eq!(lines[2], "-     white-rook: move to d8 -> false");
    }

    #[test]
    fn json_report() {
        let outcomes = [outcome(true, Some(true)), outcome(false, None)];
        let json = to_json("rooks.toml", &outcomes).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["scenario"], "rooks.toml");
        assert_eq!(value["passed"], 2);
        assert_eq!(value["failed"], 0);
        assert_eq!(value["checks"][0]["result"], true);
        assert_eq!(value["checks"][0]["expect"], true);
        assert!(value["checks"][1].get("expect").is_none());
    }
}
