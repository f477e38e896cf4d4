//! Orchestration for `cloudhop count`, `route`, `check` and `batch`.

use anyhow::Result;
use serde::Serialize;
use serde_json::{Value, json};
use tracing::{debug, info};

use crate::core::counter::min_jumps;
use crate::core::error::{ErrorReport, JumpError};
use crate::core::invariants::{check_reachable, validate_codes};
use crate::core::route::{Route, plan_route};
use crate::exit_codes;
use crate::io::batch::BatchFile;
use crate::io::config::CloudhopConfig;
use crate::io::input::{InputFormat, decode_clouds};

/// What a single-sequence command should compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Count,
    Route,
    Check,
}

/// Structured result of solving one sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    Jumps(usize),
    Route(Route),
    /// Sequence is valid and its last cloud is reachable.
    Valid {
        clouds: usize,
    },
    Rejected(JumpError),
}

impl SolveOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            SolveOutcome::Rejected(JumpError::Unsolvable { .. }) => exit_codes::UNSOLVABLE,
            SolveOutcome::Rejected(_) => exit_codes::INVALID,
            _ => exit_codes::OK,
        }
    }

    /// Plain-text rendering for stdout. Rejections have none.
    pub fn render_text(&self) -> Option<String> {
        match self {
            SolveOutcome::Jumps(jumps) => Some(jumps.to_string()),
            SolveOutcome::Route(route) => {
                let path = route
                    .path
                    .iter()
                    .map(|index| index.to_string())
                    .collect::<Vec<_>>()
                    .join(" -> ");
                Some(format!("{} jumps: {}", route.jumps, path))
            }
            SolveOutcome::Valid { .. } => Some("ok".to_string()),
            SolveOutcome::Rejected(_) => None,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            SolveOutcome::Jumps(jumps) => json!({ "jumps": jumps }),
            SolveOutcome::Route(route) => json!({ "jumps": route.jumps, "path": route.path }),
            SolveOutcome::Valid { clouds } => json!({ "valid": true, "clouds": clouds }),
            SolveOutcome::Rejected(err) => json!({ "error": err.report() }),
        }
    }
}

/// Solve already-decoded codes.
pub fn solve_codes(codes: &[i64], mode: Mode) -> SolveOutcome {
    let result = validate_codes(codes).and_then(|sequence| match mode {
        Mode::Count => min_jumps(&sequence).map(SolveOutcome::Jumps),
        Mode::Route => plan_route(&sequence).map(SolveOutcome::Route),
        Mode::Check => check_reachable(&sequence).map(|()| SolveOutcome::Valid {
            clouds: sequence.len(),
        }),
    });
    match result {
        Ok(outcome) => {
            debug!(clouds = codes.len(), ?mode, "solved sequence");
            outcome
        }
        Err(err) => {
            debug!(clouds = codes.len(), kind = err.kind(), "rejected sequence");
            SolveOutcome::Rejected(err)
        }
    }
}

/// Decode raw text and solve it.
///
/// Decode failures are returned as `Err`; invalid or unsolvable sequences
/// are a successful [`SolveOutcome::Rejected`].
pub fn solve_text(
    raw: &str,
    format: Option<InputFormat>,
    config: &CloudhopConfig,
    mode: Mode,
) -> Result<SolveOutcome> {
    let format = format.unwrap_or(config.input.format);
    let codes = decode_clouds(raw, format, &config.limits)?;
    Ok(solve_codes(&codes, mode))
}

/// Per-entry result of a batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchEntryReport {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jumps: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub solved: usize,
    pub failed: usize,
    pub entries: Vec<BatchEntryReport>,
}

impl BatchReport {
    pub fn exit_code(&self) -> i32 {
        if self.failed == 0 {
            exit_codes::OK
        } else {
            exit_codes::BATCH_FAILED
        }
    }

    /// One `id: result` line per entry.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            let result = match (&entry.jumps, &entry.error) {
                (Some(jumps), _) => jumps.to_string(),
                (None, Some(error)) => format!("error: {}", error.message),
                (None, None) => "error: no result".to_string(),
            };
            out.push_str(&format!("{}: {}\n", entry.id, result));
        }
        out.push_str(&format!("solved={} failed={}\n", self.solved, self.failed));
        out
    }
}

/// Count jumps for every batch entry. One failing entry does not stop the rest.
pub fn solve_batch(batch: &BatchFile) -> BatchReport {
    let entries: Vec<BatchEntryReport> = batch
        .sequences
        .iter()
        .map(|entry| {
            let result = validate_codes(&entry.clouds).and_then(|sequence| min_jumps(&sequence));
            if let Err(err) = &result {
                debug!(id = %entry.id, kind = err.kind(), "batch entry rejected");
            }
            BatchEntryReport {
                id: entry.id.clone(),
                jumps: result.as_ref().ok().copied(),
                error: result.err().map(|err| err.report()),
            }
        })
        .collect();
    let failed = entries.iter().filter(|entry| entry.error.is_some()).count();
    let report = BatchReport {
        solved: entries.len() - failed,
        failed,
        entries,
    };
    info!(
        solved = report.solved,
        failed = report.failed,
        "batch complete"
    );
    report
}
