//! Test-only helpers: scenario fixtures and a reference solver.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

const SCENARIOS: &str = include_str!("../tests/fixtures/scenarios.toml");

/// One row of the shared scenario table.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Scenario {
    pub name: String,
    pub clouds: Vec<i64>,
    /// Expected jump count, for solvable inputs.
    pub jumps: Option<usize>,
    /// Expected error kind (`JumpError::kind`), for rejected inputs.
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioExpectation<'a> {
    Jumps(usize),
    Error(&'a str),
}

impl Scenario {
    pub fn expectation(&self) -> Result<ScenarioExpectation<'_>> {
        match (self.jumps, self.error.as_deref()) {
            (Some(jumps), None) => Ok(ScenarioExpectation::Jumps(jumps)),
            (None, Some(kind)) => Ok(ScenarioExpectation::Error(kind)),
            _ => bail!("scenario {} needs exactly one of jumps/error", self.name),
        }
    }

    /// Clouds rendered in the whitespace-separated list format.
    pub fn as_list(&self) -> String {
        self.clouds
            .iter()
            .map(|code| code.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Deserialize)]
struct ScenarioFile {
    scenario: Vec<Scenario>,
}

/// Load the bundled scenario table (`tests/fixtures/scenarios.toml`).
pub fn load_scenarios() -> Result<Vec<Scenario>> {
    let file: ScenarioFile = toml::from_str(SCENARIOS).context("parse scenarios.toml")?;
    Ok(file.scenario)
}

/// Exhaustive minimum over every 1-or-2 step path, for cross-checking.
///
/// Returns `None` when the input is not a valid, solvable sequence.
pub fn brute_force_min_jumps(codes: &[i64]) -> Option<usize> {
    if codes.first() != Some(&0) || codes.iter().any(|&c| c != 0 && c != 1) {
        return None;
    }
    let mut best: Vec<Option<usize>> = vec![None; codes.len()];
    best[0] = Some(0);
    for index in 1..codes.len() {
        if codes[index] != 0 {
            continue;
        }
        let from_one = best[index - 1];
        let from_two = index.checked_sub(2).and_then(|prev| best[prev]);
        best[index] = match (from_one, from_two) {
            (Some(a), Some(b)) => Some(a.min(b) + 1),
            (Some(a), None) | (None, Some(a)) => Some(a + 1),
            (None, None) => None,
        };
    }
    best[codes.len() - 1]
}

/// Temporary working directory for config and batch tests.
pub struct TestDir {
    dir: tempfile::TempDir,
}

impl TestDir {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create temp dir")?;
        Ok(Self { dir })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write `contents` to `name` under the directory and return its path.
    pub fn write(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }
}
