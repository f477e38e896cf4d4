//! Batch files: many named sequences in one JSON document.
//!
//! Files are checked against the bundled v1 schema before deserializing, and
//! entry ids must be unique. Element values are deliberately only typed as
//! integers by the schema so that out-of-range codes surface per entry as
//! `invalid_element` instead of failing the whole file.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use jsonschema::Draft;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::io::config::LimitsConfig;

const BATCH_V1_SCHEMA: &str = include_str!("../../../schemas/batch/v1.schema.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchFile {
    pub sequences: Vec<BatchEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchEntry {
    pub id: String,
    pub clouds: Vec<i64>,
}

/// Load and validate a batch file from disk (schema + semantic checks).
pub fn load_batch(path: &Path, limits: &LimitsConfig) -> Result<BatchFile> {
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_batch(&contents, limits).with_context(|| format!("load batch {}", path.display()))
}

/// Parse and validate batch JSON from a string.
pub fn parse_batch(contents: &str, limits: &LimitsConfig) -> Result<BatchFile> {
    let value: Value = serde_json::from_str(contents).context("parse batch json")?;
    validate_schema(&value)?;
    let batch: BatchFile = serde_json::from_value(value).context("deserialize batch")?;
    let errors = validate_entries(&batch, limits);
    if !errors.is_empty() {
        return Err(anyhow!("batch invariants failed: {}", errors.join("; ")));
    }
    Ok(batch)
}

fn validate_schema(instance: &Value) -> Result<()> {
    let schema: Value = serde_json::from_str(BATCH_V1_SCHEMA).context("parse batch schema")?;
    let compiled = jsonschema::options()
        .with_draft(Draft::Draft202012)
        .build(&schema)
        .map_err(|err| anyhow!("invalid batch schema: {}", err))?;
    let messages: Vec<String> = compiled
        .iter_errors(instance)
        .map(|err| err.to_string())
        .collect();
    if !messages.is_empty() {
        return Err(anyhow!(
            "batch schema validation failed: {}",
            messages.join("; ")
        ));
    }
    Ok(())
}

/// Semantic checks not expressible in the schema:
/// - No duplicate ids
/// - No entry longer than `limits.max_clouds`
fn validate_entries(batch: &BatchFile, limits: &LimitsConfig) -> Vec<String> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();
    for entry in &batch.sequences {
        if !seen.insert(entry.id.as_str()) {
            errors.push(format!("duplicate id '{}'", entry.id));
        }
        if entry.clouds.len() > limits.max_clouds {
            errors.push(format!(
                "{}: {} clouds exceeds limit {}",
                entry.id,
                entry.clouds.len(),
                limits.max_clouds
            ));
        }
    }
    errors
}
