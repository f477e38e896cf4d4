//! Decoding cloud sequences from text.
//!
//! Three text forms are accepted:
//! - `json`: `[0, 0, 1, 0]`
//! - `list`: integers separated by whitespace and/or commas
//! - `hackerrank`: a count line `n` followed by a line of `n` integers
//!
//! Decoding only produces integers. Whether those integers form a valid
//! sequence is decided by [`crate::core::invariants::validate_codes`].

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::io::config::LimitsConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// Pick a format from the shape of the input.
    #[default]
    Auto,
    Json,
    List,
    Hackerrank,
}

/// Read raw input from a file, or from stdin when `path` is `None` or `-`.
pub fn read_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("read {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read stdin")?;
            Ok(buf)
        }
    }
}

/// Decode `raw` and enforce the configured size limit.
pub fn decode_clouds(raw: &str, format: InputFormat, limits: &LimitsConfig) -> Result<Vec<i64>> {
    let codes = decode(raw, format)?;
    if codes.len() > limits.max_clouds {
        bail!(
            "input has {} clouds, limit is {} (limits.max_clouds)",
            codes.len(),
            limits.max_clouds
        );
    }
    Ok(codes)
}

/// Decode `raw` into integer codes using `format`.
pub fn decode(raw: &str, format: InputFormat) -> Result<Vec<i64>> {
    let format = match format {
        InputFormat::Auto => {
            let detected = detect_format(raw);
            debug!(format = ?detected, "detected input format");
            detected
        }
        explicit => explicit,
    };
    match format {
        InputFormat::Json => decode_json(raw),
        InputFormat::Hackerrank => decode_hackerrank(raw),
        InputFormat::List | InputFormat::Auto => decode_list(raw),
    }
}

/// Guess the format of `raw`. Never returns `Auto`.
///
/// Two lines whose first line is a count of at least 2 matching the second
/// line's length are read as `hackerrank`; anything else that is not a JSON
/// array is a `list`. A leading `0` or `1` is always a cloud code, never a
/// count, so the two formats cannot overlap.
pub fn detect_format(raw: &str) -> InputFormat {
    if raw.trim_start().starts_with('[') {
        return InputFormat::Json;
    }
    let lines: Vec<&str> = non_empty_lines(raw).collect();
    if let [count, clouds] = lines.as_slice() {
        let declared = count.parse::<usize>().ok().filter(|&n| n >= 2);
        if declared == Some(split_tokens(clouds).count()) {
            return InputFormat::Hackerrank;
        }
    }
    InputFormat::List
}

fn decode_json(raw: &str) -> Result<Vec<i64>> {
    serde_json::from_str(raw).context("parse json array of integers")
}

fn decode_list(raw: &str) -> Result<Vec<i64>> {
    split_tokens(raw)
        .enumerate()
        .map(|(position, token)| parse_code(position, token))
        .collect()
}

fn decode_hackerrank(raw: &str) -> Result<Vec<i64>> {
    let mut lines = non_empty_lines(raw);
    let count_line = lines
        .next()
        .ok_or_else(|| anyhow!("missing cloud count line"))?;
    let declared: usize = count_line
        .parse()
        .with_context(|| format!("parse cloud count '{count_line}'"))?;
    let clouds_line = lines.next().unwrap_or("");
    if lines.next().is_some() {
        bail!("expected 2 lines (count, clouds), found more");
    }
    let codes = decode_list(clouds_line)?;
    if codes.len() != declared {
        bail!(
            "cloud count line says {} but {} clouds follow",
            declared,
            codes.len()
        );
    }
    Ok(codes)
}

fn parse_code(position: usize, token: &str) -> Result<i64> {
    token
        .parse()
        .with_context(|| format!("token {position} ('{token}') is not an integer"))
}

fn split_tokens(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
}

fn non_empty_lines(raw: &str) -> impl Iterator<Item = &str> {
    raw.lines().map(str::trim).filter(|line| !line.is_empty())
}
