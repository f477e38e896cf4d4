//! Solver configuration stored in `cloudhop.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::io::input::InputFormat;

/// Default config file name, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "cloudhop.toml";

/// Cloudhop configuration (TOML).
///
/// Missing fields default to the values below, so an empty file is valid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct CloudhopConfig {
    pub limits: LimitsConfig,
    pub input: InputConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LimitsConfig {
    /// Reject sequences longer than this many clouds.
    pub max_clouds: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_clouds: 100_000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct InputConfig {
    /// Text format used when `--format` is not given.
    pub format: InputFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
    /// Container port the deployment maps to the load balancer target group.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl CloudhopConfig {
    pub fn validate(&self) -> Result<()> {
        if self.limits.max_clouds == 0 {
            return Err(anyhow!("limits.max_clouds must be > 0"));
        }
        if self.server.bind.trim().is_empty() {
            return Err(anyhow!("server.bind must be non-empty"));
        }
        if self.server.port == 0 {
            return Err(anyhow!("server.port must be > 0"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `CloudhopConfig::default()`.
pub fn load_config(path: &Path) -> Result<CloudhopConfig> {
    if !path.exists() {
        let cfg = CloudhopConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: CloudhopConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &CloudhopConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestDir;

    #[test]
    fn load_missing_returns_default() {
        let dir = TestDir::new().expect("tempdir");
        let cfg = load_config(&dir.root().join("missing.toml")).expect("load");
        assert_eq!(cfg, CloudhopConfig::default());
        assert_eq!(cfg.server.port, 3000);
    }

    #[test]
    fn write_then_load_round_trips() {
        let dir = TestDir::new().expect("tempdir");
        let path = dir.root().join("nested").join("cloudhop.toml");
        let mut cfg = CloudhopConfig::default();
        cfg.input.format = InputFormat::Hackerrank;
        cfg.limits.max_clouds = 42;
        write_config(&path, &cfg).expect("write");
        let loaded = load_config(&path).expect("load");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = TestDir::new().expect("tempdir");
        let path = dir
            .write("cloudhop.toml", "[server]\nport = 8080\n")
            .expect("write");
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.server.bind, "0.0.0.0");
        assert_eq!(cfg.limits, LimitsConfig::default());
        assert_eq!(cfg.input.format, InputFormat::Auto);
    }

    #[test]
    fn zero_limit_is_rejected() {
        let dir = TestDir::new().expect("tempdir");
        let path = dir
            .write("cloudhop.toml", "[limits]\nmax_clouds = 0\n")
            .expect("write");
        let err = load_config(&path).expect_err("should fail");
        assert!(format!("{err:#}").contains("limits.max_clouds must be > 0"));
    }

    #[test]
    fn unknown_format_is_a_parse_error() {
        let dir = TestDir::new().expect("tempdir");
        let path = dir
            .write("cloudhop.toml", "[input]\nformat = \"yaml\"\n")
            .expect("write");
        let err = load_config(&path).expect_err("should fail");
        assert!(err.to_string().starts_with("parse "));
    }
}
