use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub window: WindowConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    /// GSW zero-coupon yield file (feds200628.csv from the Fed site).
    #[serde(default = "default_gsw_path")]
    pub gsw_path: PathBuf,
    /// Non-CSV preamble lines before the GSW header row.
    #[serde(default = "default_gsw_skip_rows")]
    pub gsw_skip_rows: usize,
    /// H.15 selected-interest-rates file.
    #[serde(default = "default_h15_path")]
    pub h15_path: PathBuf,
    /// Non-CSV preamble lines before the H.15 header row.
    #[serde(default = "default_h15_skip_rows")]
    pub h15_skip_rows: usize,
    /// H.15 series column holding the 3-month bill yield.
    pub h15_series_column: Option<String>,
}

fn default_gsw_path() -> PathBuf { PathBuf::from("feds200628.csv") }
fn default_gsw_skip_rows() -> usize { 9 }
fn default_h15_path() -> PathBuf { PathBuf::from("FRB_H15.csv") }
fn default_h15_skip_rows() -> usize { 5 }

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            gsw_path: default_gsw_path(),
            gsw_skip_rows: default_gsw_skip_rows(),
            h15_path: default_h15_path(),
            h15_skip_rows: default_h15_skip_rows(),
            h15_series_column: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct WindowConfig {
    /// Trailing window length for the plotted/computed series.
    #[serde(default = "default_lookback_days")]
    pub lookback_days: i64,
}

fn default_lookback_days() -> i64 { 365 }

impl Default for WindowConfig {
    fn default() -> Self {
        Self { lookback_days: default_lookback_days() }
    }
}

impl Config {
    /// Load config from a TOML file. A missing file is not an error (all
    /// fields have defaults); an unreadable or malformed one is.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| "Failed to parse config TOML")?;
        Ok(config)
    }
}
