//! Configuration file loading
//!
//! Every table is optional; missing keys keep their defaults.
//!
//! ```toml
//! [matching]
//! max_distance_km = 15.0
//!
//! [ranking]
//! title_weight = 4.0
//!
//! [telemetry]
//! log_level = "info"
//! ```

use anyhow::{Context, Result};
use foodshare_matching::ScoringPolicy;
use foodshare_search::RankingConfig;
use foodshare_telemetry::TelemetryConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Standard locations, searched in order from the working directory
const CONFIG_CANDIDATES: &[&str] = &[
    ".foodshare-match.toml",
    "foodshare-match.toml",
    ".config/foodshare-match.toml",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub matching: ScoringPolicy,
    pub ranking: RankingConfig,
    pub telemetry: TelemetryConfig,
}

/// Configuration plus the file it came from
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load from an explicit path, else the first standard location, else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path.map(Path::to_path_buf).or_else(find_config_file);

        let app = match &config_path {
            Some(p) => load_config_file(p)?,
            None => AppConfig::default(),
        };
        app.validate()?;

        Ok(Self {
            app,
            path: config_path,
        })
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        self.matching.validate().context("Invalid [matching] table")?;
        self.ranking.validate().context("Invalid [ranking] table")?;
        Ok(())
    }
}

fn find_config_file() -> Option<PathBuf> {
    CONFIG_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|candidate| candidate.exists())
}

fn load_config_file(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}
