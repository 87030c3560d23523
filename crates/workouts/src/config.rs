//! Runtime configuration for the `workouts` binary.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

pub const PACKAGES_ENV: &str = "WORKOUTS_PACKAGES";
pub const OUTPUT_ENV: &str = "WORKOUTS_OUTPUT";

/// How summaries are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One formatted message per line.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// JSON file with sensor packages. The demo packages are used when unset.
    pub packages_path: Option<PathBuf>,
    pub output: OutputFormat,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(env::var(PACKAGES_ENV).ok(), env::var(OUTPUT_ENV).ok())
    }

    fn from_vars(packages: Option<String>, output: Option<String>) -> Self {
        let packages_path = packages.filter(|p| !p.is_empty()).map(PathBuf::from);

        let output = output
            .map(|value| {
                value.parse().unwrap_or_else(|e| {
                    warn!("{e}, falling back to text");
                    OutputFormat::Text
                })
            })
            .unwrap_or_default();

        Self {
            packages_path,
            output,
        }
    }
}
