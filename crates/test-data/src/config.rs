//! Configuration types for test data generation.

use serde::{Deserialize, Serialize};

use crate::generators::PackageGenConfig;

pub const COUNT_ENV: &str = "GENERATE_COUNT";
pub const SEED_ENV: &str = "GENERATE_SEED";

/// Configuration for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// Number of packages to generate.
    pub count: usize,

    /// RNG seed for reproducible output. A random seed is used when unset.
    pub seed: Option<u64>,

    /// Package shape settings.
    pub packages: PackageGenConfig,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            count: 10,
            seed: None,
            packages: PackageGenConfig::default(),
        }
    }
}

impl GenerateConfig {
    /// Reads `GENERATE_COUNT` and `GENERATE_SEED`, keeping defaults for anything unset.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(std::env::var(COUNT_ENV).ok(), std::env::var(SEED_ENV).ok())
    }

    fn from_vars(count: Option<String>, seed: Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();
        if let Some(count) = count {
            config.count = count.trim().parse()?;
        }
        if let Some(seed) = seed {
            config.seed = Some(seed.trim().parse()?);
        }
        Ok(config)
    }
}
