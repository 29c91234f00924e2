//! Configuration management

use crate::error::{LinkRankError, Result};
use crate::graph::EdgePolicy;
use crate::rank::DeadEndPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Random-walk settings
    #[serde(default)]
    pub walk: WalkConfig,

    /// Distribution-propagation settings
    #[serde(default)]
    pub distribution: DistributionConfig,

    /// Dead-end handling shared by both estimators
    #[serde(default)]
    pub dead_end: DeadEndPolicy,

    /// Handling of repeated edges in the input
    #[serde(default)]
    pub edge_policy: EdgePolicy,

    /// Use the rayon thread pool
    #[serde(default = "default_parallel")]
    pub parallel: bool,

    /// Number of top pages to show
    #[serde(default = "default_top")]
    pub top: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            walk: WalkConfig::default(),
            distribution: DistributionConfig::default(),
            dead_end: DeadEndPolicy::default(),
            edge_policy: EdgePolicy::default(),
            parallel: default_parallel(),
            top: default_top(),
        }
    }
}

/// Random-walk configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalkConfig {
    /// Fixed number of walks (defaults to the square of the node count)
    #[serde(default)]
    pub walks: Option<u64>,

    /// Steps per walk as a multiple of the graph diameter
    #[serde(default = "default_multiplier")]
    pub steps_per_diameter: usize,

    /// RNG seed
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            walks: None,
            steps_per_diameter: default_multiplier(),
            seed: default_seed(),
        }
    }
}

/// Distribution-propagation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionConfig {
    /// Iterations as a multiple of the graph diameter
    #[serde(default = "default_multiplier")]
    pub iterations_per_diameter: usize,
}

impl Default for DistributionConfig {
    fn default() -> Self {
        Self {
            iterations_per_diameter: default_multiplier(),
        }
    }
}

fn default_parallel() -> bool {
    true
}

fn default_top() -> usize {
    20
}

fn default_multiplier() -> usize {
    2
}

fn default_seed() -> u64 {
    crate::DEFAULT_SEED
}

impl Config {
    /// Load config from default path
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Config::default().with_env_overrides()
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded configuration from {}", path.display());
        config.with_env_overrides()
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::CONFIG_DIR_NAME)
            .join("config.yml")
    }

    /// Apply `LINKRANK_SEED` and `LINKRANK_DEAD_END` on top of file values
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Ok(seed) = std::env::var("LINKRANK_SEED") {
            self.walk.seed = seed
                .trim()
                .parse()
                .map_err(|_| LinkRankError::Config(format!("LINKRANK_SEED is not a u64: {seed}")))?;
        }
        if let Ok(policy) = std::env::var("LINKRANK_DEAD_END") {
            self.dead_end = policy
                .parse()
                .map_err(|e: LinkRankError| LinkRankError::Config(e.to_string()))?;
        }
        Ok(self)
    }

    /// Walk count for a graph with `nodes` nodes
    pub fn walks_for(&self, nodes: usize) -> u64 {
        self.walk
            .walks
            .unwrap_or_else(|| (nodes as u64).saturating_pow(2))
            .max(1)
    }

    /// Steps per walk for a graph of the given diameter
    pub fn steps_for(&self, diameter: usize) -> usize {
        (self.walk.steps_per_diameter * diameter).max(1)
    }

    /// Iteration count for a graph of the given diameter
    pub fn iterations_for(&self, diameter: usize) -> usize {
        (self.distribution.iterations_per_diameter * diameter).max(1)
    }
}
