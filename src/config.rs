use std::path::Path;

use crate::engine::{Difficulty, SearchSpec};
use crate::error::ConfigError;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub pool: PoolConfig,
}

/// Per-difficulty search bindings. Defaults follow the canonical mapping;
/// overriding `algorithm` is how minimax is selected.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub easy: SearchSpec,
    pub medium: SearchSpec,
    pub hard: SearchSpec,
    pub expert: SearchSpec,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            easy: Difficulty::Easy.default_spec(),
            medium: Difficulty::Medium.default_spec(),
            hard: Difficulty::Hard.default_spec(),
            expert: Difficulty::Expert.default_spec(),
        }
    }
}

impl SearchConfig {
    pub fn spec_for(&self, difficulty: Difficulty) -> SearchSpec {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
            Difficulty::Expert => self.expert,
        }
    }
}

/// Worker pool sizing and reproducibility knobs.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Number of worker threads; 0 sizes the pool to the host's available
    /// parallelism at startup. Not resizable at runtime.
    pub workers: usize,
    /// Capacity of the shared job queue; `submit` blocks when it is full.
    pub queue_capacity: usize,
    /// Seed for the workers' move-selection RNG. Set it to make search
    /// outcomes reproducible; unset draws from OS entropy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for PoolConfig {
    fn default() -> Self {
        PoolConfig {
            workers: 0,
            queue_capacity: 64,
            seed: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for difficulty in Difficulty::ALL {
            if self.search.spec_for(difficulty).depth == 0 {
                return Err(ConfigError::Validation(format!(
                    "search.{}.depth must be >= 1",
                    difficulty.name()
                )));
            }
        }

        // Depths must not decrease as difficulty rises
        let depths: Vec<u32> = Difficulty::ALL
            .iter()
            .map(|&d| self.search.spec_for(d).depth)
            .collect();
        if !depths.windows(2).all(|w| w[0] <= w[1]) {
            return Err(ConfigError::Validation(
                "search depths must increase monotonically with difficulty".into(),
            ));
        }

        if self.pool.queue_capacity == 0 {
            return Err(ConfigError::Validation(
                "pool.queue_capacity must be > 0".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
