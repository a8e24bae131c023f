//! Engine configuration, loadable from TOML.
//!
//! ```toml
//! [depth]
//! kind = "adaptive"
//! thresholds = [30, 38, 44, 50]
//! ```
//!
//! or a fixed depth for analysis and tests:
//!
//! ```toml
//! [depth]
//! kind = "fixed"
//! depth = 2
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors from loading or validating an [`EngineConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {reason}")]
    Invalid { reason: String },
}

/// How deep to search, as a function of how far the game has progressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DepthPolicy {
    /// Depth 1 up to and including `thresholds[0]` moves played, then one
    /// ply deeper past each further threshold, up to depth 5.
    Adaptive { thresholds: [u32; 4] },
    /// Same depth for every move.
    Fixed { depth: u8 },
}

impl Default for DepthPolicy {
    fn default() -> Self {
        DepthPolicy::Adaptive {
            thresholds: [30, 38, 44, 50],
        }
    }
}

impl DepthPolicy {
    /// Search depth for a board on which `num_moves` moves have been played.
    ///
    /// With the default thresholds: 1 for 0..=30, 2 for 31..=38, 3 for
    /// 39..=44, 4 for 45..=50 and 5 beyond.
    pub fn depth_for(&self, num_moves: usize) -> u8 {
        match *self {
            DepthPolicy::Fixed { depth } => depth,
            DepthPolicy::Adaptive { thresholds } => {
                let passed = thresholds
                    .iter()
                    .filter(|&&t| num_moves > t as usize)
                    .count();
                1 + passed as u8
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            DepthPolicy::Fixed { depth: 0 } => Err(ConfigError::Invalid {
                reason: "fixed depth must be at least 1".to_string(),
            }),
            DepthPolicy::Fixed { .. } => Ok(()),
            DepthPolicy::Adaptive { thresholds } => {
                if thresholds.windows(2).all(|w| w[0] < w[1]) {
                    Ok(())
                } else {
                    Err(ConfigError::Invalid {
                        reason: format!(
                            "depth thresholds must be strictly increasing, got {thresholds:?}"
                        ),
                    })
                }
            }
        }
    }
}

/// Configuration for [`crate::MinimaxEngine`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub depth: DepthPolicy,
}

impl EngineConfig {
    /// Config that always searches `depth` plies.
    pub fn fixed_depth(depth: u8) -> Self {
        Self {
            depth: DepthPolicy::Fixed { depth },
        }
    }

    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Serialize back to TOML
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.depth.validate()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
