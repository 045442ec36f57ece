use crate::alert::WatchConfig;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse YAML in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("'window_minutes' must be a positive integer, got {minutes}")]
    InvalidWindow { minutes: i64 },

    #[error("alert rule {index} has an empty name")]
    EmptyRuleName { index: usize },

    #[error("alert '{name}' has a non-finite threshold")]
    InvalidThreshold { name: String },
}

impl WatchConfig {
    /// Load and semantically validate a watch config.
    ///
    /// Expected shape:
    ///
    /// ```yaml
    /// window_minutes: 60
    /// alerts:
    ///   - name: high_error_rate
    ///     type: error_rate
    ///     threshold: 0.5
    /// ```
    ///
    /// Unrecognized rule `type` strings load as [`RuleKind::Unknown`] and
    /// survive to the evaluator, which skips them.
    ///
    /// [`RuleKind::Unknown`]: crate::alert::RuleKind::Unknown
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

        let config: WatchConfig =
            serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_minutes <= 0 {
            return Err(ConfigError::InvalidWindow {
                minutes: self.window_minutes,
            });
        }

        for (index, rule) in self.rules.iter().enumerate() {
            if rule.name.trim().is_empty() {
                return Err(ConfigError::EmptyRuleName { index });
            }
            if !rule.threshold.is_finite() {
                return Err(ConfigError::InvalidThreshold {
                    name: rule.name.clone(),
                });
            }
        }

        Ok(())
    }
}
