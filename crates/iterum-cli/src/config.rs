//! Configuration file loading.

use std::path::{Path, PathBuf};

use iterum_math::solvers::SolverConfig;
use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "iterum.toml";

/// CLI configuration.
///
/// ```toml
/// format = "json"
///
/// [solver]
/// tolerance = 1e-8
/// max_iterations = 50
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Defaults for every `solve` run
    #[serde(default)]
    pub solver: SolverConfig,

    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,
}

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|reason| CliError::Config {
            path: path.to_path_buf(),
            reason,
        })
    }

    fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Loads `explicit` if given, else `iterum.toml` if it exists, else defaults.
    pub fn load(explicit: Option<&Path>) -> CliResult<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !fallback.is_file() {
                    return Ok(Self::default());
                }
                fallback
            }
        };

        tracing::debug!("loading configuration from {}", path.display());
        Self::from_file(&path)
    }
}
