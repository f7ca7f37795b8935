//! Tool configuration and data-path resolution.
//!
//! All file locations flow from an explicit [`DataPaths`] value handed to
//! the catalog loader and the result store; there is no ambient global
//! state, so tests can inject temp directories.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Name of the config file searched for in the current directory.
pub const CONFIG_FILE: &str = "quizrun.toml";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "QUIZRUN_DATA_DIR";

/// Top-level quizrun configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizrunConfig {
    /// Root directory holding the quiz and results subdirectories.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Subdirectory of `data_dir` holding quiz catalogs.
    #[serde(default = "default_quiz_dir")]
    pub quiz_dir: String,
    /// Subdirectory of `data_dir` holding result records.
    #[serde(default = "default_results_dir")]
    pub results_dir: String,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_quiz_dir() -> String {
    "quiz".to_string()
}
fn default_results_dir() -> String {
    "results".to_string()
}

impl Default for QuizrunConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            quiz_dir: default_quiz_dir(),
            results_dir: default_results_dir(),
        }
    }
}

impl QuizrunConfig {
    /// Resolve this configuration to concrete paths.
    pub fn paths(&self) -> DataPaths {
        DataPaths {
            quiz_dir: self.data_dir.join(&self.quiz_dir),
            results_dir: self.data_dir.join(&self.results_dir),
        }
    }
}

/// Load configuration from the default locations.
///
/// Search order:
/// 1. `quizrun.toml` in the current directory
/// 2. built-in defaults
///
/// The `QUIZRUN_DATA_DIR` environment variable overrides `data_dir` in
/// either case.
pub fn load_config() -> Result<QuizrunConfig, ConfigError> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizrunConfig, ConfigError> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            return Err(ConfigError::NotFound {
                path: p.to_path_buf(),
            });
        }
    } else {
        let local = PathBuf::from(CONFIG_FILE);
        local.exists().then_some(local)
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
                path: path.clone(),
                source,
            })?;
            toml::from_str::<QuizrunConfig>(&content)
                .map_err(|source| ConfigError::Parse { path, source })?
        }
        None => QuizrunConfig::default(),
    };

    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        if !dir.is_empty() {
            config.data_dir = PathBuf::from(dir);
        }
    }

    Ok(config)
}

/// Concrete locations of the quiz and results directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    quiz_dir: PathBuf,
    results_dir: PathBuf,
}

impl DataPaths {
    /// Paths under `data_dir` with the default subdirectory names.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            quiz_dir: data_dir.join(default_quiz_dir()),
            results_dir: data_dir.join(default_results_dir()),
        }
    }

    pub fn quiz_dir(&self) -> &Path {
        &self.quiz_dir
    }

    pub fn results_dir(&self) -> &Path {
        &self.results_dir
    }

    /// Catalog file for a quiz name (no extension).
    pub fn quiz_path(&self, name: &str) -> PathBuf {
        self.quiz_dir.join(format!("{name}.json"))
    }

    /// Result file for an output name (no extension).
    pub fn result_path(&self, name: &str) -> PathBuf {
        self.results_dir.join(format!("{name}.json"))
    }
}
