//! Subcommand implementations.

use std::path::PathBuf;

use anyhow::Result;

use quizrun_core::config::{self, DataPaths};

pub mod init;
pub mod migrate;
pub mod run;
pub mod validate;

/// Resolve data paths from the configuration, with the CLI flag taking
/// precedence over `quizrun.toml` and the environment.
pub(crate) fn resolve_paths(data_dir: Option<PathBuf>) -> Result<DataPaths> {
    let mut config = config::load_config()?;
    if let Some(dir) = data_dir {
        config.data_dir = dir;
    }
    Ok(config.paths())
}
