//! CLI configuration file loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level quizrun configuration. Every field has a default, so a missing
/// config file behaves exactly like an empty one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizrunConfig {
    /// Question bank used when `--bank` is not given.
    #[serde(default = "default_bank")]
    pub bank: PathBuf,
    /// Score history file used when `--history` is not given.
    #[serde(default = "default_history")]
    pub history: PathBuf,
    /// Question count used when `--num` is not given; prompted interactively
    /// when unset.
    #[serde(default)]
    pub default_count: Option<usize>,
}

fn default_bank() -> PathBuf {
    PathBuf::from("questions.txt")
}

fn default_history() -> PathBuf {
    PathBuf::from("scores.json")
}

impl Default for QuizrunConfig {
    fn default() -> Self {
        Self {
            bank: default_bank(),
            history: default_history(),
            default_count: None,
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `quizrun.toml` in the current directory
/// 2. `~/.config/quizrun/config.toml`
pub fn load_config_from(path: Option<&Path>) -> Result<QuizrunConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizrun.toml");
        if local.exists() {
            Some(local)
        } else if let Some(dir) = config_dir() {
            let global = dir.join("config.toml");
            global.exists().then_some(global)
        } else {
            None
        }
    };

    match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))
        }
        None => Ok(QuizrunConfig::default()),
    }
}

fn config_dir() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizrun"))
}
