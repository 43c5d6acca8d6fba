//! History log persistence and lifetime aggregation.

use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use quizrun_core::statistics::{CategoryStats, SessionResult};

/// One persisted record per completed session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Wall-clock time the session finished.
    pub timestamp: DateTime<Utc>,
    /// Correct responses.
    pub score: u32,
    /// Questions presented.
    pub total: u32,
    /// Per-category breakdown; absent in logs written before category
    /// tracking existed.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub category_stats: HashMap<String, CategoryStats>,
}

impl HistoryEntry {
    /// Entry for a session result, stamped with the current wall clock.
    pub fn from_result(result: &SessionResult) -> Self {
        Self {
            timestamp: Utc::now(),
            score: result.score,
            total: result.total,
            category_stats: result.category_stats.clone(),
        }
    }

    /// Session percentage; 0.0 for an empty session.
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            f64::from(self.score) / f64::from(self.total) * 100.0
        }
    }
}

/// Errors from reading or writing the history file.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("failed to read history file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write history file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize history: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The entries read back from disk, plus whether a corrupt log was
/// discarded on the way.
#[derive(Debug, Clone, Default)]
pub struct LoadedHistory {
    pub entries: Vec<HistoryEntry>,
    /// True when the file existed but did not parse as an entry array.
    pub recovered: bool,
}

/// Read the history log.
///
/// A missing file is an empty history. A file that exists but is not a JSON
/// array of entries is discarded with a warning rather than aborting; the
/// append that follows must still succeed.
pub fn load(path: &Path) -> Result<LoadedHistory, HistoryError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(LoadedHistory::default())
        }
        Err(source) => {
            return Err(HistoryError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    match serde_json::from_str::<Vec<HistoryEntry>>(&content) {
        Ok(entries) => Ok(LoadedHistory {
            entries,
            recovered: false,
        }),
        Err(e) => {
            tracing::warn!(
                "history file {} is corrupt ({e}); starting a fresh log",
                path.display()
            );
            Ok(LoadedHistory {
                entries: Vec::new(),
                recovered: true,
            })
        }
    }
}

/// Receipt for a successful append.
#[derive(Debug, Clone, Copy)]
pub struct AppendOutcome {
    /// Entries in the log after the append.
    pub entries: usize,
    /// True when a corrupt pre-existing log was discarded first.
    pub recovered: bool,
}

/// Append one entry and rewrite the log in place.
///
/// The rewrite goes through a temp file in the destination directory
/// followed by an atomic rename, so an interrupted process leaves either
/// the old log or the new one, never a half-written file.
pub fn append(path: &Path, entry: HistoryEntry) -> Result<AppendOutcome, HistoryError> {
    let LoadedHistory {
        mut entries,
        recovered,
    } = load(path)?;
    entries.push(entry);

    let json = serde_json::to_string_pretty(&entries)?;

    let write_err = |source: std::io::Error| HistoryError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&dir).map_err(write_err)?;

    let mut tmp = tempfile::NamedTempFile::new_in(&dir).map_err(write_err)?;
    tmp.write_all(json.as_bytes()).map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    Ok(AppendOutcome {
        entries: entries.len(),
        recovered,
    })
}

/// Lifetime totals across the whole log.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryTotals {
    pub sessions: usize,
    pub score: u32,
    pub total: u32,
    pub per_category: HashMap<String, CategoryStats>,
}

impl HistoryTotals {
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            f64::from(self.score) / f64::from(self.total) * 100.0
        }
    }
}

/// Fold every entry into lifetime totals.
pub fn aggregate(entries: &[HistoryEntry]) -> HistoryTotals {
    let mut totals = HistoryTotals {
        sessions: entries.len(),
        ..Default::default()
    };
    for entry in entries {
        totals.score += entry.score;
        totals.total += entry.total;
        for (category, stats) in &entry.category_stats {
            let bucket = totals.per_category.entry(category.clone()).or_default();
            bucket.correct += stats.correct;
            bucket.total += stats.total;
        }
    }
    totals
}
