//! Session scoring and per-category aggregation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Correct/total counters for one category label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStats {
    pub correct: u32,
    pub total: u32,
}

impl CategoryStats {
    /// Fraction correct as a percentage; 0.0 when nothing was asked.
    pub fn percentage(&self) -> f64 {
        percentage(self.correct, self.total)
    }
}

/// The outcome of one quiz session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionResult {
    /// Count of correct responses.
    pub score: u32,
    /// Count of questions presented.
    pub total: u32,
    /// Per-category breakdown. Questions without a category are scored in
    /// `score`/`total` but never appear here; buckets come into existence on
    /// the first question of their category.
    #[serde(default)]
    pub category_stats: HashMap<String, CategoryStats>,
}

impl SessionResult {
    /// Record one answered question. Called exactly once per question a
    /// session presents.
    pub fn record(&mut self, category: Option<&str>, correct: bool) {
        self.total += 1;
        if correct {
            self.score += 1;
        }
        if let Some(category) = category {
            let stats = self.category_stats.entry(category.to_string()).or_default();
            stats.total += 1;
            if correct {
                stats.correct += 1;
            }
        }
    }

    /// Overall percentage; 0.0 for an empty session.
    pub fn percentage(&self) -> f64 {
        percentage(self.score, self.total)
    }
}

pub(crate) fn percentage(correct: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        f64::from(correct) / f64::from(total) * 100.0
    }
}
