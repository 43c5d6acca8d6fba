//! The `quizrun history` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use crate::config::load_config_from;

pub fn execute(
    file: Option<PathBuf>,
    limit: Option<usize>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let path = file.unwrap_or(config.history);

    let loaded = quizrun_history::load(&path)?;
    if loaded.recovered {
        eprintln!(
            "Warning: history at {} is unreadable and was ignored.",
            path.display()
        );
    }
    if loaded.entries.is_empty() {
        println!("No recorded sessions at {}", path.display());
        return Ok(());
    }

    let start = limit
        .map(|l| loaded.entries.len().saturating_sub(l))
        .unwrap_or(0);

    let mut table = Table::new();
    table.set_header(vec!["When", "Score", "Rate"]);
    for entry in &loaded.entries[start..] {
        table.add_row(vec![
            Cell::new(entry.timestamp.format("%Y-%m-%d %H:%M")),
            Cell::new(format!("{}/{}", entry.score, entry.total)),
            Cell::new(format!("{:.1}%", entry.percentage())),
        ]);
    }
    println!("{table}");

    let totals = quizrun_history::aggregate(&loaded.entries);
    println!(
        "\n{} session(s), {}/{} lifetime ({:.1}%)",
        totals.sessions,
        totals.score,
        totals.total,
        totals.percentage()
    );

    if !totals.per_category.is_empty() {
        let mut table = Table::new();
        table.set_header(vec!["Category", "Correct", "Asked", "Rate"]);
        let mut categories: Vec<_> = totals.per_category.iter().collect();
        categories.sort_by(|a, b| a.0.cmp(b.0));
        for (category, stats) in categories {
            table.add_row(vec![
                Cell::new(category),
                Cell::new(stats.correct),
                Cell::new(stats.total),
                Cell::new(format!("{:.1}%", stats.percentage())),
            ]);
        }
        println!("\n{table}");
    }

    Ok(())
}
