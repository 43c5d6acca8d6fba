//! The `quizrun convert` command.
//!
//! Parses a flat-text bank with the same scanner `play` uses and writes the
//! questions back out in the structured JSON shape.

use std::path::PathBuf;

use anyhow::{Context, Result};

pub fn execute(input: PathBuf, output: PathBuf) -> Result<()> {
    let content = std::fs::read_to_string(&input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let loaded = quizrun_core::loader::parse_flat_str(&content);

    for w in &loaded.warnings {
        let prefix = w
            .index
            .map(|i| format!("  [#{i}]"))
            .unwrap_or_else(|| "  ".to_string());
        eprintln!("{prefix} WARNING: {}", w.message);
    }

    let json = serde_json::to_string_pretty(&loaded.questions)
        .context("failed to serialize questions")?;
    std::fs::write(&output, json)
        .with_context(|| format!("failed to write {}", output.display()))?;

    println!(
        "Converted {} questions to {}",
        loaded.questions.len(),
        output.display()
    );
    Ok(())
}
