//! The `quizrun validate` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(bank: PathBuf) -> Result<()> {
    let loaded = quizrun_core::loader::load_bank(&bank)?;

    println!(
        "Bank: {} ({} questions)",
        bank.display(),
        loaded.questions.len()
    );

    for w in &loaded.warnings {
        let prefix = w
            .index
            .map(|i| format!("  [#{i}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if loaded.warnings.is_empty() {
        println!("Bank is valid.");
    } else {
        println!("\n{} warning(s) found.", loaded.warnings.len());
    }

    Ok(())
}
