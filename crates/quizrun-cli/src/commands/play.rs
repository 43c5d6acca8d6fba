//! The `quizrun play` command.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use quizrun_core::loader::{self, LoadWarning};
use quizrun_core::model::{AnswerLetter, Question};
use quizrun_core::session::{PresentedQuestion, QuizEngine, MAX_SESSION_QUESTIONS};
use quizrun_core::statistics::SessionResult;
use quizrun_core::traits::{AnswerSource, SessionObserver};
use quizrun_history::HistoryEntry;

use crate::config::load_config_from;

/// Prints questions and feedback to the terminal.
struct ConsolePresenter;

impl SessionObserver for ConsolePresenter {
    fn on_question(&mut self, question: &PresentedQuestion) {
        println!(
            "\nQuestion {}/{}: {}",
            question.number, question.total, question.text
        );
        for (i, option) in question.options.iter().enumerate() {
            if let Some(letter) = AnswerLetter::from_index(i) {
                println!("{letter}) {option}");
            }
        }
    }

    fn on_answer(
        &mut self,
        presented: &PresentedQuestion,
        question: &Question,
        _chosen: AnswerLetter,
        correct: bool,
    ) {
        if correct {
            println!("Correct!");
        } else {
            println!(
                "Incorrect. Correct answer: {}) {}",
                presented.correct,
                question.answer_text()
            );
            if let Some(explanation) = &question.explanation {
                println!("{explanation}");
            }
        }
    }

    fn on_complete(&mut self, result: &SessionResult) {
        println!(
            "\nScore: {}/{} ({:.1}%)",
            result.score,
            result.total,
            result.percentage()
        );
    }
}

/// Reads answers from stdin, re-prompting until a letter in A-D arrives.
struct StdinAnswerSource;

impl AnswerSource for StdinAnswerSource {
    fn next_answer(&mut self, _question: &PresentedQuestion) -> Result<AnswerLetter> {
        let stdin = std::io::stdin();
        loop {
            print!("Your answer (A/B/C/D): ");
            std::io::stdout().flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                anyhow::bail!("stdin closed before an answer was given");
            }
            match line.trim().parse::<AnswerLetter>() {
                Ok(letter) => return Ok(letter),
                Err(_) => println!("Please answer with one of A, B, C or D."),
            }
        }
    }
}

pub fn execute(
    bank: Option<PathBuf>,
    num: Option<usize>,
    category: Option<String>,
    history: Option<PathBuf>,
    seed: Option<u64>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let bank_path = bank.unwrap_or(config.bank);
    let history_path = history.unwrap_or(config.history);

    let loaded = loader::load_bank(&bank_path)?;
    print_warnings(&loaded.warnings);

    let mut questions = loaded.questions;
    if let Some(category) = &category {
        questions.retain(|q| q.category.as_deref() == Some(category.as_str()));
    }
    anyhow::ensure!(
        !questions.is_empty(),
        "no questions loaded from {}",
        bank_path.display()
    );

    let max = questions.len().min(MAX_SESSION_QUESTIONS);
    let requested = match num.or(config.default_count) {
        Some(n) => {
            anyhow::ensure!(n >= 1, "--num must be at least 1");
            n.min(max)
        }
        None => prompt_for_count(max)?,
    };

    let mut engine = match seed {
        Some(seed) => QuizEngine::seeded(seed),
        None => QuizEngine::from_entropy(),
    };

    let mut source = StdinAnswerSource;
    let mut presenter = ConsolePresenter;
    let result = engine.run(&questions, requested, &mut source, &mut presenter)?;

    print_breakdown(&result);

    // The score is already on screen; a failed save must not take it back.
    let outcome = quizrun_history::append(&history_path, HistoryEntry::from_result(&result))
        .with_context(|| format!("failed to save score to {}", history_path.display()))?;
    if outcome.recovered {
        eprintln!(
            "Warning: existing history at {} was unreadable and has been replaced.",
            history_path.display()
        );
    }
    println!("Score saved to {}", history_path.display());

    Ok(())
}

fn print_warnings(warnings: &[LoadWarning]) {
    for w in warnings {
        let prefix = w
            .index
            .map(|i| format!("  [#{i}]"))
            .unwrap_or_else(|| "  ".to_string());
        eprintln!("{prefix} WARNING: {}", w.message);
    }
}

/// Interactive count prompt, bounded by the bank size and session cap.
fn prompt_for_count(max: usize) -> Result<usize> {
    let stdin = std::io::stdin();
    loop {
        print!("How many questions? (1-{max}): ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            anyhow::bail!("stdin closed before a question count was given");
        }
        match line.trim().parse::<usize>() {
            Ok(n) if (1..=max).contains(&n) => return Ok(n),
            Ok(_) => println!("Please enter a number between 1 and {max}."),
            Err(_) => println!("Please enter a valid integer."),
        }
    }
}

fn print_breakdown(result: &SessionResult) {
    if result.category_stats.is_empty() {
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["Category", "Correct", "Asked", "Rate"]);

    let mut categories: Vec<_> = result.category_stats.iter().collect();
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
