//! Question bank loaders.
//!
//! Two input shapes produce the same validated `Question` records: a
//! structured JSON array (rich or minimal record shapes) and the legacy
//! line-oriented flat-file grammar. Structured problems fail the whole load;
//! a malformed flat-file block is skipped with a warning.

use std::path::Path;

use serde::Deserialize;

use crate::error::LoadError;
use crate::model::{AnswerLetter, Question, OPTION_COUNT};

/// A non-fatal problem found while loading a bank.
#[derive(Debug, Clone)]
pub struct LoadWarning {
    /// 1-based record or block number the warning refers to, if known.
    pub index: Option<usize>,
    /// Warning message.
    pub message: String,
}

/// A successfully loaded bank plus any non-fatal warnings.
#[derive(Debug, Clone, Default)]
pub struct LoadedBank {
    pub questions: Vec<Question>,
    pub warnings: Vec<LoadWarning>,
}

/// Load a bank from disk.
///
/// Dispatches on the file extension: `.json` files use the structured shape,
/// anything else the flat-file grammar.
pub fn load_bank(path: &Path) -> Result<LoadedBank, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if path.extension().is_some_and(|ext| ext == "json") {
        parse_structured_str(&content, path)
    } else {
        Ok(parse_flat_str(&content))
    }
}

// ---------------------------------------------------------------------------
// Structured JSON shape
// ---------------------------------------------------------------------------

/// Intermediate serde shapes for structured records.
///
/// `Rich` is the category-tracking export with one field per option letter;
/// `Minimal` is the `question`/`options`/`answer` triple, which is also the
/// serde shape of `Question` itself (and what `quizrun convert` writes).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawRecord {
    Rich {
        question: String,
        option_a: String,
        option_b: String,
        option_c: String,
        option_d: String,
        answer: String,
        explanation: String,
        domain: String,
        #[serde(default)]
        answer_text: Option<String>,
    },
    Minimal {
        question: String,
        options: Vec<String>,
        answer: String,
        #[serde(default)]
        answer_text: Option<String>,
        #[serde(default)]
        category: Option<String>,
        #[serde(default)]
        explanation: Option<String>,
    },
}

/// Parse the structured JSON shape (useful directly in tests).
pub fn parse_structured_str(content: &str, path: &Path) -> Result<LoadedBank, LoadError> {
    let records: Vec<RawRecord> =
        serde_json::from_str(content).map_err(|e| LoadError::WrongShape {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?;

    let mut questions = Vec::with_capacity(records.len());
    let mut warnings = Vec::new();

    for (i, record) in records.into_iter().enumerate() {
        let index = i + 1;
        let (text, options, answer, answer_text, category, explanation) = match record {
            RawRecord::Rich {
                question,
                option_a,
                option_b,
                option_c,
                option_d,
                answer,
                explanation,
                domain,
                answer_text,
            } => (
                question,
                vec![option_a, option_b, option_c, option_d],
                answer,
                answer_text,
                Some(domain),
                Some(explanation),
            ),
            RawRecord::Minimal {
                question,
                options,
                answer,
                answer_text,
                category,
                explanation,
            } => (question, options, answer, answer_text, category, explanation),
        };

        if text.trim().is_empty() {
            return Err(LoadError::EmptyField {
                index,
                field: "question",
            });
        }
        if options.len() != OPTION_COUNT {
            return Err(LoadError::WrongOptionCount {
                index,
                found: options.len(),
            });
        }
        if options.iter().any(|o| o.trim().is_empty()) {
            return Err(LoadError::EmptyField {
                index,
                field: "options",
            });
        }

        let Some(letter) = resolve_answer(&answer, &options) else {
            return Err(LoadError::InvalidAnswer { index, answer });
        };

        let question = Question {
            text,
            options,
            answer: letter,
            category: non_empty(category),
            explanation: non_empty(explanation),
        };

        // The letter stays authoritative on a mismatch; the record is kept.
        if let Some(expected) = answer_text {
            if expected.trim() != question.answer_text() {
                warnings.push(LoadWarning {
                    index: Some(index),
                    message: format!(
                        "answer_text {:?} does not match option {} ({:?})",
                        expected,
                        question.answer,
                        question.answer_text()
                    ),
                });
            }
        }

        questions.push(question);
    }

    Ok(LoadedBank {
        questions,
        warnings,
    })
}

/// Resolve an answer value: either a letter in A-D or the literal text of
/// one of the options. There is no fallback letter; anything else is
/// invalid.
fn resolve_answer(answer: &str, options: &[String]) -> Option<AnswerLetter> {
    if let Ok(letter) = answer.parse::<AnswerLetter>() {
        return Some(letter);
    }
    options
        .iter()
        .position(|o| o.trim() == answer.trim())
        .and_then(AnswerLetter::from_index)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let v = v.trim();
        if v.is_empty() {
            None
        } else {
            Some(v.to_string())
        }
    })
}

// ---------------------------------------------------------------------------
// Flat-file grammar
// ---------------------------------------------------------------------------

const OPTION_PREFIXES: [&str; OPTION_COUNT] = ["A)", "B)", "C)", "D)"];

/// Scanner states for the flat-file grammar.
enum ScanState {
    SeekingQuestion,
    CollectingOptions,
    SeekingAnswer,
}

#[derive(Default)]
struct FlatBlock {
    text: String,
    options: Vec<String>,
}

/// Parse the line-oriented flat-file grammar.
///
/// Blank lines are ignored and every line is trimmed. A block is a
/// `Question …` line (text after the first `:`), 1-4 option lines prefixed
/// `A)`-`D)`, and an `Answer: <letter>` line. Blocks that do not match the
/// shape, carry fewer than four options, or name an answer outside A-D are
/// skipped with a warning; they never abort the load.
pub fn parse_flat_str(content: &str) -> LoadedBank {
    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut questions = Vec::new();
    let mut warnings = Vec::new();
    let mut state = ScanState::SeekingQuestion;
    let mut block = FlatBlock::default();
    let mut block_number = 0usize;

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        match state {
            ScanState::SeekingQuestion => {
                if line.starts_with("Question ") {
                    block_number += 1;
                    let text = match line.split_once(':') {
                        Some((_, rest)) => rest.trim().to_string(),
                        None => line.to_string(),
                    };
                    block = FlatBlock {
                        text,
                        options: Vec::new(),
                    };
                    state = ScanState::CollectingOptions;
                }
                i += 1;
            }
            ScanState::CollectingOptions => {
                if let Some(option) = strip_option_prefix(line) {
                    block.options.push(option.to_string());
                    if block.options.len() == OPTION_COUNT {
                        state = ScanState::SeekingAnswer;
                    }
                    i += 1;
                } else if let Some(answer) = line.strip_prefix("Answer:") {
                    finish_block(answer, &mut block, block_number, &mut questions, &mut warnings);
                    state = ScanState::SeekingQuestion;
                    i += 1;
                } else {
                    skip_block(
                        &mut warnings,
                        block_number,
                        "no Answer: line after the options".into(),
                    );
                    state = ScanState::SeekingQuestion;
                    // re-examine this line: it may begin the next block
                }
            }
            ScanState::SeekingAnswer => {
                if let Some(answer) = line.strip_prefix("Answer:") {
                    finish_block(answer, &mut block, block_number, &mut questions, &mut warnings);
                    state = ScanState::SeekingQuestion;
                    i += 1;
                } else {
                    skip_block(
                        &mut warnings,
                        block_number,
                        "no Answer: line after the options".into(),
                    );
                    state = ScanState::SeekingQuestion;
                }
            }
        }
    }

    if !matches!(state, ScanState::SeekingQuestion) {
        skip_block(
            &mut warnings,
            block_number,
            "input ended before an Answer: line".into(),
        );
    }

    LoadedBank {
        questions,
        warnings,
    }
}

fn strip_option_prefix(line: &str) -> Option<&str> {
    OPTION_PREFIXES
        .iter()
        .find_map(|prefix| line.strip_prefix(prefix))
        .map(str::trim)
}

fn finish_block(
    answer: &str,
    block: &mut FlatBlock,
    number: usize,
    questions: &mut Vec<Question>,
    warnings: &mut Vec<LoadWarning>,
) {
    let block = std::mem::take(block);

    if block.text.is_empty() {
        skip_block(warnings, number, "question text is empty".into());
        return;
    }
    if block.options.len() != OPTION_COUNT {
        skip_block(
            warnings,
            number,
            format!("expected 4 options, found {}", block.options.len()),
        );
        return;
    }
    match answer.trim().parse::<AnswerLetter>() {
        Ok(letter) => questions.push(Question {
            text: block.text,
            options: block.options,
            answer: letter,
            category: None,
            explanation: None,
        }),
        Err(_) => skip_block(
            warnings,
            number,
            format!("answer {:?} is not one of A-D", answer.trim()),
        ),
    }
}

fn skip_block(warnings: &mut Vec<LoadWarning>, number: usize, message: String) {
    tracing::warn!("skipping block {number}: {message}");
    warnings.push(LoadWarning {
        index: Some(number),
        message,
    });
}
