//! Bank load error types.
//!
//! A `LoadError` aborts the whole load. Non-fatal problems (an answer-text
//! mismatch, a skipped flat-file block) are collected as
//! `loader::LoadWarning` values instead, so callers can tell the two apart
//! without string matching.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a bank load. Record indices in messages are 1-based.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The bank file could not be read at all.
    #[error("failed to read bank file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The structured input is not a JSON array of question records.
    #[error("bank file {} is not an array of question records: {detail}", path.display())]
    WrongShape { path: PathBuf, detail: String },

    /// A structured record has an empty required field.
    #[error("question #{index}: field `{field}` is empty")]
    EmptyField { index: usize, field: &'static str },

    /// A structured record does not carry exactly four options.
    #[error("question #{index}: expected 4 options, found {found}")]
    WrongOptionCount { index: usize, found: usize },

    /// A structured record's answer is neither a letter in A-D nor the text
    /// of one of its options.
    #[error("question #{index}: unresolvable answer {answer:?}")]
    InvalidAnswer { index: usize, answer: String },
}
