//! Core data model types for quizrun.
//!
//! These are the fundamental types the rest of the system uses to represent
//! questions and answer keys.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Options every question carries, labelled A through D.
pub const OPTION_COUNT: usize = 4;

/// One of the four option letters.
///
/// Parsing is case-insensitive because scoring compares the user's letter
/// case-insensitively; display is always the uppercase letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnswerLetter {
    A,
    B,
    C,
    D,
}

impl AnswerLetter {
    /// All letters in bank order.
    pub const ALL: [AnswerLetter; OPTION_COUNT] = [
        AnswerLetter::A,
        AnswerLetter::B,
        AnswerLetter::C,
        AnswerLetter::D,
    ];

    /// Zero-based option position this letter names.
    pub fn index(self) -> usize {
        match self {
            AnswerLetter::A => 0,
            AnswerLetter::B => 1,
            AnswerLetter::C => 2,
            AnswerLetter::D => 3,
        }
    }

    /// The letter naming a zero-based option position.
    pub fn from_index(index: usize) -> Option<AnswerLetter> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for AnswerLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerLetter::A => write!(f, "A"),
            AnswerLetter::B => write!(f, "B"),
            AnswerLetter::C => write!(f, "C"),
            AnswerLetter::D => write!(f, "D"),
        }
    }
}

impl FromStr for AnswerLetter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(AnswerLetter::A),
            "B" | "b" => Ok(AnswerLetter::B),
            "C" | "c" => Ok(AnswerLetter::C),
            "D" | "d" => Ok(AnswerLetter::D),
            other => Err(format!("not an option letter: {other}")),
        }
    }
}

/// A single validated multiple-choice question.
///
/// Constructed once by the loader and immutable afterwards; a session only
/// ever builds a transient display-order mapping on top of it. The serde
/// shape of this struct is itself the minimal structured bank record, which
/// is what `quizrun convert` emits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The prompt shown to the user.
    #[serde(rename = "question")]
    pub text: String,
    /// The four choices in bank order (A through D).
    pub options: Vec<String>,
    /// Which bank-order option is correct.
    pub answer: AnswerLetter,
    /// Optional domain label, used only for aggregate statistics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Supplementary text shown on incorrect answers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl Question {
    /// Text of the correct option.
    pub fn answer_text(&self) -> &str {
        &self.options[self.answer.index()]
    }
}
