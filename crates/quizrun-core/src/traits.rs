//! Seams between the quiz engine and the interactive world.
//!
//! The engine never touches stdin or stdout. The CLI implements these traits
//! over the terminal; tests drive the engine with `ScriptedAnswers`.

use anyhow::Result;

use crate::model::{AnswerLetter, Question};
use crate::session::PresentedQuestion;
use crate::statistics::SessionResult;

/// Supplies the resolved answer for each presented question.
///
/// Implementations hand back a letter in A-D; re-prompting on anything else
/// is their responsibility, not the engine's.
pub trait AnswerSource {
    fn next_answer(&mut self, question: &PresentedQuestion) -> Result<AnswerLetter>;
}

/// Receives presentation events as the session advances.
pub trait SessionObserver {
    fn on_question(&mut self, question: &PresentedQuestion);
    fn on_answer(
        &mut self,
        presented: &PresentedQuestion,
        question: &Question,
        chosen: AnswerLetter,
        correct: bool,
    );
    fn on_complete(&mut self, result: &SessionResult);
}

/// Observer that ignores every event.
pub struct NoopObserver;

impl SessionObserver for NoopObserver {
    fn on_question(&mut self, _: &PresentedQuestion) {}
    fn on_answer(&mut self, _: &PresentedQuestion, _: &Question, _: AnswerLetter, _: bool) {}
    fn on_complete(&mut self, _: &SessionResult) {}
}

/// A scripted answer source for tests and non-interactive runs.
pub struct ScriptedAnswers {
    mode: ScriptMode,
    calls: u32,
}

enum ScriptMode {
    Sequence(std::vec::IntoIter<AnswerLetter>),
    AlwaysCorrect,
    Fixed(AnswerLetter),
}

impl ScriptedAnswers {
    /// Play back a fixed sequence of letters, erroring once exhausted.
    pub fn from_sequence(letters: Vec<AnswerLetter>) -> Self {
        Self {
            mode: ScriptMode::Sequence(letters.into_iter()),
            calls: 0,
        }
    }

    /// Always answer with the display letter that holds the correct text.
    pub fn always_correct() -> Self {
        Self {
            mode: ScriptMode::AlwaysCorrect,
            calls: 0,
        }
    }

    /// Always answer with the same letter, whatever is asked.
    pub fn always(letter: AnswerLetter) -> Self {
        Self {
            mode: ScriptMode::Fixed(letter),
            calls: 0,
        }
    }

    /// Number of questions answered so far.
    pub fn call_count(&self) -> u32 {
        self.calls
    }
}

impl AnswerSource for ScriptedAnswers {
    fn next_answer(&mut self, question: &PresentedQuestion) -> Result<AnswerLetter> {
        self.calls += 1;
        match &mut self.mode {
            ScriptMode::Sequence(letters) => letters.next().ok_or_else(|| {
                anyhow::anyhow!("scripted answers exhausted after {} questions", self.calls - 1)
            }),
            ScriptMode::AlwaysCorrect => Ok(question.correct),
            ScriptMode::Fixed(letter) => Ok(*letter),
        }
    }
}
