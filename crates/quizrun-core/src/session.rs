//! The quiz session engine.
//!
//! Selects a uniform random subset of the bank, shuffles each question's
//! options for display, scores responses against the post-shuffle answer
//! key, and folds per-category statistics. The random source is injected so
//! a seeded engine replays the identical session.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::model::{AnswerLetter, Question};
use crate::statistics::SessionResult;
use crate::traits::{AnswerSource, SessionObserver};

/// Administrative cap on questions per session.
pub const MAX_SESSION_QUESTIONS: usize = 90;

/// A question as shown to the user: options in shuffled display order.
///
/// After the shuffle the original answer letter loses its meaning; `correct`
/// is the display letter whose position holds the correct option's text.
#[derive(Debug, Clone)]
pub struct PresentedQuestion {
    /// 1-based position within the session.
    pub number: usize,
    /// Questions in the session.
    pub total: usize,
    /// The prompt.
    pub text: String,
    /// The four options in display order.
    pub options: Vec<String>,
    /// The display letter that scores correct.
    pub correct: AnswerLetter,
}

/// The session engine, generic over its random source.
pub struct QuizEngine<R: Rng> {
    rng: R,
}

impl QuizEngine<StdRng> {
    /// Engine seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Deterministic engine for reproducible sessions.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> QuizEngine<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Run one session over `requested` questions drawn from the bank.
    ///
    /// The effective count is clamped to the bank size and to
    /// `MAX_SESSION_QUESTIONS`. The bank itself is never mutated, so the
    /// same slice can back any number of sessions. A zero-question session
    /// (empty bank, or zero requested) completes immediately with an empty
    /// result.
    pub fn run(
        &mut self,
        questions: &[Question],
        requested: usize,
        source: &mut dyn AnswerSource,
        observer: &mut dyn SessionObserver,
    ) -> Result<SessionResult> {
        let effective = requested.min(questions.len()).min(MAX_SESSION_QUESTIONS);
        let mut result = SessionResult::default();

        // choose_multiple samples without replacement but does not promise a
        // random order, so the selection is shuffled as well
        let mut selected: Vec<&Question> =
            questions.choose_multiple(&mut self.rng, effective).collect();
        selected.shuffle(&mut self.rng);

        for (i, question) in selected.iter().enumerate() {
            let presented = self.present(question, i + 1, effective)?;
            observer.on_question(&presented);

            let chosen = source.next_answer(&presented)?;
            let correct = chosen == presented.correct;
            result.record(question.category.as_deref(), correct);
            observer.on_answer(&presented, question, chosen, correct);
        }

        observer.on_complete(&result);
        Ok(result)
    }

    /// Shuffle one question's options and locate the answer key in display
    /// order. Correctness is anchored to the correct option's text.
    fn present(
        &mut self,
        question: &Question,
        number: usize,
        total: usize,
    ) -> Result<PresentedQuestion> {
        let mut options = question.options.clone();
        options.shuffle(&mut self.rng);

        let answer_text = question.answer_text();
        let correct = options
            .iter()
            .position(|option| option == answer_text)
            .and_then(AnswerLetter::from_index)
            .ok_or_else(|| {
                anyhow::anyhow!("correct option text missing after shuffle: {:?}", question.text)
            })?;

        Ok(PresentedQuestion {
            number,
            total,
            text: question.text.clone(),
            options,
            correct,
        })
    }
}
