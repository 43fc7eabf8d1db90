use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("question needs at least one answer choice")]
    NoAnswers,

    #[error("answer choice cannot be empty")]
    EmptyAnswer,

    #[error("correct answer {0:?} is not among the choices")]
    CorrectNotInAnswers(String),
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single trivia question with its ordered answer choices.
///
/// The correct answer is always one of the choices; construction fails
/// otherwise, so a `Question` in hand is guaranteed answerable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    answers: Vec<String>,
    correct: String,
}

impl Question {
    /// Validate and build a question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt is blank, the choice list is
    /// empty or contains a blank choice, or the correct answer is not among
    /// the choices.
    pub fn new(
        prompt: impl Into<String>,
        answers: Vec<String>,
        correct: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if answers.is_empty() {
            return Err(QuestionError::NoAnswers);
        }
        if answers.iter().any(|answer| answer.trim().is_empty()) {
            return Err(QuestionError::EmptyAnswer);
        }
        let correct = correct.into();
        if !answers.contains(&correct) {
            return Err(QuestionError::CorrectNotInAnswers(correct));
        }

        Ok(Self {
            prompt,
            answers,
            correct,
        })
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    #[must_use]
    pub fn correct(&self) -> &str {
        &self.correct
    }

    /// Whether the selected choice matches the correct answer exactly.
    #[must_use]
    pub fn is_correct(&self, selected: &str) -> bool {
        self.correct == selected
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
