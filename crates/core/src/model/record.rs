use serde::{Deserialize, Serialize};

use crate::model::{Question, QuestionError};

/// Wire shape for a question, matching the provider's JSON contract.
///
/// This mirrors the domain `Question` so transports can serialize and
/// deserialize without leaking wire concerns into the domain layer. A
/// deserialized record is not yet trusted; [`QuestionRecord::into_question`]
/// re-validates the invariants before the domain sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub question: String,
    pub answers: Vec<String>,
    pub correct: String,
}

impl QuestionRecord {
    #[must_use]
    pub fn from_question(question: &Question) -> Self {
        Self {
            question: question.prompt().to_owned(),
            answers: question.answers().to_vec(),
            correct: question.correct().to_owned(),
        }
    }

    /// Convert the record back into a domain `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the record fails prompt, choice, or
    /// correct-answer validation.
    pub fn into_question(self) -> Result<Question, QuestionError> {
        Question::new(self.question, self.answers, self.correct)
    }
}
