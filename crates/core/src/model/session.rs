use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::Question;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available for session")]
    Empty,

    #[error("session already finished")]
    Finished,

    #[error("session is not finished yet")]
    NotFinished,

    #[error("too many questions for a single session: {len}")]
    TooManyQuestions { len: usize },

    #[error(transparent)]
    Summary(#[from] SummaryError),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SummaryError {
    #[error("finished_at is before started_at")]
    InvalidTimeRange,

    #[error("score ({score}) exceeds total questions ({total})")]
    ScoreExceedsTotal { score: u32, total: u32 },
}

/// Outcome of answering the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub is_finished: bool,
}

//
// ─── SUMMARY ───────────────────────────────────────────────────────────────────
//

/// Aggregate result for a finished playthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    score: u32,
    total: u32,
    started_at: DateTime<Utc>,
    finished_at: DateTime<Utc>,
}

impl SessionSummary {
    /// Build a summary, checking that the counts and timestamps line up.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::ScoreExceedsTotal` if more answers were correct
    /// than questions asked, and `SummaryError::InvalidTimeRange` if
    /// `finished_at` precedes `started_at`.
    pub fn new(
        score: u32,
        total: u32,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    ) -> Result<Self, SummaryError> {
        if finished_at < started_at {
            return Err(SummaryError::InvalidTimeRange);
        }
        if score > total {
            return Err(SummaryError::ScoreExceedsTotal { score, total });
        }

        Ok(Self {
            score,
            total,
            started_at,
            finished_at,
        })
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn finished_at(&self) -> DateTime<Utc> {
        self.finished_at
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory playthrough of one category's questions.
///
/// Holds the fetched question snapshot and steps through it one answer at a
/// time; the score increments only when the selected choice matches the
/// correct answer exactly. A session is created at category selection and
/// discarded on restart, never reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    questions: Vec<Question>,
    current: usize,
    score: u32,
    started_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Create a session over a non-empty question snapshot.
    ///
    /// `started_at` should come from the caller's clock to keep time
    /// deterministic.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no questions are provided.
    pub fn new(questions: Vec<Question>, started_at: DateTime<Utc>) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::Empty);
        }

        Ok(Self {
            questions,
            current: 0,
            score: 0,
            started_at,
            finished_at: None,
        })
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total number of questions in this session.
    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Number of questions that have already been answered.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.current
    }

    /// Number of remaining unanswered questions.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.questions.len().saturating_sub(self.current)
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished_at.is_some()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    /// Apply an answer to the current question and advance.
    ///
    /// `answered_at` should come from the caller's clock; it stamps
    /// `finished_at` when the last question is answered.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Finished` if every question has already been
    /// answered.
    pub fn answer(
        &mut self,
        selected: &str,
        answered_at: DateTime<Utc>,
    ) -> Result<AnswerOutcome, SessionError> {
        let Some(question) = self.current_question() else {
            return Err(SessionError::Finished);
        };

        let correct = question.is_correct(selected);
        if correct {
            self.score += 1;
        }

        self.current += 1;
        if self.current >= self.questions.len() {
            self.finished_at = Some(answered_at);
        }

        Ok(AnswerOutcome {
            correct,
            is_finished: self.is_finished(),
        })
    }

    /// Build the final summary once the session is finished.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotFinished` while questions remain, and
    /// `SessionError::TooManyQuestions` if the count cannot fit in `u32`.
    pub fn summary(&self) -> Result<SessionSummary, SessionError> {
        let finished_at = self.finished_at.ok_or(SessionError::NotFinished)?;
        let total = u32::try_from(self.questions.len())
            .map_err(|_| SessionError::TooManyQuestions {
                len: self.questions.len(),
            })?;

        Ok(SessionSummary::new(
            self.score,
            total,
            self.started_at,
            finished_at,
        )?)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
