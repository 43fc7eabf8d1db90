use chrono::{DateTime, Utc};

use trivia_core::model::{CategoryKey, Question, Session, SessionSummary};

use crate::error::SourceError;

//
// ─── NOTICES ───────────────────────────────────────────────────────────────────
//

/// User-visible failure notice shown on the category picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    CategoryNotFound,
    EmptyCategory,
    LoadFailed,
}

impl Notice {
    /// Message copy shown to the player.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Notice::CategoryNotFound => "Kategori tidak ditemukan.",
            Notice::EmptyCategory => "Tidak ada pertanyaan untuk kategori ini.",
            Notice::LoadFailed => "Gagal memuat kuis. Coba lagi nanti.",
        }
    }
}

/// Why a load attempt failed, before it is flattened into a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadFailure {
    CategoryNotFound,
    Transport,
    Malformed,
}

impl LoadFailure {
    /// The notice this failure surfaces as. Malformed payloads are reported
    /// like any other load failure; the distinction only matters for logging.
    #[must_use]
    pub fn notice(self) -> Notice {
        match self {
            LoadFailure::CategoryNotFound => Notice::CategoryNotFound,
            LoadFailure::Transport | LoadFailure::Malformed => Notice::LoadFailed,
        }
    }
}

impl From<&SourceError> for LoadFailure {
    fn from(err: &SourceError) -> Self {
        match err {
            SourceError::CategoryNotFound => LoadFailure::CategoryNotFound,
            SourceError::Malformed(_) => LoadFailure::Malformed,
            _ => LoadFailure::Transport,
        }
    }
}

//
// ─── STATES AND EVENTS ─────────────────────────────────────────────────────────
//

/// The stepper's state machine.
///
/// The session is an explicit value owned by `Active`; there is no ambient
/// quiz state anywhere else.
#[derive(Debug, Clone, PartialEq)]
pub enum QuizState {
    /// Category selection is shown; `notice` carries the last failure, if any.
    Idle { notice: Option<Notice> },
    /// A question fetch is in flight for `category`.
    Loading { category: CategoryKey },
    /// A playthrough is underway.
    Active { session: Session },
    /// Every question has been answered.
    Finished { summary: SessionSummary },
}

impl QuizState {
    /// Fresh idle state with no notice.
    #[must_use]
    pub fn idle() -> Self {
        Self::Idle { notice: None }
    }
}

/// Inputs that drive the machine, from the player or the network.
#[derive(Debug, Clone, PartialEq)]
pub enum QuizEvent {
    SelectCategory {
        category: CategoryKey,
    },
    /// The fetch completed. `loaded_at` comes from the caller's clock and
    /// becomes the session's start time.
    QuestionsLoaded {
        questions: Vec<Question>,
        loaded_at: DateTime<Utc>,
    },
    LoadFailed {
        failure: LoadFailure,
    },
    Answer {
        selected: String,
        answered_at: DateTime<Utc>,
    },
    Restart,
}

//
// ─── DISPATCH ──────────────────────────────────────────────────────────────────
//

/// Single dispatch from `(state, event)` to the next state.
///
/// Every listed transition of the quiz flow lives here; a pair with no entry
/// leaves the state unchanged, so out-of-order events can never crash the
/// machine or corrupt a session.
#[must_use]
pub fn apply(state: QuizState, event: QuizEvent) -> QuizState {
    match (state, event) {
        (QuizState::Idle { .. }, QuizEvent::SelectCategory { category }) => {
            QuizState::Loading { category }
        }

        (
            QuizState::Loading { .. },
            QuizEvent::QuestionsLoaded {
                questions,
                loaded_at,
            },
        ) => match Session::new(questions, loaded_at) {
            Ok(session) => QuizState::Active { session },
            Err(_) => QuizState::Idle {
                notice: Some(Notice::EmptyCategory),
            },
        },

        (QuizState::Loading { .. }, QuizEvent::LoadFailed { failure }) => QuizState::Idle {
            notice: Some(failure.notice()),
        },

        (
            QuizState::Active { mut session },
            QuizEvent::Answer {
                selected,
                answered_at,
            },
        ) => match session.answer(&selected, answered_at) {
            Ok(outcome) if outcome.is_finished => match session.summary() {
                Ok(summary) => QuizState::Finished { summary },
                // A session that just finished always summarizes.
                Err(err) => {
                    tracing::debug!(error = %err, "finished session failed to summarize");
                    QuizState::Active { session }
                }
            },
            Ok(_) => QuizState::Active { session },
            Err(err) => {
                tracing::debug!(error = %err, "answer rejected by session");
                QuizState::Active { session }
            }
        },

        (QuizState::Finished { .. }, QuizEvent::Restart) => QuizState::idle(),

        (state, event) => {
            tracing::debug!(?event, "no transition for event in current state");
            state
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
