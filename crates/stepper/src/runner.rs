use std::sync::Arc;

use trivia_core::Clock;
use trivia_core::model::CategoryKey;

use crate::machine::{LoadFailure, QuizEvent, QuizState, apply};
use crate::source::QuestionSource;
use crate::view::{QuizView, render};

/// Orchestrates a quiz playthrough: owns the state, the clock, and the one
/// network fetch.
///
/// All mutation flows through [`apply`]; the runner only decides when to
/// stamp time and when to go to the source.
pub struct QuizRunner {
    clock: Clock,
    source: Arc<dyn QuestionSource>,
    state: QuizState,
}

impl QuizRunner {
    #[must_use]
    pub fn new(clock: Clock, source: Arc<dyn QuestionSource>) -> Self {
        Self {
            clock,
            source,
            state: QuizState::idle(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &QuizState {
        &self.state
    }

    /// Current view description for the front-end.
    #[must_use]
    pub fn view(&self) -> QuizView {
        render(&self.state)
    }

    fn dispatch(&mut self, event: QuizEvent) {
        let state = std::mem::replace(&mut self.state, QuizState::idle());
        self.state = apply(state, event);
    }

    /// Select a category and fetch its questions.
    ///
    /// This is the single suspension point of the quiz: the fetch either
    /// completes or fails, and both outcomes are fed back through the
    /// machine. No retry is attempted.
    pub async fn select_category(&mut self, category: CategoryKey) -> &QuizState {
        self.dispatch(QuizEvent::SelectCategory {
            category: category.clone(),
        });
        if !matches!(self.state, QuizState::Loading { .. }) {
            return &self.state;
        }

        match self.source.fetch_questions(&category).await {
            Ok(questions) => {
                let loaded_at = self.clock.now();
                self.dispatch(QuizEvent::QuestionsLoaded {
                    questions,
                    loaded_at,
                });
            }
            Err(err) => {
                let failure = LoadFailure::from(&err);
                if matches!(failure, LoadFailure::Malformed) {
                    tracing::warn!(%category, error = %err, "discarding malformed question payload");
                } else {
                    tracing::debug!(%category, error = %err, "question fetch failed");
                }
                self.dispatch(QuizEvent::LoadFailed { failure });
            }
        }
        &self.state
    }

    /// Answer the current question.
    pub fn answer(&mut self, selected: impl Into<String>) -> &QuizState {
        let answered_at = self.clock.now();
        self.dispatch(QuizEvent::Answer {
            selected: selected.into(),
            answered_at,
        });
        &self.state
    }

    /// Discard the session and return to category selection.
    pub fn restart(&mut self) -> &QuizState {
        self.dispatch(QuizEvent::Restart);
        &self.state
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use trivia_core::model::Question;
    use trivia_core::time::fixed_now;

    use crate::error::SourceError;
    use crate::machine::Notice;

    struct FixedSource {
        questions: Vec<Question>,
    }

    #[async_trait]
    impl QuestionSource for FixedSource {
        async fn fetch_questions(
            &self,
            _category: &CategoryKey,
        ) -> Result<Vec<Question>, SourceError> {
            Ok(self.questions.clone())
        }
    }

    struct NotFoundSource;

    #[async_trait]
    impl QuestionSource for NotFoundSource {
        async fn fetch_questions(
            &self,
            _category: &CategoryKey,
        ) -> Result<Vec<Question>, SourceError> {
            Err(SourceError::CategoryNotFound)
        }
    }

    struct MalformedSource;

    #[async_trait]
    impl QuestionSource for MalformedSource {
        async fn fetch_questions(
            &self,
            _category: &CategoryKey,
        ) -> Result<Vec<Question>, SourceError> {
            Err(SourceError::Malformed("correct answer missing".into()))
        }
    }

    fn sains_questions() -> Vec<Question> {
        vec![
            Question::new(
                "Apa rumus kimia air?",
                vec!["H2O".into(), "CO2".into(), "O2".into()],
                "H2O",
            )
            .unwrap(),
            Question::new(
                "Apa planet terdekat dari Matahari?",
                vec!["Merkurius".into(), "Venus".into(), "Bumi".into()],
                "Merkurius",
            )
            .unwrap(),
        ]
    }

    fn runner(source: impl QuestionSource + 'static) -> QuizRunner {
        QuizRunner::new(Clock::fixed(fixed_now()), Arc::new(source))
    }

    #[tokio::test]
    async fn full_playthrough_scores_and_restarts() {
        let mut runner = runner(FixedSource {
            questions: sains_questions(),
        });

        runner.select_category("sains".parse().unwrap()).await;
        assert!(matches!(runner.state(), QuizState::Active { .. }));

        runner.answer("H2O");
        runner.answer("Venus");

        let QuizState::Finished { summary } = runner.state() else {
            panic!("expected finished state");
        };
        assert_eq!(summary.score(), 1);
        assert_eq!(summary.total(), 2);

        runner.restart();
        assert_eq!(runner.state(), &QuizState::idle());
    }

    #[tokio::test]
    async fn unknown_category_never_activates() {
        let mut runner = runner(NotFoundSource);

        runner.select_category("olahraga".parse().unwrap()).await;

        assert_eq!(
            runner.state(),
            &QuizState::Idle {
                notice: Some(Notice::CategoryNotFound)
            }
        );
    }

    #[tokio::test]
    async fn malformed_payload_reports_generic_failure() {
        let mut runner = runner(MalformedSource);

        runner.select_category("sains".parse().unwrap()).await;

        assert_eq!(
            runner.state(),
            &QuizState::Idle {
                notice: Some(Notice::LoadFailed)
            }
        );
    }
}
