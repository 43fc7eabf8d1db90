use trivia_core::model::CategoryKey;

use crate::machine::{Notice, QuizState};

/// Pure view description derived from the machine state.
///
/// Presentation-agnostic on purpose: no markup, no layout, just the data a
/// front-end needs to draw each screen. Re-derived on every transition.
#[derive(Debug, Clone, PartialEq)]
pub enum QuizView {
    /// Category selection, with the last failure notice when present.
    CategoryPicker { notice: Option<Notice> },
    /// Fetch in flight.
    Loading { category: CategoryKey },
    /// The current question card.
    QuestionCard {
        prompt: String,
        choices: Vec<String>,
        score: u32,
        /// 1-based position of the question being shown.
        number: usize,
        total: usize,
    },
    /// Final scoreboard.
    Scoreboard { score: u32, total: u32 },
}

/// Maps the current state to its view description.
#[must_use]
pub fn render(state: &QuizState) -> QuizView {
    match state {
        QuizState::Idle { notice } => QuizView::CategoryPicker { notice: *notice },
        QuizState::Loading { category } => QuizView::Loading {
            category: category.clone(),
        },
        QuizState::Active { session } => match session.current_question() {
            Some(question) => QuizView::QuestionCard {
                prompt: question.prompt().to_owned(),
                choices: question.answers().to_vec(),
                score: session.score(),
                number: session.answered_count() + 1,
                total: session.total(),
            },
            // An active session always has a question left; fall back to the
            // picker instead of rendering an empty card.
            None => QuizView::CategoryPicker { notice: None },
        },
        QuizState::Finished { summary } => QuizView::Scoreboard {
            score: summary.score(),
            total: summary.total(),
        },
    }
}

/// Scoreboard line, e.g. `2 / 3`.
#[must_use]
pub fn score_line(score: u32, total: u32) -> String {
    format!("{score} / {total}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use trivia_core::model::{Question, Session, SessionSummary};
    use trivia_core::time::fixed_now;

    #[test]
    fn idle_renders_picker_with_notice() {
        let view = render(&QuizState::Idle {
            notice: Some(Notice::LoadFailed),
        });

        let QuizView::CategoryPicker { notice } = view else {
            panic!("expected picker view");
        };
        assert_eq!(notice.unwrap().message(), "Gagal memuat kuis. Coba lagi nanti.");
    }

    #[test]
    fn active_renders_current_question_card() {
        let questions = vec![
            Question::new(
                "Apa planet terdekat dari Matahari?",
                vec!["Merkurius".into(), "Venus".into(), "Bumi".into()],
                "Merkurius",
            )
            .unwrap(),
        ];
        let session = Session::new(questions, fixed_now()).unwrap();

        let view = render(&QuizState::Active { session });
        assert_eq!(
            view,
            QuizView::QuestionCard {
                prompt: "Apa planet terdekat dari Matahari?".into(),
                choices: vec!["Merkurius".into(), "Venus".into(), "Bumi".into()],
                score: 0,
                number: 1,
                total: 1,
            }
        );
    }

    #[test]
    fn finished_renders_scoreboard() {
        let summary = SessionSummary::new(2, 3, fixed_now(), fixed_now()).unwrap();
        let view = render(&QuizState::Finished { summary });

        assert_eq!(view, QuizView::Scoreboard { score: 2, total: 3 });
    }

    #[test]
    fn score_line_matches_display_format() {
        assert_eq!(score_line(2, 3), "2 / 3");
    }
}
