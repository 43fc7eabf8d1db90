#![forbid(unsafe_code)]

pub mod error;
pub mod machine;
pub mod runner;
pub mod source;
pub mod view;

pub use error::SourceError;
pub use machine::{LoadFailure, Notice, QuizEvent, QuizState, apply};
pub use runner::QuizRunner;
pub use source::{CatalogSource, HttpQuestionSource, QuestionSource};
pub use view::{QuizView, render, score_line};
