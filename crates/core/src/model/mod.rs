mod category;
mod question;
mod record;
mod session;

pub use category::{CategoryKey, ParseCategoryError};
pub use question::{Question, QuestionError};
pub use record::QuestionRecord;
pub use session::{AnswerOutcome, Session, SessionError, SessionSummary, SummaryError};
