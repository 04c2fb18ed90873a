pub mod diagnostic;
pub mod quiz;
pub mod quiz_question;
pub mod score_report;
pub mod user_answers;
pub use diagnostic::{Diagnostic, ValidationIssue};
pub use quiz::{Quiz, QuizType};
pub use quiz_question::{MatchingPair, QuestionKind, QuizQuestion};
pub use score_report::{PairResult, QuestionResult, ScoreReport};
pub use user_answers::UserAnswers;
