// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Answer, AnswerKind, MatchResult, QuestionEntry, RawQuestionEntry};
pub use requests::ChatRequest;
pub use responses::{ChatResponse, ErrorResponse, HealthResponse, QuestionsResponse};
