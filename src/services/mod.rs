// Service exports
pub mod fetcher;
pub mod repository;
pub mod transcript;

pub use fetcher::{AnswerFetcher, FetchError, HttpAnswerFetcher};
pub use repository::{QuestionRepository, RepositoryError};
pub use transcript::{render_bot_message, render_user_message, HtmlTranscript};
