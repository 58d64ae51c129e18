use crate::models::{Answer, MatchResult};
use crate::services::{AnswerFetcher, FetchError, QuestionRepository};
use std::sync::Arc;
use std::time::Duration;

/// Reply when no predefined question matches
pub const NO_ANSWER_REPLY: &str = "I'm sorry, I don't have an answer for that.";

/// Reply when an answer page cannot be retrieved
pub const ERROR_REPLY: &str = "I'm sorry, something went wrong.";

/// Reply when an answer page does not arrive in time
pub const TIMEOUT_REPLY: &str = "I'm sorry, that answer took too long to load.";

/// Default upper bound on answer page retrieval
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Maps a match outcome to the text shown to the user
///
/// Resolution never fails: retrieval errors and timeouts degrade to an
/// apology string.
#[derive(Clone)]
pub struct Responder {
    repository: Arc<QuestionRepository>,
    fetcher: Arc<dyn AnswerFetcher>,
    fetch_timeout: Duration,
}

impl Responder {
    pub fn new(repository: Arc<QuestionRepository>, fetcher: Arc<dyn AnswerFetcher>) -> Self {
        Self {
            repository,
            fetcher,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }

    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    /// Resolve the reply for a match outcome
    ///
    /// Literal answers resolve without I/O. URL answers issue exactly one
    /// retrieval and resolve with its body.
    pub async fn resolve(&self, result: &MatchResult) -> String {
        let question = match result {
            MatchResult::NoMatch => return NO_ANSWER_REPLY.to_string(),
            MatchResult::Matched(question) => question,
        };

        let Some(entry) = self.repository.find(question) else {
            tracing::warn!("Matched question {:?} is not in the repository", question);
            return NO_ANSWER_REPLY.to_string();
        };

        match &entry.answer {
            Answer::Text(text) => text.clone(),
            Answer::Url(location) => match self.fetch(location).await {
                Ok(body) => body,
                Err(FetchError::Timeout(elapsed)) => {
                    tracing::warn!("Answer page {} timed out after {:?}", location, elapsed);
                    TIMEOUT_REPLY.to_string()
                }
                Err(e) => {
                    tracing::warn!("Failed to fetch answer page {}: {}", location, e);
                    ERROR_REPLY.to_string()
                }
            },
        }
    }

    async fn fetch(&self, location: &str) -> Result<String, FetchError> {
        match tokio::time::timeout(self.fetch_timeout, self.fetcher.fetch(location)).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout(self.fetch_timeout)),
        }
    }
}
