use crate::core::{Matcher, Responder};
use crate::models::MatchResult;
use crate::services::{AnswerFetcher, QuestionRepository};
use std::sync::Arc;
use std::time::Duration;

/// Bot reply together with the question it answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub matched: MatchResult,
    pub text: String,
}

/// Matcher and responder wired to one question repository
#[derive(Clone)]
pub struct FaqBot {
    matcher: Matcher,
    repository: Arc<QuestionRepository>,
    responder: Responder,
}

impl FaqBot {
    pub fn new(
        matcher: Matcher,
        repository: Arc<QuestionRepository>,
        fetcher: Arc<dyn AnswerFetcher>,
        fetch_timeout: Duration,
    ) -> Self {
        let responder =
            Responder::new(repository.clone(), fetcher).with_fetch_timeout(fetch_timeout);

        Self {
            matcher,
            repository,
            responder,
        }
    }

    pub fn repository(&self) -> &QuestionRepository {
        &self.repository
    }

    /// Match the query against known questions
    pub fn find_match(&self, query: &str) -> MatchResult {
        self.matcher.find_best_match(query, self.repository.questions())
    }

    /// Match the query and resolve the reply
    pub async fn answer(&self, query: &str) -> Reply {
        let matched = self.find_match(query);
        let text = self.responder.resolve(&matched).await;

        tracing::debug!("Answered {:?} via {:?}", query, matched);

        Reply { matched, text }
    }
}
