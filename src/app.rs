use crate::config::Settings;
use crate::core::{FaqBot, Matcher};
use crate::services::{FetchError, HttpAnswerFetcher, QuestionRepository, RepositoryError};
use std::sync::Arc;
use thiserror::Error;

/// Errors that prevent the bot from starting
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Failed to load questions: {0}")]
    Questions(#[from] RepositoryError),

    #[error("Failed to create answer fetcher: {0}")]
    Fetcher(#[from] FetchError),
}

/// Load the configured question list
pub fn load_questions(settings: &Settings) -> Result<QuestionRepository, RepositoryError> {
    match &settings.questions.path {
        Some(path) => {
            tracing::info!("Loading questions from {}", path);
            QuestionRepository::load_from(path)
        }
        None => QuestionRepository::builtin(),
    }
}

/// Wire the matcher, repository and HTTP fetcher from settings
pub fn build_bot(settings: &Settings) -> Result<FaqBot, StartupError> {
    let repository = Arc::new(load_questions(settings)?);
    let fetcher = Arc::new(HttpAnswerFetcher::new(
        &settings.answers.base_url,
        settings.answers.timeout(),
    )?);
    let matcher = Matcher::new(settings.matching.target_similarity);

    tracing::info!(
        "Loaded {} questions (threshold: {}, answers from {})",
        repository.len(),
        matcher.threshold(),
        settings.answers.base_url
    );

    Ok(FaqBot::new(matcher, repository, fetcher, settings.answers.timeout()))
}
