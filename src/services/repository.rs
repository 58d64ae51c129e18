use crate::models::{QuestionEntry, RawQuestionEntry};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Questions shipped with the binary
const BUILTIN_QUESTIONS: &str = include_str!("../../data/questions.json");

/// Errors that can occur when loading questions
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Failed to read question file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON question list: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML question list: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid question entry: {0}")]
    InvalidEntry(String),

    #[error("Unsupported question file format: {0}")]
    UnsupportedFormat(String),
}

/// TOML layout: a list of `[[questions]]` tables
#[derive(Debug, Deserialize)]
struct QuestionFile {
    questions: Vec<RawQuestionEntry>,
}

/// Read-only, ordered list of question entries
///
/// Loaded once at startup and shared between the matcher and the responder.
#[derive(Debug, Clone, Default)]
pub struct QuestionRepository {
    entries: Vec<QuestionEntry>,
}

impl QuestionRepository {
    pub fn new(entries: Vec<QuestionEntry>) -> Self {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.question.as_str()) {
                tracing::warn!(
                    "Duplicate question {:?}; only the first entry will be used",
                    entry.question
                );
            }
        }

        Self { entries }
    }

    /// The question list bundled with the bot
    pub fn builtin() -> Result<Self, RepositoryError> {
        Self::from_json(BUILTIN_QUESTIONS)
    }

    /// Parse a JSON array of entries
    pub fn from_json(json: &str) -> Result<Self, RepositoryError> {
        let raw: Vec<RawQuestionEntry> = serde_json::from_str(json)?;
        Self::validated(raw)
    }

    /// Parse a TOML document with `[[questions]]` tables
    pub fn from_toml(source: &str) -> Result<Self, RepositoryError> {
        let file: QuestionFile = toml::from_str(source)?;
        Self::validated(file.questions)
    }

    fn validated(raw: Vec<RawQuestionEntry>) -> Result<Self, RepositoryError> {
        let entries = raw
            .into_iter()
            .map(QuestionEntry::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(RepositoryError::InvalidEntry)?;

        Ok(Self::new(entries))
    }

    /// Load questions from a `.json` or `.toml` file
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&source),
            Some("toml") => Self::from_toml(&source),
            _ => Err(RepositoryError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Question strings in configured order
    pub fn questions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.question.as_str())
    }

    /// Look up an entry by its exact question string
    pub fn find(&self, question: &str) -> Option<&QuestionEntry> {
        self.entries.iter().find(|entry| entry.question == question)
    }

    pub fn entries(&self) -> &[QuestionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
