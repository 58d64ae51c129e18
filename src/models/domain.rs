use serde::{Deserialize, Serialize};
use validator::Validate;

/// How an entry's answer is produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerKind {
    #[default]
    String,
    Url,
}

/// Question entry as written in a question file
///
/// `type` may be omitted, in which case the answer is a literal string.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RawQuestionEntry {
    #[validate(length(min = 1, message = "question must not be empty"))]
    pub question: String,
    #[validate(length(min = 1, message = "answer must not be empty"))]
    pub answer: String,
    #[serde(rename = "type", default)]
    pub kind: AnswerKind,
}

/// Resolved answer for a question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Literal reply text
    Text(String),
    /// Path or URL whose body is the reply
    Url(String),
}

/// A validated question/answer pair
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawQuestionEntry")]
pub struct QuestionEntry {
    pub question: String,
    pub answer: Answer,
}

impl QuestionEntry {
    pub fn text(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: Answer::Text(answer.into()),
        }
    }

    pub fn url(question: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: Answer::Url(location.into()),
        }
    }
}

impl TryFrom<RawQuestionEntry> for QuestionEntry {
    type Error = String;

    fn try_from(raw: RawQuestionEntry) -> Result<Self, Self::Error> {
        raw.validate()
            .map_err(|e| format!("invalid entry {:?}: {}", raw.question, e))?;

        let answer = match raw.kind {
            AnswerKind::String => Answer::Text(raw.answer),
            AnswerKind::Url => Answer::Url(raw.answer),
        };

        Ok(Self {
            question: raw.question,
            answer,
        })
    }
}

/// Outcome of matching a query against the known questions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    NoMatch,
    /// Exact question string of the winning entry
    Matched(String),
}

impl MatchResult {
    pub fn question(&self) -> Option<&str> {
        match self {
            MatchResult::NoMatch => None,
            MatchResult::Matched(question) => Some(question),
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, MatchResult::Matched(_))
    }
}
