//! FAQ Bot - fuzzy question matching chat bot
//!
//! Matches free-form user input against a small list of predefined questions
//! and replies with a literal answer or the text of an answer page.

pub mod app;
pub mod config;
pub mod core;
pub mod logging;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{
    ChatSession, DisplaySink, FaqBot, InputSource, Matcher, Responder, SubmitOutcome,
    TARGET_SIMILARITY,
};
pub use models::{Answer, MatchResult, QuestionEntry};
pub use services::{AnswerFetcher, HttpAnswerFetcher, QuestionRepository};
