// Core algorithm exports
pub mod bot;
pub mod dispatch;
pub mod matcher;
pub mod responder;
pub mod similarity;

#[cfg(test)]
pub(crate) mod test_support;

pub use bot::{FaqBot, Reply};
pub use dispatch::{ChatSession, DisplaySink, InputSource, SubmitOutcome};
pub use matcher::{Matcher, TARGET_SIMILARITY};
pub use responder::{Responder, ERROR_REPLY, NO_ANSWER_REPLY, TIMEOUT_REPLY};
pub use similarity::compare_two_strings;
