use crate::core::dispatch::DisplaySink;
use std::sync::{Mutex, MutexGuard};

/// Render a user message container; the text is HTML-escaped
pub fn render_user_message(text: &str) -> String {
    format!(
        r#"<div class="chat-message user-message"><p>{}</p></div>"#,
        html_escape::encode_text(text)
    )
}

/// Render a bot message container; answer pages carry their own markup
pub fn render_bot_message(text: &str) -> String {
    format!(r#"<div class="chat-message bot-message">{}</div>"#, text)
}

/// Display sink that accumulates the chat window markup
#[derive(Debug, Default)]
pub struct HtmlTranscript {
    html: Mutex<String>,
    typing: Mutex<bool>,
}

impl HtmlTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Markup rendered so far
    pub fn html(&self) -> String {
        lock(&self.html).clone()
    }

    /// Whether the typing indicator is showing
    pub fn is_typing(&self) -> bool {
        *lock(&self.typing)
    }

    fn append(&self, markup: String) {
        lock(&self.html).push_str(&markup);
    }
}

/// Poisoned locks still hold complete markup
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| {
        tracing::warn!("Transcript lock was poisoned; continuing with current contents");
        poisoned.into_inner()
    })
}

impl DisplaySink for HtmlTranscript {
    fn user_message(&self, text: &str) {
        self.append(render_user_message(text));
    }

    fn bot_message(&self, text: &str) {
        self.append(render_bot_message(text));
    }

    fn typing(&self, active: bool) {
        *lock(&self.typing) = active;
    }
}
