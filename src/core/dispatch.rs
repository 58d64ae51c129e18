use crate::core::bot::FaqBot;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Where chat messages are rendered
pub trait DisplaySink: Send + Sync {
    fn user_message(&self, text: &str);

    fn bot_message(&self, text: &str);

    /// Show or hide the typing indicator
    fn typing(&self, _active: bool) {}
}

impl<S: DisplaySink + ?Sized> DisplaySink for Arc<S> {
    fn user_message(&self, text: &str) {
        (**self).user_message(text)
    }

    fn bot_message(&self, text: &str) {
        (**self).bot_message(text)
    }

    fn typing(&self, active: bool) {
        (**self).typing(active)
    }
}

/// What happened to a submitted message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input, nothing displayed
    Ignored,
    /// Another message is still being answered
    Busy,
    Answered(String),
}

/// Sending half of a chat input; each submit carries one raw query
#[derive(Debug, Clone)]
pub struct InputSource {
    tx: mpsc::Sender<String>,
}

impl InputSource {
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<String>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, rx)
    }

    /// Submit raw text; returns false once the session has stopped listening
    pub async fn submit(&self, text: impl Into<String>) -> bool {
        self.tx.send(text.into()).await.is_ok()
    }
}

/// Clears the in-flight flag when a dispatch finishes or is dropped
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// One chat window: dispatches user input to the bot and renders the exchange
///
/// At most one message is answered at a time; submissions made while a reply
/// is pending are rejected with `SubmitOutcome::Busy`.
pub struct ChatSession<S: DisplaySink> {
    bot: FaqBot,
    sink: S,
    typing_delay: Duration,
    in_flight: AtomicBool,
}

impl<S: DisplaySink> ChatSession<S> {
    pub fn new(bot: FaqBot, sink: S) -> Self {
        Self {
            bot,
            sink,
            typing_delay: Duration::ZERO,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Pause before answering while the typing indicator shows
    pub fn with_typing_delay(mut self, delay: Duration) -> Self {
        self.typing_delay = delay;
        self
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Handle one line of user input
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        if text.trim().is_empty() {
            return SubmitOutcome::Ignored;
        }

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("Rejected {:?}: a reply is still pending", text);
            return SubmitOutcome::Busy;
        }
        let _in_flight = InFlight(&self.in_flight);

        self.sink.user_message(text);
        self.sink.typing(true);

        if !self.typing_delay.is_zero() {
            tokio::time::sleep(self.typing_delay).await;
        }

        let reply = self.bot.answer(text).await;

        self.sink.typing(false);
        self.sink.bot_message(&reply.text);

        SubmitOutcome::Answered(reply.text)
    }

    /// Answer submissions in order until every `InputSource` is dropped
    pub async fn run(&self, mut input: mpsc::Receiver<String>) {
        while let Some(text) = input.recv().await {
            self.submit(&text).await;
        }

        tracing::debug!("Input closed, chat session finished");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::StubFetcher;
    use crate::core::Matcher;
    use crate::services::{HtmlTranscript, QuestionRepository};
    use std::sync::Mutex;
    use tokio::sync::Notify;

    #[derive(Default)]
    struct RecordingSink {
        events: Mutex<Vec<String>>,
    }

    impl RecordingSink {
        fn events(&self) -> Vec<String> {
            self.events.lock().unwrap().clone()
        }
    }

    impl DisplaySink for RecordingSink {
        fn user_message(&self, text: &str) {
            self.events.lock().unwrap().push(format!("user: {}", text));
        }

        fn bot_message(&self, text: &str) {
            self.events.lock().unwrap().push(format!("bot: {}", text));
        }

        fn typing(&self, active: bool) {
            self.events.lock().unwrap().push(format!("typing: {}", active));
        }
    }

    fn bot(fetcher: Arc<StubFetcher>) -> FaqBot {
        let repository = Arc::new(QuestionRepository::builtin().unwrap());
        FaqBot::new(Matcher::default(), repository, fetcher, Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_blank_input_ignored() {
        let fetcher = Arc::new(StubFetcher::ok("unused"));
        let session = ChatSession::new(bot(fetcher.clone()), RecordingSink::default());

        assert_eq!(session.submit("").await, SubmitOutcome::Ignored);
        assert_eq!(session.submit("   \t\n").await, SubmitOutcome::Ignored);

        assert!(session.sink().events().is_empty());
        assert_eq!(fetcher.calls(), 0);
    }

    #[tokio::test]
    async fn test_exchange_order() {
        let session = ChatSession::new(
            bot(Arc::new(StubFetcher::ok("unused"))),
            RecordingSink::default(),
        );

        let outcome = session.submit("hi").await;

        assert_eq!(
            outcome,
            SubmitOutcome::Answered("Hi there! What can I do for you?".to_string())
        );
        assert_eq!(
            session.sink().events(),
            vec![
                "user: hi",
                "typing: true",
                "typing: false",
                "bot: Hi there! What can I do for you?",
            ]
        );
        assert!(!session.is_busy());
    }

    #[tokio::test(start_paused = true)]
    async fn test_typing_delay_before_reply() {
        let session = ChatSession::new(
            bot(Arc::new(StubFetcher::ok("unused"))),
            RecordingSink::default(),
        )
        .with_typing_delay(Duration::from_millis(800));

        let started = tokio::time::Instant::now();
        session.submit("bye").await;

        assert!(started.elapsed() >= Duration::from_millis(800));
    }

    #[tokio::test]
    async fn test_busy_while_reply_pending() {
        let started = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        let fetcher = Arc::new(
            StubFetcher::ok("<p>About</p>").held(started.clone(), release.clone()),
        );
        let session = Arc::new(ChatSession::new(bot(fetcher.clone()), RecordingSink::default()));

        let pending = {
            let session = session.clone();
            tokio::spawn(async move { session.submit("Tell me about yourself?").await })
        };
        started.notified().await;

        assert!(session.is_busy());
        assert_eq!(session.submit("hello").await, SubmitOutcome::Busy);

        release.notify_one();
        let outcome = pending.await.unwrap();

        assert_eq!(outcome, SubmitOutcome::Answered("<p>About</p>".to_string()));
        assert!(!session.is_busy());
        assert_eq!(
            session.submit("hello").await,
            SubmitOutcome::Answered("Hello! How can I assist you?".to_string())
        );
        assert_eq!(fetcher.calls(), 1);
    }

    #[tokio::test]
    async fn test_run_processes_input_in_order() {
        let transcript = Arc::new(HtmlTranscript::new());
        let session =
            ChatSession::new(bot(Arc::new(StubFetcher::ok("unused"))), transcript.clone());
        let (input, rx) = InputSource::channel(8);

        assert!(input.submit("hello").await);
        assert!(input.submit(" ").await);
        assert!(input.submit("thanks").await);
        drop(input);

        session.run(rx).await;

        assert_eq!(
            transcript.html(),
            concat!(
                r#"<div class="chat-message user-message"><p>hello</p></div>"#,
                r#"<div class="chat-message bot-message">Hello! How can I assist you?</div>"#,
                r#"<div class="chat-message user-message"><p>thanks</p></div>"#,
                r#"<div class="chat-message bot-message">No problem!</div>"#,
            )
        );
    }
}
