//! Terminal chat with the FAQ bot: one question per line, Ctrl-D to quit.

use faq_bot::config::Settings;
use faq_bot::{ChatSession, DisplaySink, InputSource};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::error;

struct ConsoleSink;

impl DisplaySink for ConsoleSink {
    fn user_message(&self, text: &str) {
        println!("you> {}", text);
    }

    fn bot_message(&self, text: &str) {
        println!("bot> {}", text.trim_end());
    }

    fn typing(&self, active: bool) {
        if active {
            println!("bot is typing...");
        }
    }
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    faq_bot::logging::init();

    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        std::process::exit(1);
    });

    let bot = faq_bot::app::build_bot(&settings).unwrap_or_else(|e| {
        error!("{}", e);
        std::process::exit(1);
    });

    let session =
        ChatSession::new(bot, ConsoleSink).with_typing_delay(settings.chat.typing_delay());
    let (input, rx) = InputSource::channel(16);

    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if !input.submit(line).await {
                        break;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    error!("Failed to read input: {}", e);
                    break;
                }
            }
        }
    });

    session.run(rx).await;
}
