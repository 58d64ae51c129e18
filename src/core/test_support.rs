use crate::services::{AnswerFetcher, FetchError};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;

/// In-memory fetcher that records every requested location
pub struct StubFetcher {
    body: Option<String>,
    status: u16,
    delay: Option<Duration>,
    hold: Option<(Arc<Notify>, Arc<Notify>)>,
    locations: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn ok(body: &str) -> Self {
        Self {
            body: Some(body.to_string()),
            status: 200,
            delay: None,
            hold: None,
            locations: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            body: None,
            status,
            ..Self::ok("")
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Signal `started` when a fetch begins, then wait for `release`
    pub fn held(mut self, started: Arc<Notify>, release: Arc<Notify>) -> Self {
        self.hold = Some((started, release));
        self
    }

    pub fn calls(&self) -> usize {
        self.locations.lock().unwrap().len()
    }

    pub fn locations(&self) -> Vec<String> {
        self.locations.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnswerFetcher for StubFetcher {
    async fn fetch(&self, location: &str) -> Result<String, FetchError> {
        self.locations.lock().unwrap().push(location.to_string());

        if let Some((started, release)) = &self.hold {
            started.notify_one();
            release.notified().await;
        }

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.body.clone().ok_or(FetchError::Status(self.status))
    }
}
