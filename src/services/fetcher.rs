use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Errors that can occur when retrieving an answer page
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Answer page returned status {0}")]
    Status(u16),

    #[error("Invalid answer location: {0}")]
    InvalidLocation(#[from] url::ParseError),

    #[error("Timed out after {0:?}")]
    Timeout(Duration),
}

/// Retrieves the text body of an answer page
#[async_trait]
pub trait AnswerFetcher: Send + Sync {
    /// Fetch `location` and return its body verbatim
    async fn fetch(&self, location: &str) -> Result<String, FetchError>;
}

/// Fetches answer pages over HTTP
///
/// Relative locations such as `/answers/about` are resolved against the
/// configured base URL; absolute URLs are used as-is.
pub struct HttpAnswerFetcher {
    base_url: Url,
    client: Client,
    timeout: Duration,
}

impl HttpAnswerFetcher {
    /// Create a new fetcher
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: Url::parse(base_url)?,
            client,
            timeout,
        })
    }

    /// Resolve an answer location against the base URL
    pub fn resolve(&self, location: &str) -> Result<Url, FetchError> {
        Ok(self.base_url.join(location)?)
    }

    /// Client timeouts surface as `FetchError::Timeout` like any other bound
    fn request_error(&self, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout(self.timeout)
        } else {
            FetchError::RequestError(err)
        }
    }
}

#[async_trait]
impl AnswerFetcher for HttpAnswerFetcher {
    async fn fetch(&self, location: &str) -> Result<String, FetchError> {
        let url = self.resolve(location)?;

        tracing::debug!("Fetching answer from: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        response.text().await.map_err(|e| self.request_error(e))
    }
}
