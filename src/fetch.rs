//! Retrieval of remote imagery over HTTP.
//!
//! Fetches are single-shot: a failed download is reported to the caller and
//! never retried here.

use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;

/// Default timeout for a whole image download (15 seconds).
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Default connection timeout (10 seconds).
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Loose matcher for http(s) URLs embedded in arbitrary text.
const URL_PATTERN: &str =
    r"https?://(?:[a-zA-Z]|[0-9]|[$-_@.&+]|[!*\(\),]|(?:%[0-9a-fA-F][0-9a-fA-F]))+";

/// Errors that can occur while downloading an image.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Timed out fetching {url}")]
    Timeout { url: String },

    #[error("Fetching {url} failed with status {status}")]
    Status { url: String, status: u16 },
}

/// Every http(s) URL appearing in `text`, in order.
pub fn find_urls(text: &str) -> Vec<&str> {
    static URL_RE: OnceLock<Regex> = OnceLock::new();
    let re = URL_RE.get_or_init(|| Regex::new(URL_PATTERN).expect("URL pattern is valid"));
    re.find_iter(text).map(|m| m.as_str()).collect()
}

/// Downloads image bytes.
pub struct Fetcher {
    http_client: reqwest::Client,
    timeout: Duration,
}

impl Fetcher {
    /// Create a fetcher whose downloads give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT.min(timeout))
            .build()?;
        Ok(Self {
            http_client,
            timeout,
        })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Download the body at `url`.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Timeout` if the request exceeds the timeout,
    /// `FetchError::Status` for non-success responses, or `FetchError::Http`
    /// for any other transport failure.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        log::info!("Fetching {}", url);
        let timed_out = |e: reqwest::Error| {
            if e.is_timeout() {
                FetchError::Timeout {
                    url: url.to_string(),
                }
            } else {
                FetchError::Http(e)
            }
        };

        let response = self.http_client.get(url).send().await.map_err(timed_out)?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        let body = response.bytes().await.map_err(timed_out)?;
        log::info!("Fetched {} bytes from {}", body.len(), url);
        Ok(body.to_vec())
    }
}
