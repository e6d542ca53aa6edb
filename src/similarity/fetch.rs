// HTTP page fetcher.
//
// News sites serve a mix of UTF-8 and legacy encodings (EUC-KR is still
// common), often with a missing or wrong charset header. The body is
// therefore decoded from its bytes: a byte-order mark wins, otherwise
// chardetng guesses the encoding.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use tracing::debug;

use super::traits::PageFetcher;

/// Per-request timeout for candidate articles.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Desktop browser identification; many news sites reject obvious bots.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// reqwest-backed [`PageFetcher`].
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher with the given timeout and `User-Agent`.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client })
    }

    /// Wrap an already-configured client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        debug!(url = url, "Fetching candidate article");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Request to {url} failed"))?;

        if !response.status().is_success() {
            anyhow::bail!("{url} returned {}", response.status());
        }

        let bytes = response
            .bytes()
            .await
            .with_context(|| format!("Failed to read body from {url}"))?;

        decode_body(&bytes).with_context(|| format!("Unreadable body from {url}"))
    }
}

/// Detect the encoding of `bytes` and decode them.
///
/// Fails when the bytes contain sequences that are malformed in the detected
/// encoding.
pub fn decode_body(bytes: &[u8]) -> Result<String> {
    let encoding = match Encoding::for_bom(bytes) {
        Some((encoding, _bom_len)) => encoding,
        None => {
            let mut detector = EncodingDetector::new();
            detector.feed(bytes, true);
            detector.guess(None, true)
        }
    };

    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        anyhow::bail!("Body is not valid {}", encoding.name());
    }

    debug!(encoding = encoding.name(), bytes = bytes.len(), "Decoded response body");
    Ok(text.into_owned())
}
