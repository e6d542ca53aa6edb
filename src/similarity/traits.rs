// Page fetcher trait, the seam between similarity scoring and the network.
//
// The scorer only needs "give me the decoded HTML at this URL". Keeping that
// behind a trait lets tests drive the scorer with canned pages and failures.

use anyhow::Result;
use async_trait::async_trait;

/// Retrieves a page and returns its body decoded to text.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch `url` with a single attempt. Any timeout, non-success status or
    /// undecodable body is an error.
    async fn fetch_text(&self, url: &str) -> Result<String>;
}
