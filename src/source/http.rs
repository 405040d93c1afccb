//! HTTP transport for both halves of the tool.
//!
//! [`HttpFeedSource`] is the reader's [`DataSource`]: a blocking GET
//! followed by [`scan::parse_document`].  [`fetch_page`] is the generator's
//! one-shot download of the HTML listing.  Both treat non-2xx responses as
//! errors and never retry.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CACHE_CONTROL, PRAGMA, USER_AGENT};
use tracing::{debug, info, instrument};

use super::{DataSource, FeedItem};
use crate::error::{FeedError, FeedResult};
use crate::scan;

/// A feed polled over HTTP and parsed with the string scanner.
pub struct HttpFeedSource {
    /// The feed URL to poll.
    pub url: String,
    /// Most entries kept per fetch.
    pub max_items: usize,
    client: Client,
}

impl HttpFeedSource {
    /// Create a source with a request timeout of `timeout`.
    pub fn new(url: impl Into<String>, max_items: usize, timeout: Duration) -> FeedResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            url: url.into(),
            max_items,
            client,
        })
    }

    /// Turn an already-fetched body into items.
    ///
    /// Pure, so tests can run it without a network.
    pub fn parse_body(&self, body: &str) -> FeedResult<Vec<FeedItem>> {
        let items = scan::parse_document(body, self.max_items);
        if items.is_empty() {
            return Err(FeedError::EmptyResult {
                source_name: self.url.clone(),
            });
        }
        Ok(items)
    }
}

impl DataSource for HttpFeedSource {
    fn name(&self) -> &str {
        &self.url
    }

    #[instrument(level = "info", skip_all, fields(url = %self.url))]
    fn fetch(&self) -> FeedResult<Vec<FeedItem>> {
        let body = self.client.get(&self.url).send()?.error_for_status()?.text()?;
        debug!(bytes = body.len(), "Fetched feed");
        let items = self.parse_body(&body)?;
        info!(count = items.len(), "Parsed feed");
        Ok(items)
    }
}

/// Download an HTML page the way a desktop browser would ask for it.
#[instrument(level = "info", skip(timeout))]
pub fn fetch_page(url: &str, timeout: Duration) -> FeedResult<String> {
    let client = Client::builder()
        .timeout(timeout)
        .default_headers(browser_headers())
        .build()?;

    let html = client.get(url).send()?.error_for_status()?.text()?;
    info!(bytes = html.len(), "Fetched page");
    Ok(html)
}

fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(
            "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36",
        ),
    );
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("de-DE,de;q=0.9,en;q=0.7"));
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
    headers
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
