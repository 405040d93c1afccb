//! Error type shared by the fetch, scrape and publish paths.
//!
//! Only transport failures and empty results abort a cycle.  Missing tags or
//! odd text never show up here: the scanner and the heuristics degrade to
//! empty or best-effort values instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    /// Network failure, timeout or non-2xx response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The document was fetched but yielded no usable items.
    #[error("no entries found in {source_name}")]
    EmptyResult { source_name: String },

    /// A site profile carried a CSS selector that does not parse.
    #[error("invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },

    /// A site profile produced a byline pattern that does not compile.
    #[error("invalid byline pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The generated channel could not be rendered as XML.
    #[error("could not serialize feed: {0}")]
    Serialize(#[from] rss::Error),

    /// Writing the generated feed to disk failed.
    #[error("could not write feed: {0}")]
    Write(#[from] std::io::Error),
}

pub type FeedResult<T> = Result<T, FeedError>;
