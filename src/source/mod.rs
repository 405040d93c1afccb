//! Data source abstraction layer.
//!
//! This module defines the [`DataSource`] trait and the common [`FeedItem`]
//! type.  The reader polls a [`DataSource`]; the concrete implementation in
//! [`http`] fetches a feed over HTTP and runs it through the scanner.
//!
//! ## For contributors: adding a new source
//!
//! 1. Create a new file in this directory (e.g. `file.rs`).
//! 2. Define a struct and implement [`DataSource`] for it.
//! 3. Add `mod file;` below and re-export your struct in the `pub use` block.
//! 4. Construct an instance in `main.rs` instead of [`HttpFeedSource`].

mod feed_item;
mod http;

pub use feed_item::FeedItem;
#[cfg(test)]
pub use feed_item::{DESCRIPTION_LIMIT, ELLIPSIS};
pub use http::{fetch_page, HttpFeedSource};

use crate::error::FeedResult;

/// Trait that every data source must implement.
///
/// The reader loop calls [`fetch()`](DataSource::fetch) on its own thread
/// and blocks until it returns, so implementations should bound their I/O
/// with a timeout.
pub trait DataSource {
    /// Human-readable label shown in the status bar.
    fn name(&self) -> &str;

    /// Fetch the latest batch of items.
    ///
    /// An empty batch is reported as [`FeedError::EmptyResult`] rather than
    /// `Ok(vec![])`, so callers can keep showing what they already have.
    ///
    /// [`FeedError::EmptyResult`]: crate::error::FeedError::EmptyResult
    fn fetch(&self) -> FeedResult<Vec<FeedItem>>;
}
