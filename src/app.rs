use std::time::Instant;

use crate::error::FeedResult;
use crate::poll::RefreshClock;
use crate::source::FeedItem;
use crate::store::FeedStore;

pub struct App {
    /// Articles on display and the cursor into them.
    pub store: FeedStore,
    /// When the next fetch is due.
    pub clock: RefreshClock,
    /// Whether the user has requested to quit.
    pub quit: bool,
    /// Whether the link panel is open.
    pub show_link: bool,
    /// Last fetch status message.
    pub status: String,
}

impl App {
    pub fn new(clock: RefreshClock) -> Self {
        Self {
            store: FeedStore::new(),
            clock,
            quit: false,
            show_link: false,
            status: "Starting…".into(),
        }
    }

    /// Record the outcome of a fetch that ran at `now`.
    ///
    /// A failure only updates the status line; the articles already shown
    /// stay in place.
    pub fn apply_fetch(&mut self, result: FeedResult<Vec<FeedItem>>, now: Instant) {
        self.clock.mark_attempt(now);
        match result {
            Ok(items) => {
                self.status = format!("Fetched {} items", items.len());
                self.store.replace(items);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Refresh failed");
                self.status = format!("Error: {e}");
            }
        }
    }

    // -- navigation ----------------------------------------------------------

    /// Step towards the newest article.
    pub fn select_newer(&mut self) {
        self.store.advance(-1);
    }

    /// Step towards the oldest article.
    pub fn select_older(&mut self) {
        self.store.advance(1);
    }

    pub fn toggle_link(&mut self) {
        self.show_link = !self.show_link;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FeedError;
    use std::time::Duration;

    fn make_item(title: &str) -> FeedItem {
        FeedItem::new(title, format!("About {title}"), format!("https://example.com/{title}")).unwrap()
    }

    fn sample_items() -> Vec<FeedItem> {
        vec![make_item("New"), make_item("Mid"), make_item("Old")]
    }

    fn app() -> App {
        App::new(RefreshClock::new(Duration::from_secs(60)))
    }

    // -- construction --------------------------------------------------------

    #[test]
    fn new_app_starts_empty() {
        let app = app();
        assert!(app.store.is_empty());
        assert!(!app.quit);
        assert!(!app.show_link);
        assert!(app.clock.is_due(Instant::now()));
    }

    // -- apply_fetch ---------------------------------------------------------

    #[test]
    fn successful_fetch_replaces_items() {
        let mut app = app();
        let now = Instant::now();
        app.apply_fetch(Ok(sample_items()), now);

        assert_eq!(app.store.len(), 3);
        assert_eq!(app.store.current().unwrap().title, "New");
        assert_eq!(app.status, "Fetched 3 items");
        assert!(!app.clock.is_due(now));
    }

    #[test]
    fn failed_fetch_keeps_previous_items() {
        let mut app = app();
        let now = Instant::now();
        app.apply_fetch(Ok(sample_items()), now);
        app.select_older();

        app.apply_fetch(
            Err(FeedError::EmptyResult {
                source_name: "feed".into(),
            }),
            now,
        );

        assert_eq!(app.store.len(), 3);
        assert_eq!(app.store.current().unwrap().title, "Mid", "position is kept");
        assert!(app.status.starts_with("Error:"));
        assert!(!app.clock.is_due(now), "failure waits for the next interval");
    }

    #[test]
    fn second_fetch_replaces_wholesale() {
        let mut app = app();
        let now = Instant::now();
        app.apply_fetch(Ok(sample_items()), now);
        app.apply_fetch(Ok(vec![make_item("Only")]), now);

        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.current().unwrap().title, "Only");
    }

    // -- navigation ----------------------------------------------------------

    #[test]
    fn navigation_on_empty_is_noop() {
        let mut app = app();
        app.select_older();
        app.select_newer();
        assert_eq!(app.store.index(), 0);
    }

    #[test]
    fn older_then_newer() {
        let mut app = app();
        app.apply_fetch(Ok(sample_items()), Instant::now());

        app.select_older();
        app.select_older();
        app.select_older();
        assert_eq!(app.store.current().unwrap().title, "Old");

        app.select_newer();
        assert_eq!(app.store.current().unwrap().title, "Mid");
    }

    #[test]
    fn toggle_link_flips() {
        let mut app = app();
        app.toggle_link();
        assert!(app.show_link);
        app.toggle_link();
        assert!(!app.show_link);
    }
}
