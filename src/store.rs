//! The reader's article list and cursor.

use crate::source::FeedItem;

/// Articles currently on display plus the index of the one being shown.
///
/// The list is only ever swapped as a whole, so a failed refresh leaves the
/// previous articles (and position) untouched.
#[derive(Debug, Default)]
pub struct FeedStore {
    items: Vec<FeedItem>,
    index: usize,
}

impl FeedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a freshly parsed list and jump back to the newest entry.
    pub fn replace(&mut self, items: Vec<FeedItem>) {
        self.items = items;
        self.index = 0;
    }

    pub fn current(&self) -> Option<&FeedItem> {
        self.items.get(self.index)
    }

    /// Move the cursor by `delta`, clamped to the list bounds.
    ///
    /// Returns whether the position changed.
    pub fn advance(&mut self, delta: isize) -> bool {
        if self.items.is_empty() {
            return false;
        }
        let last = self.items.len() - 1;
        let next = self.index.saturating_add_signed(delta).min(last);
        let moved = next != self.index;
        self.index = next;
        moved
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<FeedItem> {
        (0..n)
            .map(|i| FeedItem::new(format!("Item {i}"), "", "").unwrap())
            .collect()
    }

    #[test]
    fn new_store_is_empty() {
        let store = FeedStore::new();
        assert!(store.is_empty());
        assert!(store.current().is_none());
    }

    #[test]
    fn replace_resets_cursor() {
        let mut store = FeedStore::new();
        store.replace(items(3));
        store.advance(2);
        assert_eq!(store.index(), 2);

        store.replace(items(5));
        assert_eq!(store.index(), 0);
        assert_eq!(store.len(), 5);
        assert_eq!(store.current().unwrap().title, "Item 0");
    }

    #[test]
    fn advance_moves_both_ways() {
        let mut store = FeedStore::new();
        store.replace(items(3));

        assert!(store.advance(1));
        assert_eq!(store.current().unwrap().title, "Item 1");
        assert!(store.advance(-1));
        assert_eq!(store.index(), 0);
    }

    #[test]
    fn advance_clamps_at_edges() {
        let mut store = FeedStore::new();
        store.replace(items(3));

        assert!(!store.advance(-1));
        assert_eq!(store.index(), 0);

        store.advance(10);
        assert_eq!(store.index(), 2);
        assert!(!store.advance(1));
    }

    #[test]
    fn advance_on_empty_is_noop() {
        let mut store = FeedStore::new();
        assert!(!store.advance(1));
        assert_eq!(store.index(), 0);
    }
}
