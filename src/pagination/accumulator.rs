//! Accumulated List
//!
//! Growing concatenation of every page fetched for one infinite-scroll view.
//!
//! Pages are appended as-is. Offset pagination drifts when the remote
//! collection changes between fetches: a deletion shifts later items one slot
//! left, so the next window skips one, and an insertion repeats one. The list
//! does not try to repair this; `duplicate_ids` exists so callers and tests
//! can observe it.

use ahash::AHashSet;

/// Anything carrying a server-assigned identifier
pub trait Identified {
    fn id(&self) -> &str;
}

/// Items fetched so far, in fetch order
#[derive(Debug, Clone)]
pub struct AccumulatedList<T> {
    items: Vec<T>,
    pages: usize,
}

impl<T> AccumulatedList<T> {
    /// Create an empty list
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            pages: 0,
        }
    }

    /// Append one fetched page
    pub fn extend_page(&mut self, page: Vec<T>) {
        self.items.extend(page);
        self.pages += 1;
    }

    /// Drop everything (remount)
    pub fn clear(&mut self) {
        self.items.clear();
        self.pages = 0;
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of pages appended
    pub fn page_count(&self) -> usize {
        self.pages
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: Identified> AccumulatedList<T> {
    /// Ids that appear more than once, in first-repeat order
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut seen = AHashSet::with_capacity(self.items.len());
        let mut reported = AHashSet::new();
        let mut duplicates = Vec::new();
        for item in &self.items {
            let id = item.id();
            if !seen.insert(id) && reported.insert(id) {
                duplicates.push(id);
            }
        }
        duplicates
    }

    /// Whether an id is already present
    pub fn contains_id(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id() == id)
    }
}

impl<T> Default for AccumulatedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row(String);

    impl Identified for Row {
        fn id(&self) -> &str {
            &self.0
        }
    }

    fn rows(ids: &[&str]) -> Vec<Row> {
        ids.iter().map(|id| Row(id.to_string())).collect()
    }

    #[test]
    fn test_empty_list() {
        let list: AccumulatedList<Row> = AccumulatedList::new();
        assert!(list.is_empty());
        assert_eq!(list.page_count(), 0);
        assert!(list.duplicate_ids().is_empty());
    }

    #[test]
    fn test_pages_concatenate_in_order() {
        let mut list = AccumulatedList::new();
        list.extend_page(rows(&["a", "b", "c"]));
        list.extend_page(rows(&["d", "e"]));
        list.extend_page(Vec::new());
        assert_eq!(list.len(), 5);
        assert_eq!(list.page_count(), 3);
        assert_eq!(list.items()[3], Row("d".into()));
    }

    #[test]
    fn test_duplicate_ids_reported_once() {
        let mut list = AccumulatedList::new();
        list.extend_page(rows(&["a", "b"]));
        list.extend_page(rows(&["b", "c", "b"]));
        assert_eq!(list.duplicate_ids(), vec!["b"]);
        assert_eq!(list.len(), 5);
        assert!(list.contains_id("c"));
    }
}
