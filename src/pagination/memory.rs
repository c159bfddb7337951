//! In-Memory Source
//!
//! Vector-backed [`RemoteCollectionSource`] for exercising feeds without a
//! backend.

use super::source::{NoFilter, PageQuery, RemoteCollectionSource};
use super::window::PaginationWindow;
use crate::error::{Error, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

/// In-memory source over a shared vector
///
/// Mutations through `remove_where`/`insert` are visible to later fetches, which
/// makes offset drift reproducible.
pub struct VecSource<T> {
    rows: Arc<RwLock<Vec<T>>>,
    fail_next: AtomicBool,
}

impl<T: Clone + Send + Sync + 'static> VecSource<T> {
    /// Create a new VecSource
    pub fn new(rows: Vec<T>) -> Self {
        Self {
            rows: Arc::new(RwLock::new(rows)),
            fail_next: AtomicBool::new(false),
        }
    }

    /// Remove the first row matching the predicate
    pub fn remove_where(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        let mut rows = self.rows.write().ok()?;
        let index = rows.iter().position(predicate)?;
        Some(rows.remove(index))
    }

    /// Insert a row at the given position (clamped to the end)
    pub fn insert(&self, index: usize, row: T) {
        if let Ok(mut rows) = self.rows.write() {
            let index = index.min(rows.len());
            rows.insert(index, row);
        }
    }

    /// Make the next fetch fail once
    pub fn fail_next_fetch(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    fn slice(&self, window: PaginationWindow) -> Result<Vec<T>> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(Error::Backend {
                message: "simulated fetch failure".to_string(),
            });
        }
        let rows = self.rows.read().map_err(|_| Error::Invalid {
            message: "VecSource lock poisoned".to_string(),
        })?;
        Ok(rows
            .iter()
            .skip(window.offset)
            .take(window.limit.get())
            .cloned()
            .collect())
    }
}

impl<T: Clone + Send + Sync + 'static> RemoteCollectionSource for VecSource<T> {
    type Item = T;
    type Filter = NoFilter;

    async fn fetch_page(&self, query: &PageQuery<NoFilter>) -> Result<Vec<T>> {
        self.slice(query.window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::window::PageLimit;

    fn window(offset: usize, limit: usize) -> PaginationWindow {
        PaginationWindow {
            offset,
            limit: PageLimit::new(limit).expect("non-zero limit"),
        }
    }

    #[tokio::test]
    async fn test_vec_source_slices_windows() {
        let source = VecSource::new((0..13).collect::<Vec<u32>>());
        let first = source
            .fetch_page(&PageQuery::new(window(0, 9), NoFilter))
            .await
            .expect("page");
        let second = source
            .fetch_page(&PageQuery::new(window(9, 9), NoFilter))
            .await
            .expect("page");
        assert_eq!(first.len(), 9);
        assert_eq!(second, vec![9, 10, 11, 12]);
    }

    #[tokio::test]
    async fn test_vec_source_fails_once() {
        let source = VecSource::new(vec![1u32, 2, 3]);
        source.fail_next_fetch();
        let query = PageQuery::new(window(0, 2), NoFilter);
        assert!(source.fetch_page(&query).await.is_err());
        assert_eq!(source.fetch_page(&query).await.expect("page"), vec![1, 2]);
    }
}
