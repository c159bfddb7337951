//! RemoteCollectionSource Trait
//!
//! Abstraction for data sources that resolve one offset/limit window at a time.

use super::window::PaginationWindow;
use crate::error::Result;
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;

/// One page request: the window plus the view's opaque filter values
#[derive(Debug, Clone, Serialize)]
pub struct PageQuery<F> {
    #[serde(flatten)]
    pub window: PaginationWindow,
    #[serde(flatten)]
    pub filter: F,
}

impl<F> PageQuery<F> {
    pub fn new(window: PaginationWindow, filter: F) -> Self {
        Self { window, filter }
    }
}

/// Filter for collections that take no parameters besides the window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NoFilter;

/// Trait for resolving pages of a remote collection
pub trait RemoteCollectionSource: Send + Sync + 'static {
    type Item: Clone + Send + Sync + 'static;
    type Filter: Clone + Send + Sync + 'static;

    /// Fetch at most `query.window.limit` items starting at `query.window.offset`
    fn fetch_page(
        &self,
        query: &PageQuery<Self::Filter>,
    ) -> impl Future<Output = Result<Vec<Self::Item>>> + Send;
}

impl<S: RemoteCollectionSource> RemoteCollectionSource for Arc<S> {
    type Item = S::Item;
    type Filter = S::Filter;

    fn fetch_page(
        &self,
        query: &PageQuery<Self::Filter>,
    ) -> impl Future<Output = Result<Vec<Self::Item>>> + Send {
        (**self).fetch_page(query)
    }
}
