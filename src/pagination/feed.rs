//! Paged Feed
//!
//! Sequential driver pairing a [`PagedListState`] with the source that fills it.

use super::accumulator::Identified;
use super::list_state::{PageOutcome, PageTicket, PagedListState};
use super::source::{PageQuery, RemoteCollectionSource};
use super::window::PageLimit;

/// An infinitely scrolled collection bound to its source and filter
pub struct PagedFeed<S: RemoteCollectionSource> {
    source: S,
    filter: S::Filter,
    state: PagedListState<S::Item>,
}

impl<S: RemoteCollectionSource> PagedFeed<S> {
    /// Mount a feed; nothing is fetched until `load_first`
    pub fn new(source: S, filter: S::Filter, limit: PageLimit) -> Self {
        Self {
            source,
            filter,
            state: PagedListState::mount(limit),
        }
    }

    pub fn state(&self) -> &PagedListState<S::Item> {
        &self.state
    }

    pub fn items(&self) -> &[S::Item] {
        self.state.items()
    }

    pub fn has_more(&self) -> bool {
        self.state.has_more()
    }

    pub fn filter(&self) -> &S::Filter {
        &self.filter
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch the first window
    pub async fn load_first(&mut self) -> Option<PageOutcome> {
        let ticket = self.state.begin_fetch()?;
        Some(self.run(ticket).await)
    }

    /// Fetch the next window if the last page was full
    pub async fn load_more(&mut self) -> Option<PageOutcome> {
        let ticket = self.state.request_more()?;
        Some(self.run(ticket).await)
    }

    /// Re-request the window whose fetch failed
    pub async fn retry(&mut self) -> Option<PageOutcome> {
        let ticket = self.state.retry()?;
        Some(self.run(ticket).await)
    }

    /// Keep loading until the source is exhausted or a fetch fails
    ///
    /// Returns the outcome of the last request issued, if any.
    pub async fn load_all(&mut self) -> Option<PageOutcome> {
        let mut last = self.load_first().await;
        while last != Some(PageOutcome::Failed) {
            match self.load_more().await {
                Some(outcome) => last = Some(outcome),
                None => break,
            }
        }
        last
    }

    /// Replace the filter and start over at offset 0
    pub fn set_filter(&mut self, filter: S::Filter) {
        self.filter = filter;
        self.state.remount();
    }

    async fn run(&mut self, ticket: PageTicket) -> PageOutcome {
        let query = PageQuery::new(ticket.window, self.filter.clone());
        match self.source.fetch_page(&query).await {
            Ok(items) => self.state.apply_page(ticket, items),
            Err(e) => self.state.apply_error(ticket, e.to_string()),
        }
    }
}

impl<S> PagedFeed<S>
where
    S: RemoteCollectionSource,
    S::Item: Identified,
{
    pub fn duplicate_ids(&self) -> Vec<&str> {
        self.state.duplicate_ids()
    }
}
