//! Feed Driver
//!
//! Owns a [`PagedListState`] for a view whose thread must not wait on the
//! network. Fetches run on the tokio runtime and answer with a
//! [`FeedEvent`] on a crossbeam channel; the owner drains the channel on its
//! own schedule.
//!
//! ```text
//! scroll to end ──► load_more() ──► spawn_in_tokio(fetch_page)
//!                                          │
//!                                          ▼
//!                           FeedEvent::PageLoaded { ticket, result }
//!                                          │
//! drain() ◄────────── crossbeam channel ◄──┘
//!    │
//!    ▼
//! PagedListState::apply_page / apply_error (stale tickets dropped)
//! ```

use super::events::FeedEvent;
use super::runtime::spawn_in_tokio;
use crate::constants::FEED_EVENT_CAPACITY;
use crate::pagination::{
    Identified, PageLimit, PageOutcome, PageQuery, PageTicket, PagedListState,
    RemoteCollectionSource,
};
use crossbeam_channel::{Receiver, Sender};
use std::sync::Arc;
use std::time::Duration;

/// Non-blocking paged list bound to a source
pub struct FeedDriver<S: RemoteCollectionSource> {
    source: Arc<S>,
    filter: S::Filter,
    state: PagedListState<S::Item>,
    tx: Sender<FeedEvent<S::Item>>,
    rx: Receiver<FeedEvent<S::Item>>,
}

impl<S: RemoteCollectionSource> FeedDriver<S> {
    /// Mount a driver; call [`FeedDriver::start`] to request the first page
    pub fn new(source: Arc<S>, filter: S::Filter, limit: PageLimit) -> Self {
        let (tx, rx) = crossbeam_channel::bounded(FEED_EVENT_CAPACITY);
        Self {
            source,
            filter,
            state: PagedListState::mount(limit),
            tx,
            rx,
        }
    }

    pub fn state(&self) -> &PagedListState<S::Item> {
        &self.state
    }

    pub fn items(&self) -> &[S::Item] {
        self.state.items()
    }

    pub fn filter(&self) -> &S::Filter {
        &self.filter
    }

    /// Receiver for integrating with an external event loop
    pub fn events(&self) -> Receiver<FeedEvent<S::Item>> {
        self.rx.clone()
    }

    // ==================== Requests ====================

    /// Request the first window; returns false if nothing was spawned
    pub fn start(&mut self) -> bool {
        match self.state.begin_fetch() {
            Some(ticket) => {
                self.spawn_fetch(ticket);
                true
            }
            None => false,
        }
    }

    /// Request the next window if the list is idle and not exhausted
    pub fn load_more(&mut self) -> bool {
        match self.state.request_more() {
            Some(ticket) => {
                self.spawn_fetch(ticket);
                true
            }
            None => false,
        }
    }

    /// Re-request the window whose fetch failed
    pub fn retry(&mut self) -> bool {
        match self.state.retry() {
            Some(ticket) => {
                self.spawn_fetch(ticket);
                true
            }
            None => false,
        }
    }

    /// Replace the filter and start over as a new feed
    pub fn set_filter(&mut self, filter: S::Filter) -> bool {
        self.filter = filter;
        self.state.remount();
        self.start()
    }

    fn spawn_fetch(&self, ticket: PageTicket) {
        let source = Arc::clone(&self.source);
        let query = PageQuery::new(ticket.window, self.filter.clone());
        let tx = self.tx.clone();
        tracing::debug!(feed = %ticket.feed, offset = ticket.window.offset, "Spawning page fetch");

        spawn_in_tokio(async move {
            let result = source
                .fetch_page(&query)
                .await
                .map_err(|e| Arc::<str>::from(e.to_string()));
            if tx.send(FeedEvent::PageLoaded { ticket, result }).is_err() {
                tracing::debug!(feed = %ticket.feed, "Feed dropped before its page arrived");
            }
        });
    }

    // ==================== Events ====================

    /// Apply one event to the list
    pub fn apply(&mut self, event: FeedEvent<S::Item>) -> PageOutcome {
        match event {
            FeedEvent::PageLoaded {
                ticket,
                result: Ok(items),
            } => self.state.apply_page(ticket, items),
            FeedEvent::PageLoaded {
                ticket,
                result: Err(message),
            } => self.state.apply_error(ticket, message),
        }
    }

    /// Apply every event that has already arrived
    pub fn drain(&mut self) -> Vec<PageOutcome> {
        let events: Vec<_> = self.rx.try_iter().collect();
        events.into_iter().map(|event| self.apply(event)).collect()
    }

    /// Wait for the next event and apply it
    pub fn wait_next(&mut self, timeout: Duration) -> Option<PageOutcome> {
        // Never disconnected: self holds a sender
        self.rx.recv_timeout(timeout).ok().map(|event| self.apply(event))
    }
}

impl<S> FeedDriver<S>
where
    S: RemoteCollectionSource,
    S::Item: Identified,
{
    pub fn duplicate_ids(&self) -> Vec<&str> {
        self.state.duplicate_ids()
    }
}
