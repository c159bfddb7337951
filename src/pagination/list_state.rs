//! Paged List State
//!
//! Per-view state for an infinitely scrolled collection: the pagination
//! controller, the accumulated items, and the bookkeeping that keeps late or
//! out-of-order responses from touching the list.
//!
//! Every mount gets a fresh [`FeedId`]. Requests carry a [`PageTicket`]
//! naming the feed and the window they were issued for; a response is applied
//! only if both still match, so a fetch that resolves after its view was
//! unmounted (or remounted with new filters) is dropped.

use super::accumulator::{AccumulatedList, Identified};
use super::window::{PageLimit, PaginationController, PaginationWindow};
use std::sync::Arc;
use uuid::Uuid;

/// Identity of one mounted list instance
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct FeedId(Uuid);

impl FeedId {
    /// Allocate a new feed identity
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FeedId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for FeedId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tag attached to a page request
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct PageTicket {
    pub feed: FeedId,
    pub window: PaginationWindow,
}

/// List loading state
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A page request is in flight
    Loading,
    /// Last request succeeded
    Loaded,
    /// Last request failed; the window is unchanged
    Error(Arc<str>),
}

impl LoadState {
    /// Check if currently loading
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Check if loaded successfully
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded)
    }

    /// Error message of the last failed request
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Result of handing a response to the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    /// Page appended
    Applied { received: usize, has_more: bool },
    /// Response belonged to another feed or window and was dropped
    Stale,
    /// Failure recorded; retry re-requests the same window
    Failed,
}

/// State of one infinitely scrolled list
#[derive(Debug, Clone)]
pub struct PagedListState<T> {
    feed: FeedId,
    controller: PaginationController,
    list: AccumulatedList<T>,
    load_state: LoadState,
    /// Window of the request currently in flight
    pending: Option<PaginationWindow>,
    /// Whether the controller's current window has been fetched successfully
    window_loaded: bool,
}

impl<T> PagedListState<T> {
    /// Mount a new list with a fixed page size
    pub fn mount(limit: PageLimit) -> Self {
        let feed = FeedId::new();
        tracing::debug!(%feed, %limit, "Mounting paged list");
        Self {
            feed,
            controller: PaginationController::initialize(limit),
            list: AccumulatedList::new(),
            load_state: LoadState::Idle,
            pending: None,
            window_loaded: false,
        }
    }

    // ==================== Getters ====================

    pub fn feed_id(&self) -> FeedId {
        self.feed
    }

    pub fn items(&self) -> &[T] {
        self.list.items()
    }

    pub fn list(&self) -> &AccumulatedList<T> {
        &self.list
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn window(&self) -> PaginationWindow {
        self.controller.window()
    }

    pub fn offset(&self) -> usize {
        self.controller.offset()
    }

    pub fn limit(&self) -> PageLimit {
        self.controller.limit()
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether a scroll to the end should request another page
    pub fn has_more(&self) -> bool {
        self.controller.has_more()
    }

    /// The ticket currently awaited, if any
    pub fn pending_ticket(&self) -> Option<PageTicket> {
        self.pending.map(|window| PageTicket {
            feed: self.feed,
            window,
        })
    }

    // ==================== Requests ====================

    /// Request the current window if it has not been loaded yet
    ///
    /// Used for the initial fetch and for retrying after a failure.
    pub fn begin_fetch(&mut self) -> Option<PageTicket> {
        if self.pending.is_some() || self.window_loaded {
            return None;
        }
        let window = self.controller.window();
        self.pending = Some(window);
        self.load_state = LoadState::Loading;
        Some(PageTicket {
            feed: self.feed,
            window,
        })
    }

    /// Retry the current window after a failed fetch
    pub fn retry(&mut self) -> Option<PageTicket> {
        if self.load_state.error().is_none() {
            return None;
        }
        self.begin_fetch()
    }

    /// Advance to the next window and request it
    ///
    /// Returns `None` while a fetch is in flight, before the current window
    /// has loaded, or once the collection is exhausted.
    pub fn request_more(&mut self) -> Option<PageTicket> {
        if self.pending.is_some() || !self.window_loaded {
            return None;
        }
        if !self.controller.load_more() {
            return None;
        }
        self.window_loaded = false;
        self.begin_fetch()
    }

    // ==================== Responses ====================

    fn accepts(&self, ticket: &PageTicket) -> bool {
        if ticket.feed != self.feed {
            tracing::debug!(
                ticket_feed = %ticket.feed,
                feed = %self.feed,
                "Dropping response for unmounted feed"
            );
            return false;
        }
        if self.pending != Some(ticket.window) {
            tracing::debug!(
                offset = ticket.window.offset,
                pending = ?self.pending,
                "Dropping response for a window that is not pending"
            );
            return false;
        }
        true
    }

    /// Append a fetched page
    pub fn apply_page(&mut self, ticket: PageTicket, mut items: Vec<T>) -> PageOutcome {
        if !self.accepts(&ticket) {
            return PageOutcome::Stale;
        }
        let limit = ticket.window.limit.get();
        if items.len() > limit {
            tracing::warn!(
                received = items.len(),
                limit,
                "Source returned more items than requested, truncating"
            );
            items.truncate(limit);
        }

        let received = items.len();
        self.list.extend_page(items);
        self.controller.record_page(received);
        self.pending = None;
        self.window_loaded = true;
        self.load_state = LoadState::Loaded;

        PageOutcome::Applied {
            received,
            has_more: self.controller.has_more(),
        }
    }

    /// Record a failed fetch, leaving the window where it is
    pub fn apply_error(&mut self, ticket: PageTicket, message: impl Into<Arc<str>>) -> PageOutcome {
        if !self.accepts(&ticket) {
            return PageOutcome::Stale;
        }
        let message = message.into();
        tracing::warn!(offset = ticket.window.offset, error = %message, "Page fetch failed");
        self.pending = None;
        self.load_state = LoadState::Error(message);
        PageOutcome::Failed
    }

    // ==================== Lifecycle ====================

    /// Start over at offset 0 as a new feed, keeping the page size
    ///
    /// Anything still in flight for the previous feed is dropped on arrival.
    pub fn remount(&mut self) {
        let limit = self.controller.limit();
        *self = Self::mount(limit);
    }
}

impl<T: Identified> PagedListState<T> {
    /// Ids fetched more than once because the collection shifted between pages
    pub fn duplicate_ids(&self) -> Vec<&str> {
        self.list.duplicate_ids()
    }
}
