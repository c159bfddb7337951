//! Pagination Window
//!
//! Offset/limit window and the controller that advances it.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Page size, guaranteed to be greater than zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageLimit(NonZeroUsize);

impl PageLimit {
    /// Create a page limit, rejecting zero
    pub fn new(limit: usize) -> Result<Self> {
        NonZeroUsize::new(limit)
            .map(Self)
            .ok_or(Error::InvalidPageLimit { limit })
    }

    /// Get the limit as a plain count
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<usize> for PageLimit {
    type Error = Error;

    fn try_from(limit: usize) -> Result<Self> {
        Self::new(limit)
    }
}

impl From<PageLimit> for usize {
    fn from(limit: PageLimit) -> Self {
        limit.get()
    }
}

impl std::fmt::Display for PageLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One offset/limit window over a remote collection
///
/// Serialized with the backend's `skip`/`take` argument names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaginationWindow {
    #[serde(rename = "skip")]
    pub offset: usize,
    #[serde(rename = "take")]
    pub limit: PageLimit,
}

impl PaginationWindow {
    /// First window of a collection
    pub fn first(limit: PageLimit) -> Self {
        Self { offset: 0, limit }
    }

    /// The window directly after this one
    pub fn next(self) -> Self {
        Self {
            offset: self.offset + self.limit.get(),
            limit: self.limit,
        }
    }
}

/// Whether the collection behind a controller may still yield items
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaginationPhase {
    /// Last page was full (or nothing fetched yet)
    #[default]
    HasMore,
    /// Last page was short; terminal for this controller
    Exhausted,
}

/// Owns one window and the monotonic advancement rule
#[derive(Debug, Clone)]
pub struct PaginationController {
    window: PaginationWindow,
    phase: PaginationPhase,
}

impl PaginationController {
    /// Start at offset 0 with a fixed limit
    pub fn initialize(limit: PageLimit) -> Self {
        Self {
            window: PaginationWindow::first(limit),
            phase: PaginationPhase::HasMore,
        }
    }

    /// Advance the offset by one page
    ///
    /// Returns `false` and leaves the window untouched once the collection is
    /// exhausted, so repeated scroll events cannot grow the offset.
    pub fn load_more(&mut self) -> bool {
        if self.phase == PaginationPhase::Exhausted {
            tracing::debug!(offset = self.window.offset, "load_more ignored, collection exhausted");
            return false;
        }
        self.window = self.window.next();
        true
    }

    /// Record the size of the page fetched for the current window
    pub fn record_page(&mut self, len: usize) {
        if len < self.window.limit.get() {
            self.phase = PaginationPhase::Exhausted;
        }
    }

    // ==================== Getters ====================

    pub fn window(&self) -> PaginationWindow {
        self.window
    }

    pub fn offset(&self) -> usize {
        self.window.offset
    }

    pub fn limit(&self) -> PageLimit {
        self.window.limit
    }

    pub fn phase(&self) -> PaginationPhase {
        self.phase
    }

    pub fn has_more(&self) -> bool {
        self.phase == PaginationPhase::HasMore
    }
}
