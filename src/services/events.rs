//! Feed Events
//!
//! Messages sent from fetches running on tokio back to the list that issued
//! them.

use crate::pagination::PageTicket;
use std::sync::Arc;

/// Event emitted by a spawned page fetch
#[derive(Debug, Clone)]
pub enum FeedEvent<T> {
    /// A page request finished
    PageLoaded {
        ticket: PageTicket,
        /// Items on success, the error message on failure
        result: std::result::Result<Vec<T>, Arc<str>>,
    },
}

impl<T> FeedEvent<T> {
    /// Ticket of the request this event answers
    pub fn ticket(&self) -> PageTicket {
        match self {
            Self::PageLoaded { ticket, .. } => *ticket,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::PageLoaded { result: Err(_), .. })
    }
}
