//! Service Layer
//!
//! Async access to the backend and the plumbing that carries results back to
//! synchronous view state.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     GraphqlGateway                          │
//! │          (reqwest, {data, errors} decoding)                 │
//! └─────────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │        GraphqlCollection<T, F>: RemoteCollectionSource      │
//! └─────────────────────────────────────────────────────────────┘
//!                            │
//!            ┌───────────────┴────────────────┐
//!            ▼                                ▼
//!   PagedFeed (awaits inline)      FeedDriver (tokio + FeedEvent)
//! ```

mod collections;
mod events;
mod feed_driver;
mod gateway;
mod runtime;

pub use collections::*;
pub use events::*;
pub use feed_driver::*;
pub use gateway::*;
pub use runtime::*;
