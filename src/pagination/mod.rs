//! Pagination
//!
//! Offset/limit pagination for infinitely scrolled collections.
//!
//! ## Flow
//!
//! ```text
//! mount(limit) ──► begin_fetch() ──► source.fetch_page(skip=0)
//!                                            │
//!                                            ▼
//!                              apply_page(ticket, items)
//!                                            │
//!            scroll reaches end, has_more    │
//!                 request_more() ◄───────────┘
//!                        │
//!                        ▼
//!             source.fetch_page(skip += limit) ...
//! ```
//!
//! A short page ends the feed. Changing a view's filters remounts it.

mod accumulator;
mod feed;
mod list_state;
#[cfg(test)]
mod memory;
mod source;
mod window;

pub use accumulator::*;
pub use feed::*;
pub use list_state::*;
#[cfg(test)]
pub use memory::*;
pub use source::*;
pub use window::*;
