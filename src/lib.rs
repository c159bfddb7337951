//! LobbyDesk Client Library
//!
//! Client-side core of the LobbyDesk workspace: offset-paginated, infinitely
//! scrolled collections fetched from the GraphQL backend, the session
//! selection the views read their filters from, and the small pieces of
//! domain logic the front-end owns.

pub mod config;
pub mod constants;
pub mod domain;
pub mod error;
pub mod helpers;
pub mod pagination;
pub mod services;
pub mod state;
