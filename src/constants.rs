//! Client Constants
//!
//! Centralized page sizes and limits shared across views.

/// Sidebar workspace and client pickers
pub const SIDEBAR_PAGE_SIZE: usize = 6;

/// Dashboard cards (RSS entries, notes, documents, completions)
pub const CARD_PAGE_SIZE: usize = 9;

/// Client picker on the workspace page
pub const WORKSPACE_CLIENTS_PAGE_SIZE: usize = 5;

/// Dashboard workspace list and the internal admin lists
pub const ADMIN_PAGE_SIZE: usize = 10;

/// Rough characters-per-token ratio used for model selection
pub const CHARS_PER_TOKEN: usize = 4;

/// Context window of the small completion model
pub const SMALL_MODEL_CONTEXT_TOKENS: usize = 4096;

/// Backend request timeout
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Capacity of the feed event channel
pub const FEED_EVENT_CAPACITY: usize = 256;

/// Application identifiers for platform directories
pub const APP_QUALIFIER: &str = "com";
pub const APP_ORGANIZATION: &str = "lobbydesk";
pub const APP_NAME: &str = "lobbydesk";
