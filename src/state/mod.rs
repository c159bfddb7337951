//! State - Client-Side Application State
//!
//! Explicit, serializable state objects handed to the views that need them.

pub mod settings;

pub use settings::{SessionSettings, SettingsAction};
