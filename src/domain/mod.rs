//! Domain - Pure Data Structures and Backend Types
//!
//! These types don't depend on the transport and represent the business domain.

pub mod collection;
pub mod completion;
pub mod entities;
pub mod extension;
pub mod ids;
pub mod task_board;

pub use collection::CollectionKind;
pub use completion::{AiProvider, CompletionRequest, CurrentModels, Model, estimate_tokens};
pub use entities::*;
pub use extension::{FileCategory, FileExtension, ImageExtension};
pub use ids::*;
pub use task_board::{BoardSlot, TaskBoard, TaskStatus};
