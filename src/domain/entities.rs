//! Entities - Backend Result Types
//!
//! Explicit shapes for the list items the backend returns. Unknown fields are
//! ignored; missing required fields fail decoding at the boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::extension::FileExtension;
use super::ids::{
    ClientId, CompletionId, DocumentId, FirmId, NoteId, PromptId, RssEntryId, TaskId, UserId,
    WorkspaceId,
};
use super::task_board::TaskStatus;
use crate::pagination::Identified;

/// Permission level, used for both platform-wide and firm-scoped roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    Viewer,
    Editor,
    Manager,
    Admin,
}

impl Permission {
    /// Whether this level grants at least `required`
    pub fn allows(self, required: Permission) -> bool {
        self >= required
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub workspace_id: WorkspaceId,
    #[serde(default)]
    pub firm_id: Option<FirmId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub id: WorkspaceId,
    pub name: String,
    #[serde(default)]
    pub firm_id: Option<FirmId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Firm {
    pub id: FirmId,
    pub name: String,
}

/// A platform user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub firm_id: FirmId,
    #[serde(default)]
    pub timezone: String,
    #[serde(default)]
    pub avatar: Option<String>,
    /// Platform-wide role
    pub sample_permission: Permission,
    /// Role inside the user's firm
    pub firm_permission: Permission,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub note: String,
    pub created_at: DateTime<Utc>,
}

/// An uploaded client document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: DocumentId,
    pub display_name: String,
    pub ext: FileExtension,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RssEntry {
    pub id: RssEntryId,
    pub title: String,
    pub link: String,
    pub time: DateTime<Utc>,
}

/// A saved AI completion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Completion {
    pub id: CompletionId,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prompt {
    pub id: PromptId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub system_prompt: String,
}

/// A task board card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub objective: String,
    #[serde(default)]
    pub description: String,
    pub status: TaskStatus,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
}

macro_rules! identified {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Identified for $ty {
                fn id(&self) -> &str {
                    self.id.as_str()
                }
            }
        )*
    };
}

identified!(Client, Workspace, Firm, User, Note, Document, RssEntry, Completion, Prompt, Task);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_decodes_camel_case() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": "u1",
            "email": "a@b.c",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "firmId": "f1",
            "timezone": "America/New_York",
            "samplePermission": "VIEWER",
            "firmPermission": "ADMIN",
            "unused": 1
        }))
        .expect("decode user");
        assert_eq!(user.full_name(), "Ada Lovelace");
        assert!(user.firm_permission.allows(Permission::Manager));
        assert!(!user.sample_permission.allows(Permission::Editor));
        assert_eq!(user.id(), "u1");
    }

    #[test]
    fn test_unknown_enum_value_rejected() {
        let doc = serde_json::from_value::<Document>(serde_json::json!({
            "id": "d1",
            "displayName": "brief",
            "ext": "EXE"
        }));
        assert!(doc.is_err());
    }

    #[test]
    fn test_missing_required_field_rejected() {
        let client = serde_json::from_value::<Client>(serde_json::json!({ "id": "c1" }));
        assert!(client.is_err());
    }
}
