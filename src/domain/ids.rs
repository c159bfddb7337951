//! Identifiers - Server-Assigned Entity Ids

use serde::{Deserialize, Serialize};
use std::sync::Arc;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Arc<str>);

        impl $name {
            pub fn new(id: impl Into<Arc<str>>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::new(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Lobbying client
    ClientId
);
entity_id!(
    /// Workspace grouping clients inside a firm
    WorkspaceId
);
entity_id!(
    /// Tenant firm
    FirmId
);
entity_id!(UserId);
entity_id!(
    /// AI prompt template
    PromptId
);
entity_id!(NoteId);
entity_id!(DocumentId);
entity_id!(TaskId);
entity_id!(CompletionId);
entity_id!(RssEntryId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = ClientId::from("c-42");
        assert_eq!(serde_json::to_string(&id).expect("serialize"), "\"c-42\"");
        let back: ClientId = serde_json::from_str("\"c-42\"").expect("deserialize");
        assert_eq!(back, id);
    }
}
