//! Session Settings
//!
//! The selections a signed-in user carries between views (firm, workspace,
//! client, prompt). Passed explicitly to whoever needs it and mutated only
//! through [`SessionSettings::reduce`].

use crate::domain::{ClientId, FirmId, PromptId, User, UserId, WorkspaceId};
use crate::error::{Error, Result};
use crate::helpers::get_or_create_config_dir;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Mutations applied to the session
#[derive(Debug, Clone)]
pub enum SettingsAction {
    /// Signed in (or `me` refreshed)
    Login(User),
    SelectWorkspace(WorkspaceId),
    SelectClient(ClientId),
    SelectPrompt(PromptId),
    /// Drop every selection
    Logout,
}

/// Persisted session state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSettings {
    timezone: Option<String>,
    user_id: Option<UserId>,
    firm_id: Option<FirmId>,
    workspace_id: Option<WorkspaceId>,
    client_id: Option<ClientId>,
    prompt_id: Option<PromptId>,
}

fn get_session_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    Ok(config_dir.join("session.toml"))
}

impl SessionSettings {
    /// Create new default state
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the session from the config directory
    pub fn try_load() -> Result<Self> {
        Self::load_from(&get_session_path()?)
    }

    /// Load the session from a file; missing or empty files yield defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }
        info!(path = ?path, "Loading session file");
        let value = std::fs::read_to_string(path)?;
        if value.trim().is_empty() {
            return Ok(Self::new());
        }
        let state: Self = toml::from_str(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse session file");
            e
        })?;
        Ok(state)
    }

    /// Save to the config directory
    pub fn save(&self) -> Result<()> {
        self.save_to(&get_session_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let value = toml::to_string(self)?;
        std::fs::write(path, value)?;
        Ok(())
    }

    // ==================== Reducer ====================

    /// Apply one action
    ///
    /// A new workspace invalidates the client and prompt chosen inside the old
    /// one; a new client invalidates the prompt.
    pub fn reduce(&mut self, action: SettingsAction) {
        match action {
            SettingsAction::Login(user) => {
                if self.user_id.as_ref() != Some(&user.id) {
                    // Another account: nothing selected earlier applies
                    self.reset();
                }
                self.timezone = Some(user.timezone).filter(|tz| !tz.is_empty());
                self.firm_id = Some(user.firm_id);
                self.user_id = Some(user.id);
            }
            SettingsAction::SelectWorkspace(workspace_id) => {
                if self.workspace_id.as_ref() != Some(&workspace_id) {
                    self.workspace_id = Some(workspace_id);
                    self.client_id = None;
                    self.prompt_id = None;
                }
            }
            SettingsAction::SelectClient(client_id) => {
                if self.client_id.as_ref() != Some(&client_id) {
                    self.client_id = Some(client_id);
                    self.prompt_id = None;
                }
            }
            SettingsAction::SelectPrompt(prompt_id) => {
                self.prompt_id = Some(prompt_id);
            }
            SettingsAction::Logout => self.reset(),
        }
    }

    /// Return to the signed-out state
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // ==================== Getters ====================

    pub fn timezone(&self) -> &str {
        self.timezone.as_deref().unwrap_or("UTC")
    }

    pub fn user_id(&self) -> Option<&UserId> {
        self.user_id.as_ref()
    }

    pub fn firm_id(&self) -> Option<&FirmId> {
        self.firm_id.as_ref()
    }

    pub fn workspace_id(&self) -> Option<&WorkspaceId> {
        self.workspace_id.as_ref()
    }

    pub fn client_id(&self) -> Option<&ClientId> {
        self.client_id.as_ref()
    }

    pub fn prompt_id(&self) -> Option<&PromptId> {
        self.prompt_id.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user_id.is_some()
    }

    // ==================== Guards ====================

    pub fn require_workspace(&self) -> Result<&WorkspaceId> {
        self.workspace_id
            .as_ref()
            .ok_or(Error::MissingSelection { what: "workspace" })
    }

    pub fn require_client(&self) -> Result<&ClientId> {
        self.client_id
            .as_ref()
            .ok_or(Error::MissingSelection { what: "client" })
    }

    pub fn require_prompt(&self) -> Result<&PromptId> {
        self.prompt_id
            .as_ref()
            .ok_or(Error::MissingSelection { what: "prompt" })
    }

    pub fn require_firm(&self) -> Result<&FirmId> {
        self.firm_id
            .as_ref()
            .ok_or(Error::MissingSelection { what: "firm" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Permission;

    fn user(id: &str) -> User {
        User {
            id: UserId::from(id),
            email: format!("{id}@firm.test"),
            first_name: "Test".into(),
            last_name: "User".into(),
            firm_id: FirmId::from("firm-1"),
            timezone: "America/Chicago".into(),
            avatar: None,
            sample_permission: Permission::Viewer,
            firm_permission: Permission::Editor,
        }
    }

    fn logged_in() -> SessionSettings {
        let mut settings = SessionSettings::new();
        settings.reduce(SettingsAction::Login(user("u1")));
        settings.reduce(SettingsAction::SelectWorkspace("w1".into()));
        settings.reduce(SettingsAction::SelectClient("c1".into()));
        settings.reduce(SettingsAction::SelectPrompt("p1".into()));
        settings
    }

    #[test]
    fn test_login_sets_identity() {
        let settings = logged_in();
        assert!(settings.is_logged_in());
        assert_eq!(settings.timezone(), "America/Chicago");
        assert_eq!(settings.firm_id().map(FirmId::as_str), Some("firm-1"));
        assert_eq!(settings.prompt_id().map(PromptId::as_str), Some("p1"));
    }

    #[test]
    fn test_workspace_change_clears_client_and_prompt() {
        let mut settings = logged_in();
        settings.reduce(SettingsAction::SelectWorkspace("w1".into()));
        assert!(settings.client_id().is_some());

        settings.reduce(SettingsAction::SelectWorkspace("w2".into()));
        assert!(settings.client_id().is_none());
        assert!(settings.prompt_id().is_none());
        assert!(matches!(
            settings.require_client(),
            Err(Error::MissingSelection { what: "client" })
        ));
    }

    #[test]
    fn test_client_change_clears_prompt() {
        let mut settings = logged_in();
        settings.reduce(SettingsAction::SelectClient("c2".into()));
        assert_eq!(settings.require_client().expect("client").as_str(), "c2");
        assert!(settings.prompt_id().is_none());
    }

    #[test]
    fn test_relogin_as_other_user_resets() {
        let mut settings = logged_in();
        settings.reduce(SettingsAction::Login(user("u1")));
        assert!(settings.client_id().is_some());

        settings.reduce(SettingsAction::Login(user("u2")));
        assert!(settings.workspace_id().is_none());
        assert_eq!(settings.user_id().map(UserId::as_str), Some("u2"));
    }

    #[test]
    fn test_logout_resets() {
        let mut settings = logged_in();
        settings.reduce(SettingsAction::Logout);
        assert_eq!(settings, SessionSettings::default());
        assert_eq!(settings.timezone(), "UTC");
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("lobbydesk-session-{}.toml", uuid::Uuid::new_v4()));
        let settings = logged_in();
        settings.save_to(&path).expect("save");
        let loaded = SessionSettings::load_from(&path).expect("load");
        assert_eq!(loaded, settings);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_or_empty_file_is_default() {
        let path = std::env::temp_dir().join(format!("lobbydesk-missing-{}.toml", uuid::Uuid::new_v4()));
        assert_eq!(SessionSettings::load_from(&path).expect("load"), SessionSettings::default());
        std::fs::write(&path, "  \n").expect("write");
        assert_eq!(SessionSettings::load_from(&path).expect("load"), SessionSettings::default());
        std::fs::remove_file(&path).ok();
    }
}
