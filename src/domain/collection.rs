//! Collections - Infinitely Scrolled Lists

use crate::constants::{
    ADMIN_PAGE_SIZE, CARD_PAGE_SIZE, SIDEBAR_PAGE_SIZE, WORKSPACE_CLIENTS_PAGE_SIZE,
};
use crate::error::{Error, Result};
use crate::pagination::PageLimit;

/// Every paged list the front-end shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    /// Workspace switcher in the dashboard sidebar
    SidebarWorkspaces,
    /// Client switcher in the dashboard sidebar
    SidebarClients,
    /// Workspace list on the dashboard landing page
    DashboardWorkspaces,
    /// Client picker on the workspace page
    WorkspaceClients,
    RssEntries,
    ClientNotes,
    ClientDocuments,
    Completions,
    ManageFirms,
    ManageWorkspaces,
    ManageUsers,
    ManageClients,
}

impl CollectionKind {
    pub const ALL: [CollectionKind; 12] = [
        Self::SidebarWorkspaces,
        Self::SidebarClients,
        Self::DashboardWorkspaces,
        Self::WorkspaceClients,
        Self::RssEntries,
        Self::ClientNotes,
        Self::ClientDocuments,
        Self::Completions,
        Self::ManageFirms,
        Self::ManageWorkspaces,
        Self::ManageUsers,
        Self::ManageClients,
    ];

    /// Page size the view mounts with
    pub fn default_page_size(self) -> usize {
        match self {
            Self::SidebarWorkspaces | Self::SidebarClients => SIDEBAR_PAGE_SIZE,
            Self::WorkspaceClients => WORKSPACE_CLIENTS_PAGE_SIZE,
            Self::RssEntries | Self::ClientNotes | Self::ClientDocuments | Self::Completions => {
                CARD_PAGE_SIZE
            }
            Self::DashboardWorkspaces
            | Self::ManageFirms
            | Self::ManageWorkspaces
            | Self::ManageUsers
            | Self::ManageClients => ADMIN_PAGE_SIZE,
        }
    }

    pub fn page_limit(self) -> Result<PageLimit> {
        PageLimit::new(self.default_page_size())
    }

    /// Query field the list is read from
    pub fn field(self) -> &'static str {
        match self {
            Self::SidebarWorkspaces | Self::DashboardWorkspaces | Self::ManageWorkspaces => {
                "getWorkspaces"
            }
            Self::SidebarClients | Self::WorkspaceClients | Self::ManageClients => "getClients",
            Self::RssEntries => "getMyRssEntries",
            Self::ClientNotes => "getNotes",
            Self::ClientDocuments => "getDocuments",
            Self::Completions => "getCompletions",
            Self::ManageFirms => "getFirms",
            Self::ManageUsers => "getUsers",
        }
    }

    /// Operation name declared in `query`
    pub fn operation_name(self) -> &'static str {
        match self {
            Self::SidebarWorkspaces | Self::DashboardWorkspaces | Self::ManageWorkspaces => {
                "GetWorkspaces"
            }
            Self::SidebarClients | Self::WorkspaceClients | Self::ManageClients => "GetClients",
            Self::RssEntries => "GetMyRssEntries",
            Self::ClientNotes => "GetNotes",
            Self::ClientDocuments => "GetDocuments",
            Self::Completions => "GetCompletions",
            Self::ManageFirms => "GetFirms",
            Self::ManageUsers => "GetUsers",
        }
    }

    /// GraphQL document for one page
    pub fn query(self) -> &'static str {
        match self {
            Self::SidebarWorkspaces | Self::DashboardWorkspaces | Self::ManageWorkspaces => {
                "query GetWorkspaces($skip: Int!, $take: Int!, $search: String) { \
                 getWorkspaces(skip: $skip, take: $take, search: $search) { id name firmId } }"
            }
            Self::SidebarClients | Self::ManageClients => {
                "query GetClients($skip: Int!, $take: Int!, $search: String) { \
                 getClients(skip: $skip, take: $take, search: $search) { id name workspaceId firmId } }"
            }
            Self::WorkspaceClients => {
                "query GetClients($skip: Int!, $take: Int!, $firmId: String, $workspaceId: String) { \
                 getClients(skip: $skip, take: $take, firmId: $firmId, workspaceId: $workspaceId) \
                 { id name workspaceId firmId } }"
            }
            Self::RssEntries => {
                "query GetMyRssEntries($skip: Int!, $take: Int!) { \
                 getMyRssEntries(skip: $skip, take: $take) { id title link time } }"
            }
            Self::ClientNotes => {
                "query GetNotes($skip: Int!, $take: Int!, $clientId: String!, $search: String) { \
                 getNotes(skip: $skip, take: $take, clientId: $clientId, search: $search) \
                 { id note createdAt } }"
            }
            Self::ClientDocuments => {
                "query GetDocuments($skip: Int!, $take: Int!, $clientId: String!, $workspaceId: String!) { \
                 getDocuments(skip: $skip, take: $take, clientId: $clientId, workspaceId: $workspaceId) \
                 { id displayName ext url } }"
            }
            Self::Completions => {
                "query GetCompletions($skip: Int!, $take: Int!, $promptId: String!) { \
                 getCompletions(skip: $skip, take: $take, promptId: $promptId) \
                 { id displayName createdAt text } }"
            }
            Self::ManageFirms => {
                "query GetFirms($skip: Int!, $take: Int!, $search: String) { \
                 getFirms(skip: $skip, take: $take, search: $search) { id name } }"
            }
            Self::ManageUsers => {
                "query GetUsers($skip: Int!, $take: Int!, $search: String) { \
                 getUsers(skip: $skip, take: $take, search: $search) \
                 { id email firstName lastName firmId timezone avatar samplePermission firmPermission } }"
            }
        }
    }

    /// Command-line name
    pub fn name(self) -> &'static str {
        match self {
            Self::SidebarWorkspaces => "sidebar-workspaces",
            Self::SidebarClients => "sidebar-clients",
            Self::DashboardWorkspaces => "workspaces",
            Self::WorkspaceClients => "workspace-clients",
            Self::RssEntries => "rss",
            Self::ClientNotes => "notes",
            Self::ClientDocuments => "documents",
            Self::Completions => "completions",
            Self::ManageFirms => "manage-firms",
            Self::ManageWorkspaces => "manage-workspaces",
            Self::ManageUsers => "manage-users",
            Self::ManageClients => "manage-clients",
        }
    }
}

impl std::str::FromStr for CollectionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| Error::Invalid {
                message: format!("Unknown collection: {s}"),
            })
    }
}
