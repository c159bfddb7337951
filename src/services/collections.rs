//! GraphQL Collections
//!
//! [`RemoteCollectionSource`] implementations backed by the gateway, plus the
//! filter shapes each view passes through untouched.

use super::gateway::{GraphqlGateway, extract_list};
use crate::domain::{
    Client, ClientId, CollectionKind, Completion, Document, Firm, FirmId, Note, PromptId, RssEntry,
    User, Workspace, WorkspaceId,
};
use crate::error::{Error, Result};
use crate::pagination::{NoFilter, PageQuery, RemoteCollectionSource};
use crate::state::SessionSettings;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

// ==================== Filters ====================

/// Free-text search used by the admin lists and sidebars
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl SearchFilter {
    /// Blank input means no filter
    pub fn new(search: impl Into<String>) -> Self {
        let search = search.into();
        let trimmed = search.trim();
        Self {
            search: (!trimmed.is_empty()).then(|| trimmed.to_string()),
        }
    }
}

/// Clients of the selected firm and workspace
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceScope {
    pub firm_id: FirmId,
    pub workspace_id: WorkspaceId,
}

impl WorkspaceScope {
    pub fn from_session(session: &SessionSettings) -> Result<Self> {
        Ok(Self {
            firm_id: session.require_firm()?.clone(),
            workspace_id: session.require_workspace()?.clone(),
        })
    }
}

/// Documents of the selected client
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientScope {
    pub client_id: ClientId,
    pub workspace_id: WorkspaceId,
}

impl ClientScope {
    pub fn from_session(session: &SessionSettings) -> Result<Self> {
        Ok(Self {
            client_id: session.require_client()?.clone(),
            workspace_id: session.require_workspace()?.clone(),
        })
    }
}

/// Notes of the selected client, optionally searched
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotesFilter {
    pub client_id: ClientId,
    pub search: String,
}

impl NotesFilter {
    pub fn from_session(session: &SessionSettings, search: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client_id: session.require_client()?.clone(),
            search: search.into(),
        })
    }
}

/// Completions saved under the selected prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptScope {
    pub prompt_id: PromptId,
}

impl PromptScope {
    pub fn from_session(session: &SessionSettings) -> Result<Self> {
        Ok(Self {
            prompt_id: session.require_prompt()?.clone(),
        })
    }
}

// ==================== Source ====================

/// One paged GraphQL list
pub struct GraphqlCollection<T, F> {
    gateway: GraphqlGateway,
    kind: CollectionKind,
    _marker: PhantomData<fn() -> (T, F)>,
}

impl<T, F> GraphqlCollection<T, F> {
    fn with_kind(gateway: GraphqlGateway, kind: CollectionKind) -> Self {
        Self {
            gateway,
            kind,
            _marker: PhantomData,
        }
    }

    pub fn kind(&self) -> CollectionKind {
        self.kind
    }
}

impl GraphqlCollection<RssEntry, NoFilter> {
    pub fn rss_entries(gateway: GraphqlGateway) -> Self {
        Self::with_kind(gateway, CollectionKind::RssEntries)
    }
}

impl GraphqlCollection<Note, NotesFilter> {
    pub fn client_notes(gateway: GraphqlGateway) -> Self {
        Self::with_kind(gateway, CollectionKind::ClientNotes)
    }
}

impl GraphqlCollection<Document, ClientScope> {
    pub fn client_documents(gateway: GraphqlGateway) -> Self {
        Self::with_kind(gateway, CollectionKind::ClientDocuments)
    }
}

impl GraphqlCollection<Completion, PromptScope> {
    pub fn completions(gateway: GraphqlGateway) -> Self {
        Self::with_kind(gateway, CollectionKind::Completions)
    }
}

impl GraphqlCollection<Firm, SearchFilter> {
    pub fn firms(gateway: GraphqlGateway) -> Self {
        Self::with_kind(gateway, CollectionKind::ManageFirms)
    }
}

impl GraphqlCollection<User, SearchFilter> {
    pub fn users(gateway: GraphqlGateway) -> Self {
        Self::with_kind(gateway, CollectionKind::ManageUsers)
    }
}

impl GraphqlCollection<Workspace, SearchFilter> {
    /// Sidebar, dashboard or admin workspace list
    pub fn workspaces(gateway: GraphqlGateway, kind: CollectionKind) -> Result<Self> {
        match kind {
            CollectionKind::SidebarWorkspaces
            | CollectionKind::DashboardWorkspaces
            | CollectionKind::ManageWorkspaces => Ok(Self::with_kind(gateway, kind)),
            other => Err(Error::Invalid {
                message: format!("{other:?} is not a workspace list"),
            }),
        }
    }
}

impl GraphqlCollection<Client, SearchFilter> {
    /// Sidebar or admin client list
    pub fn clients(gateway: GraphqlGateway, kind: CollectionKind) -> Result<Self> {
        match kind {
            CollectionKind::SidebarClients | CollectionKind::ManageClients => {
                Ok(Self::with_kind(gateway, kind))
            }
            other => Err(Error::Invalid {
                message: format!("{other:?} is not a searchable client list"),
            }),
        }
    }
}

impl GraphqlCollection<Client, WorkspaceScope> {
    pub fn workspace_clients(gateway: GraphqlGateway) -> Self {
        Self::with_kind(gateway, CollectionKind::WorkspaceClients)
    }
}

impl<T, F> RemoteCollectionSource for GraphqlCollection<T, F>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
    F: Serialize + Clone + Send + Sync + 'static,
{
    type Item = T;
    type Filter = F;

    async fn fetch_page(&self, query: &PageQuery<F>) -> Result<Vec<T>> {
        let data = self
            .gateway
            .execute(self.kind.operation_name(), self.kind.query(), query)
            .await?;
        let items = extract_list(data, self.kind.field())?;
        tracing::debug!(
            collection = self.kind.name(),
            offset = query.window.offset,
            received = items.len(),
            "Fetched page"
        );
        Ok(items)
    }
}

impl<T, F> std::fmt::Debug for GraphqlCollection<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphqlCollection")
            .field("kind", &self.kind)
            .field("gateway", &self.gateway)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::pagination::{PageLimit, PaginationWindow};
    use crate::state::SettingsAction;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    fn gateway() -> GraphqlGateway {
        GraphqlGateway::new(&AppConfig::default()).expect("gateway")
    }

    /// Answer one POST with `body` and hand back the JSON it carried
    async fn serve_once(body: &'static str) -> (String, tokio::task::JoinHandle<serde_json::Value>) {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind listener");
        let addr = listener.local_addr().expect("addr");
        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.expect("accept");
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            let request_body = loop {
                let n = stream.read(&mut buf).await.expect("read request");
                assert!(n > 0, "connection closed before the body arrived");
                request.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&request);
                if let Some(split) = text.find("\r\n\r\n") {
                    let length = text[..split]
                        .lines()
                        .find_map(|line| {
                            line.to_ascii_lowercase()
                                .strip_prefix("content-length:")
                                .map(|v| v.trim().parse::<usize>().expect("content length"))
                        })
                        .unwrap_or(0);
                    let start = split + 4;
                    if request.len() >= start + length {
                        break request[start..start + length].to_vec();
                    }
                }
            };
            let response = format!(
                "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            stream
                .write_all(response.as_bytes())
                .await
                .expect("write response");
            serde_json::from_slice(&request_body).expect("request json")
        });
        (format!("http://{addr}"), handle)
    }

    fn gateway_at(host: String) -> GraphqlGateway {
        let config = AppConfig {
            backend_host: host,
            ..AppConfig::default()
        };
        GraphqlGateway::new(&config).expect("gateway")
    }

    #[test]
    fn test_search_filter_blank_is_none() {
        assert_eq!(SearchFilter::new("   ").search, None);
        assert_eq!(SearchFilter::new(" acme ").search.as_deref(), Some("acme"));
    }

    #[test]
    fn test_variables_shape() {
        let window = PaginationWindow::first(PageLimit::new(9).expect("limit")).next();
        let query = PageQuery::new(
            window,
            ClientScope {
                client_id: "c1".into(),
                workspace_id: "w1".into(),
            },
        );
        let json = serde_json::to_value(&query).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({ "skip": 9, "take": 9, "clientId": "c1", "workspaceId": "w1" })
        );

        let json = serde_json::to_value(PageQuery::new(window, SearchFilter::default()))
            .expect("serialize");
        assert_eq!(json, serde_json::json!({ "skip": 9, "take": 9 }));
    }

    #[test]
    fn test_scopes_need_selection() {
        let mut session = SessionSettings::new();
        assert!(ClientScope::from_session(&session).is_err());
        session.reduce(SettingsAction::SelectWorkspace("w1".into()));
        session.reduce(SettingsAction::SelectClient("c1".into()));
        let scope = ClientScope::from_session(&session).expect("scope");
        assert_eq!(scope.client_id.as_str(), "c1");
        assert!(PromptScope::from_session(&session).is_err());
        assert!(WorkspaceScope::from_session(&session).is_err());
    }

    #[test]
    fn test_kind_checked_constructors() {
        assert!(GraphqlCollection::workspaces(gateway(), CollectionKind::ManageWorkspaces).is_ok());
        assert!(GraphqlCollection::workspaces(gateway(), CollectionKind::RssEntries).is_err());
        assert!(GraphqlCollection::clients(gateway(), CollectionKind::WorkspaceClients).is_err());
        assert_eq!(
            GraphqlCollection::rss_entries(gateway()).kind(),
            CollectionKind::RssEntries
        );
    }

    #[tokio::test]
    async fn test_fetch_page_reads_kind_field() {
        let (host, server) = serve_once(
            r#"{"data":{"getFirms":[{"id":"f1","name":"Acme"},{"id":"f2","name":"Acorn"}]}}"#,
        )
        .await;
        let source = GraphqlCollection::firms(gateway_at(host));
        let window = PaginationWindow::first(PageLimit::new(10).expect("limit"));

        let firms = source
            .fetch_page(&PageQuery::new(window, SearchFilter::new("ac")))
            .await
            .expect("page");
        assert_eq!(firms.len(), 2);
        assert_eq!(firms[1].name, "Acorn");

        let request = server.await.expect("server");
        assert_eq!(request["operationName"], "GetFirms");
        assert_eq!(
            request["variables"],
            serde_json::json!({ "skip": 0, "take": 10, "search": "ac" })
        );
    }

    #[tokio::test]
    async fn test_fetch_page_surfaces_graphql_errors() {
        let (host, server) =
            serve_once(r#"{"data":null,"errors":[{"message":"Not authorized"}]}"#).await;
        let source = GraphqlCollection::rss_entries(gateway_at(host));
        let window = PaginationWindow::first(PageLimit::new(9).expect("limit"));

        let result = source.fetch_page(&PageQuery::new(window, NoFilter)).await;
        match result {
            Err(Error::Backend { message }) => assert_eq!(message, "Not authorized"),
            other => panic!("unexpected: {other:?}"),
        }
        let request = server.await.expect("server");
        assert_eq!(request["variables"], serde_json::json!({ "skip": 0, "take": 9 }));
    }
}
