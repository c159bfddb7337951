//! LobbyDesk - Command Line Entry Point
//!
//! Pages one or more collections from the backend into the log, using the
//! selection stored in the session file for scoped lists.
//!
//! ```text
//! lobbydesk [--search TEXT] <collection>...
//! ```

use anyhow::{Context, Result, bail};
use clap::Parser;
use futures::future::join_all;
use lobbydesk::config::{AppConfig, LogConfig};
use lobbydesk::domain::CollectionKind;
use lobbydesk::helpers::get_or_create_data_dir;
use lobbydesk::pagination::{Identified, NoFilter, PageOutcome, PagedFeed, RemoteCollectionSource};
use lobbydesk::services::{
    ClientScope, GraphqlCollection, GraphqlGateway, NotesFilter, PromptScope, SearchFilter,
    WorkspaceScope, block_on,
};
use lobbydesk::state::SessionSettings;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

const TOKEN_VAR: &str = "LOBBYDESK_TOKEN";

fn collections_help() -> String {
    let names: Vec<_> = CollectionKind::ALL.iter().map(|kind| kind.name()).collect();
    format!("Collections: {}", names.join(", "))
}

/// Page LobbyDesk collections from the backend into the log
#[derive(Debug, Parser)]
#[command(name = "lobbydesk", version, after_help = collections_help())]
struct Args {
    /// Search text for searchable lists and notes
    #[arg(short, long, default_value = "")]
    search: String,

    /// Collections to page
    #[arg(required = true, value_parser = clap::value_parser!(CollectionKind))]
    kinds: Vec<CollectionKind>,
}

/// Console output plus an optional daily file; the guard must outlive logging
fn init_logging(config: &LogConfig) -> Result<Option<WorkerGuard>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let console = fmt::layer().with_timer(LocalTime::rfc_3339());

    let (file, guard) = if config.file {
        let dir = get_or_create_data_dir()?.join("logs");
        let appender = tracing_appender::rolling::daily(dir, "lobbydesk.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = fmt::layer()
            .with_ansi(false)
            .with_timer(LocalTime::rfc_3339())
            .with_writer(writer);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file)
        .init();
    Ok(guard)
}

/// Load every page of a feed and log what arrived
async fn drain<S>(kind: CollectionKind, mut feed: PagedFeed<S>) -> Result<usize>
where
    S: RemoteCollectionSource,
    S::Item: Identified,
{
    if feed.load_all().await == Some(PageOutcome::Failed) {
        let message = feed.state().load_state().error().unwrap_or("unknown error");
        bail!("{} failed at offset {}: {message}", kind.name(), feed.state().offset());
    }

    for item in feed.items() {
        info!(collection = kind.name(), id = item.id(), "Item");
    }
    let duplicates = feed.duplicate_ids();
    if !duplicates.is_empty() {
        warn!(collection = kind.name(), ?duplicates, "Collection shifted while paging");
    }
    info!(
        collection = kind.name(),
        total = feed.items().len(),
        pages = feed.state().list().page_count(),
        "Collection loaded"
    );
    Ok(feed.items().len())
}

async fn page_collection(
    kind: CollectionKind,
    gateway: GraphqlGateway,
    session: &SessionSettings,
    search: &str,
) -> Result<usize> {
    let limit = kind.page_limit()?;
    match kind {
        CollectionKind::RssEntries => {
            let source = GraphqlCollection::rss_entries(gateway);
            drain(kind, PagedFeed::new(source, NoFilter, limit)).await
        }
        CollectionKind::ClientNotes => {
            let filter = NotesFilter::from_session(session, search)?;
            let source = GraphqlCollection::client_notes(gateway);
            drain(kind, PagedFeed::new(source, filter, limit)).await
        }
        CollectionKind::ClientDocuments => {
            let filter = ClientScope::from_session(session)?;
            let source = GraphqlCollection::client_documents(gateway);
            drain(kind, PagedFeed::new(source, filter, limit)).await
        }
        CollectionKind::Completions => {
            let filter = PromptScope::from_session(session)?;
            let source = GraphqlCollection::completions(gateway);
            drain(kind, PagedFeed::new(source, filter, limit)).await
        }
        CollectionKind::WorkspaceClients => {
            let filter = WorkspaceScope::from_session(session)?;
            let source = GraphqlCollection::workspace_clients(gateway);
            drain(kind, PagedFeed::new(source, filter, limit)).await
        }
        CollectionKind::ManageFirms => {
            let source = GraphqlCollection::firms(gateway);
            drain(kind, PagedFeed::new(source, SearchFilter::new(search), limit)).await
        }
        CollectionKind::ManageUsers => {
            let source = GraphqlCollection::users(gateway);
            drain(kind, PagedFeed::new(source, SearchFilter::new(search), limit)).await
        }
        CollectionKind::SidebarWorkspaces
        | CollectionKind::DashboardWorkspaces
        | CollectionKind::ManageWorkspaces => {
            let source = GraphqlCollection::workspaces(gateway, kind)?;
            drain(kind, PagedFeed::new(source, SearchFilter::new(search), limit)).await
        }
        CollectionKind::SidebarClients | CollectionKind::ManageClients => {
            let source = GraphqlCollection::clients(gateway, kind)?;
            drain(kind, PagedFeed::new(source, SearchFilter::new(search), limit)).await
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = AppConfig::load().context("loading config.toml")?;
    let _guard = init_logging(&config.log)?;

    info!(
        environment = ?config.environment,
        endpoint = %config.graphql_url(),
        "Starting LobbyDesk"
    );

    let session = SessionSettings::try_load().unwrap_or_else(|e| {
        warn!(error = %e, "Session file unreadable, starting without a selection");
        SessionSettings::new()
    });

    let mut gateway = GraphqlGateway::new(&config)?;
    if let Ok(token) = std::env::var(TOKEN_VAR) {
        gateway = gateway.with_token(token);
    }

    let results = block_on(join_all(args.kinds.iter().map(|&kind| {
        page_collection(kind, gateway.clone(), &session, &args.search)
    })));

    let mut failed = 0;
    for (kind, result) in args.kinds.iter().zip(results) {
        if let Err(e) = result {
            error!(collection = kind.name(), error = %e, "Paging failed");
            failed += 1;
        }
    }
    if failed > 0 {
        bail!("{failed} of {} collections failed", args.kinds.len());
    }
    Ok(())
}
