//! Test server lifecycle management
//!
//! Each test gets an isolated app instance wired to its own mock upstream
//! and, optionally, its own temporary library database.
#![allow(dead_code)] // Not every test binary spawns every server variant.

use ituner_server::library_store::{LibraryStore, SqliteLibraryStore};
use ituner_server::server::server::make_app;
use ituner_server::server::ServerConfig;
use ituner_server::{ItunesClient, QueryService};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::net::TcpListener;

use super::constants::UPSTREAM_TIMEOUT_SECS;
use super::mock_itunes::MockItunes;

/// Test server instance with its own mock upstream.
///
/// When dropped, both servers shut down and temp resources are cleaned up.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// Library store handle for direct assertions, when configured.
    pub library: Option<Arc<SqliteLibraryStore>>,

    // Private fields - keep resources alive until drop
    _mock_upstream: MockItunes,
    _temp_db_dir: Option<TempDir>,
    _shutdown_tx: tokio::sync::oneshot::Sender<()>,
}

impl TestServer {
    /// Spawns a test server without a library database.
    pub async fn spawn() -> Self {
        Self::spawn_inner(false).await
    }

    /// Spawns a test server persisting to a temporary library database.
    pub async fn spawn_with_library() -> Self {
        Self::spawn_inner(true).await
    }

    async fn spawn_inner(with_library: bool) -> Self {
        let mock_upstream = MockItunes::spawn().await;

        let client = Arc::new(
            ItunesClient::new(
                mock_upstream.search_template(),
                mock_upstream.lookup_template(),
                UPSTREAM_TIMEOUT_SECS,
            )
            .expect("Failed to create upstream client"),
        );

        let (library, temp_db_dir) = if with_library {
            let temp_db_dir = TempDir::new().expect("Failed to create temp db dir");
            let store = Arc::new(
                SqliteLibraryStore::new(temp_db_dir.path().join("library.db"))
                    .expect("Failed to open library store"),
            );
            (Some(store), Some(temp_db_dir))
        } else {
            (None, None)
        };

        let library_store: Option<Arc<dyn LibraryStore>> = library
            .clone()
            .map(|store| store as Arc<dyn LibraryStore>);

        let query_service = Arc::new(QueryService::new(client, library_store.clone()));
        let app = make_app(ServerConfig::default(), query_service, library_store);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let port = listener.local_addr().expect("No local addr").port();

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Test server crashed");
        });

        Self {
            base_url: format!("http://127.0.0.1:{}", port),
            library,
            _mock_upstream: mock_upstream,
            _temp_db_dir: temp_db_dir,
            _shutdown_tx: shutdown_tx,
        }
    }
}
