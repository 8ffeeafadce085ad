use anyhow::Result;
use std::{sync::Arc, time::Duration, time::Instant};

use tracing::{error, info};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::{log_requests, state::*, ServerConfig};
use crate::query::{QueryError, QueryService};

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub library_artists: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub library_albums: Option<usize>,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

#[derive(Deserialize, Debug)]
struct SearchQuery {
    pub term: Option<String>,
}

/// Map a query failure to the status reported to our caller.
///
/// Input, decoding and upstream-rejected-input faults are the caller's
/// problem (400); timeouts, transport errors, upstream 5xx and anything
/// else are ours (500).
fn status_for(err: &QueryError) -> StatusCode {
    match err {
        QueryError::Validation(_) => StatusCode::BAD_REQUEST,
        QueryError::Decode(_) => StatusCode::BAD_REQUEST,
        QueryError::Fetch(fetch) => match fetch.upstream_status() {
            Some(status) if (400..500).contains(&status) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        },
    }
}

fn error_response(context: &str, err: &QueryError) -> Response {
    error!("Error while {}: {}", context, err);
    (status_for(err), err.to_string()).into_response()
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        hash: state.hash.clone(),
        library_artists: state.library_store.as_ref().map(|s| s.artists_count()),
        library_albums: state.library_store.as_ref().map(|s| s.albums_count()),
    };
    Json(stats)
}

async fn search_artists(
    State(service): State<GuardedQueryService>,
    Query(query): Query<SearchQuery>,
) -> Response {
    let term = query.term.unwrap_or_default();
    match service.find_artists(&term).await {
        Ok(response) => Json(response).into_response(),
        Err(err) => error_response(&format!("searching for artists named {:?}", term), &err),
    }
}

async fn get_artist_albums(
    State(service): State<GuardedQueryService>,
    Path(id): Path<String>,
) -> Response {
    match service.find_albums(&id).await {
        Ok(response) => Json(response).into_response(),
        Err(err) => error_response(&format!("fetching albums for artist id {:?}", id), &err),
    }
}

impl ServerState {
    fn new(
        config: ServerConfig,
        query_service: Arc<QueryService>,
        library_store: OptionalLibraryStore,
    ) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            query_service,
            library_store,
            hash: env!("GIT_HASH").to_owned(),
        }
    }
}

pub fn make_app(
    config: ServerConfig,
    query_service: Arc<QueryService>,
    library_store: OptionalLibraryStore,
) -> Router {
    let state = ServerState::new(config, query_service, library_store);

    Router::new()
        .route("/", get(home))
        .route("/artist", get(search_artists))
        .route("/artist/{id}/albums", get(get_artist_albums))
        .layer(middleware::from_fn_with_state(state.clone(), log_requests))
        .with_state(state)
}

pub async fn run_server(
    query_service: Arc<QueryService>,
    library_store: OptionalLibraryStore,
    requests_logging_level: super::RequestsLoggingLevel,
    port: u16,
) -> Result<()> {
    let config = ServerConfig {
        port,
        requests_logging_level,
    };
    let app = make_app(config, query_service, library_store);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    info!("Listening on port {}", port);

    Ok(axum::serve(listener, app).await?)
}
