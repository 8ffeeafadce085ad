//! In-process stand-in for the iTunes Search API.
//!
//! Serves canned bodies keyed by the incoming term/id so e2e tests can
//! exercise every boundary outcome without touching the network.

use axum::{
    extract::Query,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tokio::net::TcpListener;

use super::constants::*;

#[derive(Deserialize)]
struct SearchParams {
    term: Option<String>,
}

#[derive(Deserialize)]
struct LookupParams {
    id: Option<String>,
}

fn json_body(body: String) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}

async fn search(Query(params): Query<SearchParams>) -> Response {
    let term = params.term.unwrap_or_default();
    match term.as_str() {
        GARBAGE_TERM => json_body("{ invalid json }".to_string()),
        MISSING_TERM => StatusCode::NOT_FOUND.into_response(),
        SLEEPY_TERM => {
            tokio::time::sleep(Duration::from_secs(UPSTREAM_TIMEOUT_SECS + 2)).await;
            json_body(json!({"resultCount": 0, "results": []}).to_string())
        }
        SEARCH_TERM => json_body(
            json!({
                "resultCount": 3,
                "results": [
                    {"artistId": 5468295, "artistName": "Daft Punk", "primaryGenreName": "Electronic"},
                    {"artistId": 1000001, "artistName": "Daft Punk is Dead"},
                    {"artistId": 1000002, "artistName": "Daft Punk Experience"}
                ]
            })
            .to_string(),
        ),
        _ => json_body(json!({"resultCount": 0, "results": []}).to_string()),
    }
}

async fn lookup(Query(params): Query<LookupParams>) -> Response {
    let id = params.id.unwrap_or_default();
    match id.as_str() {
        GARBAGE_TERM => json_body("{ invalid json }".to_string()),
        MISSING_TERM => StatusCode::NOT_FOUND.into_response(),
        SLEEPY_TERM => {
            tokio::time::sleep(Duration::from_secs(UPSTREAM_TIMEOUT_SECS + 2)).await;
            json_body(json!({"resultCount": 0, "results": []}).to_string())
        }
        KNOWN_ARTIST_ID => json_body(
            json!({
                "resultCount": 21,
                "results": [
                    {
                        "wrapperType": "artist",
                        "artistId": 3249567,
                        "artistName": KNOWN_ARTIST_NAME,
                        "primaryGenreName": "Bollywood"
                    },
                    {
                        "wrapperType": "collection",
                        "collectionId": 1445233202,
                        "artistId": 3249567,
                        "artistName": KNOWN_ARTIST_NAME,
                        "collectionName": "Jodhaa Akbar",
                        "collectionPrice": 9.99,
                        "currency": "USD",
                        "primaryGenreName": "Bollywood",
                        "copyright": "2008 UTV"
                    },
                    {
                        "wrapperType": "collection",
                        "collectionId": 1445233300,
                        "artistId": 3249567,
                        "artistName": KNOWN_ARTIST_NAME,
                        "collectionName": "Slumdog Millionaire",
                        "collectionPrice": 7.99,
                        "currency": "USD"
                    }
                ]
            })
            .to_string(),
        ),
        SOLO_ARTIST_ID => json_body(
            json!({
                "resultCount": 1,
                "results": [
                    {"artistId": 5550001, "artistName": "Solo Act"}
                ]
            })
            .to_string(),
        ),
        _ => json_body(json!({"resultCount": 0, "results": []}).to_string()),
    }
}

/// A running mock upstream, shut down when dropped.
pub struct MockItunes {
    pub base_url: String,
    _shutdown_tx: tokio::sync::oneshot::Sender<()>,
}

impl MockItunes {
    pub async fn spawn() -> Self {
        let app = Router::new()
            .route("/search", get(search))
            .route("/lookup", get(lookup));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock upstream");
        let port = listener.local_addr().expect("No local addr").port();

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Mock upstream crashed");
        });

        Self {
            base_url: format!("http://127.0.0.1:{}", port),
            _shutdown_tx: shutdown_tx,
        }
    }

    /// `%s` search template pointing at this mock.
    pub fn search_template(&self) -> String {
        format!("{}/search?term=%s", self.base_url)
    }

    /// `%s` lookup template pointing at this mock.
    pub fn lookup_template(&self) -> String {
        format!("{}/lookup?id=%s", self.base_url)
    }
}
