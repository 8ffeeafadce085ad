//! Query orchestration: validate input, fetch from the upstream catalog,
//! decode, split, and optionally persist to the library.

use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

use crate::itunes::{
    decode_lookup_raw, decode_search, split_lookup_results, CatalogClient, FetchError,
    LookupResponse, SearchResponse,
};
use crate::library_store::LibraryStore;

/// Failure of a query, as a closed set of kinds.
///
/// Lower layer failures are wrapped but never downgraded: a decode failure
/// stays a decode failure all the way to the HTTP boundary, which is the
/// only layer allowed to turn one of these into a status code.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The caller supplied input was missing or blank; no outbound call
    /// was made.
    #[error("missing or blank {0}")]
    Validation(&'static str),

    /// The outbound request failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The upstream body could not be decoded into the expected shape.
    #[error("failed to decode upstream response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Orchestrates the two proxied operations.
///
/// Stateless across requests: both operations build their result from
/// scratch out of the upstream response, so the service can be shared
/// freely between concurrent requests.
pub struct QueryService {
    client: Arc<dyn CatalogClient>,
    library: Option<Arc<dyn LibraryStore>>,
}

impl QueryService {
    pub fn new(client: Arc<dyn CatalogClient>, library: Option<Arc<dyn LibraryStore>>) -> Self {
        Self { client, library }
    }

    /// Search the upstream catalog for artists matching `term`.
    pub async fn find_artists(&self, term: &str) -> Result<SearchResponse, QueryError> {
        let term = term.trim();
        if term.is_empty() {
            return Err(QueryError::Validation("search term"));
        }

        let body = self.client.search(term).await?;
        let response = decode_search(&body)?;
        debug!(
            "Found {} artists matching {:?}",
            response.result_count, term
        );

        if let Some(library) = &self.library {
            if let Err(err) = library.upsert_artists(&response.results) {
                warn!("Failed to persist artists for {:?}: {}", term, err);
            }
        }

        Ok(response)
    }

    /// Look up the albums of the artist identified by `artist_id`.
    ///
    /// The upstream list leads with the artist record itself; the returned
    /// result carries it separately from the albums.
    pub async fn find_albums(&self, artist_id: &str) -> Result<LookupResponse, QueryError> {
        let artist_id = artist_id.trim();
        if artist_id.is_empty() {
            return Err(QueryError::Validation("artist id"));
        }

        let body = self.client.lookup(artist_id).await?;
        let raw = decode_lookup_raw(&body)?;
        let (artist, albums) = split_lookup_results(raw.results)?;
        debug!(
            "Lookup for artist id {} returned {:?} with {} albums",
            artist_id,
            artist.as_ref().map(|a| a.artist_name.as_str()),
            albums.len()
        );

        // Persistence is best-effort: a store failure must not spoil an
        // otherwise successful fetch.
        if let (Some(library), Some(artist)) = (&self.library, &artist) {
            let persisted = library
                .upsert_artist(artist)
                .and_then(|()| library.upsert_albums(&albums));
            if let Err(err) = persisted {
                warn!("Failed to persist lookup for artist id {}: {}", artist_id, err);
            }
        }

        Ok(LookupResponse {
            result_count: raw.result_count,
            artist,
            results: albums,
        })
    }
}
