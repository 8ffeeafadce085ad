//! LibraryStore trait definition.

use thiserror::Error;

use crate::itunes::{Album, Artist};

/// Failure inside the persistence gateway.
///
/// Store failures are best-effort by policy: the query layer logs them and
/// never folds them into an otherwise successful fetch.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("library database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// Storage backend for fetched catalog records.
///
/// Artists are keyed by their upstream `artist_id`, albums by their upstream
/// `collection_id` with a bulk read by owning artist. Writes are upserts;
/// nothing is ever deleted by this server.
pub trait LibraryStore: Send + Sync {
    /// Insert or update a single artist.
    fn upsert_artist(&self, artist: &Artist) -> Result<(), StoreError>;

    /// Insert or update a batch of artists.
    fn upsert_artists(&self, artists: &[Artist]) -> Result<(), StoreError>;

    /// Insert or update a batch of albums.
    fn upsert_albums(&self, albums: &[Album]) -> Result<(), StoreError>;

    /// Read an artist back by its upstream id.
    fn get_artist(&self, artist_id: i64) -> Result<Option<Artist>, StoreError>;

    /// Read all stored albums owned by an artist.
    fn get_albums_by_artist(&self, artist_id: i64) -> Result<Vec<Album>, StoreError>;

    /// Number of stored artists.
    fn artists_count(&self) -> usize;

    /// Number of stored albums.
    fn albums_count(&self) -> usize;
}
