//! SQLite-backed library store implementation.

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::Mutex;
use tracing::info;

use super::schema::LIBRARY_VERSIONED_SCHEMAS;
use super::trait_def::{LibraryStore, StoreError};
use crate::itunes::{Album, Artist};
use crate::sqlite_persistence::BASE_DB_VERSION;

/// SQLite-backed store for fetched artists and albums.
pub struct SqliteLibraryStore {
    conn: Mutex<Connection>,
}

fn create_or_validate(conn: &Connection) -> Result<()> {
    let latest_schema = &LIBRARY_VERSIONED_SCHEMAS[LIBRARY_VERSIONED_SCHEMAS.len() - 1];

    let table_count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
            [],
            |r| r.get(0),
        )
        .unwrap_or(0);

    if table_count == 0 {
        info!(
            "Creating library db schema at version {}",
            latest_schema.version
        );
        return latest_schema.create(conn);
    }

    let db_version: i64 = conn.query_row("PRAGMA user_version", [], |r| r.get(0))?;
    if (db_version as usize) < BASE_DB_VERSION {
        anyhow::bail!(
            "Library database has unrecognized schema version {}",
            db_version
        );
    }

    latest_schema.validate(conn)
}

impl SqliteLibraryStore {
    /// Open (or create) the library database at `db_path`.
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let conn =
            Connection::open(db_path.as_ref()).context("Failed to open library database")?;

        create_or_validate(&conn)?;

        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "foreign_keys", "ON")?;

        let store = Self {
            conn: Mutex::new(conn),
        };
        info!(
            "Opened library: {} artists, {} albums",
            store.artists_count(),
            store.albums_count()
        );
        Ok(store)
    }

    /// In-memory store, used by tests.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        create_or_validate(&conn)?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn insert_artist(conn: &Connection, artist: &Artist) -> Result<(), StoreError> {
        conn.execute(
            "INSERT INTO artists (artist_id, artist_name, primary_genre_name)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(artist_id) DO UPDATE SET
                artist_name = excluded.artist_name,
                primary_genre_name = excluded.primary_genre_name",
            params![artist.artist_id, artist.artist_name, artist.primary_genre_name],
        )?;
        Ok(())
    }
}

impl LibraryStore for SqliteLibraryStore {
    fn upsert_artist(&self, artist: &Artist) -> Result<(), StoreError> {
        let conn = self.conn.lock().unwrap();
        Self::insert_artist(&conn, artist)
    }

    fn upsert_artists(&self, artists: &[Artist]) -> Result<(), StoreError> {
        let mut conn = self.conn.lock().unwrap();
        let tx = conn.transaction()?;
        for artist in artists {
            Self::insert_artist(&tx, artist)?;
        }
        tx.commit()?;
        Ok(())
    }

    fn upsert_albums(&self, albums: &[Album]) -> Result<(), StoreError> {
        let mut conn = self.conn.lock().unwrap();
        let tx = conn.transaction()?;
        for album in albums {
            tx.execute(
                "INSERT INTO albums (collection_id, artist_id, collection_name,
                                     collection_price, currency, primary_genre_name, copyright)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                 ON CONFLICT(collection_id) DO UPDATE SET
                    artist_id = excluded.artist_id,
                    collection_name = excluded.collection_name,
                    collection_price = excluded.collection_price,
                    currency = excluded.currency,
                    primary_genre_name = excluded.primary_genre_name,
                    copyright = excluded.copyright",
                params![
                    album.collection_id,
                    album.artist_id,
                    album.collection_name,
                    album.collection_price,
                    album.currency,
                    album.primary_genre_name,
                    album.copyright
                ],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    fn get_artist(&self, artist_id: i64) -> Result<Option<Artist>, StoreError> {
        let conn = self.conn.lock().unwrap();
        let artist = conn
            .query_row(
                "SELECT artist_id, artist_name, primary_genre_name
                 FROM artists WHERE artist_id = ?1",
                params![artist_id],
                |row| {
                    Ok(Artist {
                        artist_id: row.get(0)?,
                        artist_name: row.get(1)?,
                        primary_genre_name: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(artist)
    }

    fn get_albums_by_artist(&self, artist_id: i64) -> Result<Vec<Album>, StoreError> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT collection_id, artist_id, collection_name, collection_price,
                    currency, primary_genre_name, copyright
             FROM albums WHERE artist_id = ?1 ORDER BY collection_id",
        )?;
        let albums = stmt
            .query_map(params![artist_id], |row| {
                Ok(Album {
                    collection_id: row.get(0)?,
                    artist_id: row.get(1)?,
                    collection_name: row.get(2)?,
                    collection_price: row.get(3)?,
                    currency: row.get(4)?,
                    primary_genre_name: row.get(5)?,
                    copyright: row.get(6)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(albums)
    }

    fn artists_count(&self) -> usize {
        let conn = self.conn.lock().unwrap();
        conn.query_row("SELECT COUNT(*) FROM artists", [], |r| r.get::<_, i64>(0))
            .unwrap_or(0) as usize
    }

    fn albums_count(&self) -> usize {
        let conn = self.conn.lock().unwrap();
        conn.query_row("SELECT COUNT(*) FROM albums", [], |r| r.get::<_, i64>(0))
            .unwrap_or(0) as usize
    }
}
