//! Versioned schema for the library database.

use crate::sqlite_persistence::{
    Column, ForeignKey, ForeignKeyOnChange, SqlType, Table, VersionedSchema,
};

const ARTISTS_TABLE: Table = Table {
    name: "artists",
    columns: &[
        Column {
            name: "artist_id",
            sql_type: &SqlType::Integer,
            is_primary_key: true,
            non_null: false,
            is_unique: false,
            foreign_key: None,
        },
        Column {
            name: "artist_name",
            sql_type: &SqlType::Text,
            is_primary_key: false,
            non_null: true,
            is_unique: false,
            foreign_key: None,
        },
        Column {
            name: "primary_genre_name",
            sql_type: &SqlType::Text,
            is_primary_key: false,
            non_null: false,
            is_unique: false,
            foreign_key: None,
        },
    ],
    indices: &[],
};

const ALBUMS_ARTIST_FK: ForeignKey = ForeignKey {
    foreign_table: "artists",
    foreign_column: "artist_id",
    on_delete: ForeignKeyOnChange::Cascade,
};

const ALBUMS_TABLE: Table = Table {
    name: "albums",
    columns: &[
        Column {
            name: "collection_id",
            sql_type: &SqlType::Integer,
            is_primary_key: true,
            non_null: false,
            is_unique: false,
            foreign_key: None,
        },
        Column {
            name: "artist_id",
            sql_type: &SqlType::Integer,
            is_primary_key: false,
            non_null: true,
            is_unique: false,
            foreign_key: Some(&ALBUMS_ARTIST_FK),
        },
        Column {
            name: "collection_name",
            sql_type: &SqlType::Text,
            is_primary_key: false,
            non_null: true,
            is_unique: false,
            foreign_key: None,
        },
        Column {
            name: "collection_price",
            sql_type: &SqlType::Real,
            is_primary_key: false,
            non_null: false,
            is_unique: false,
            foreign_key: None,
        },
        Column {
            name: "currency",
            sql_type: &SqlType::Text,
            is_primary_key: false,
            non_null: false,
            is_unique: false,
            foreign_key: None,
        },
        Column {
            name: "primary_genre_name",
            sql_type: &SqlType::Text,
            is_primary_key: false,
            non_null: false,
            is_unique: false,
            foreign_key: None,
        },
        Column {
            name: "copyright",
            sql_type: &SqlType::Text,
            is_primary_key: false,
            non_null: false,
            is_unique: false,
            foreign_key: None,
        },
    ],
    indices: &[("idx_albums_artist_id", "artist_id")],
};

pub const LIBRARY_VERSIONED_SCHEMAS: &[VersionedSchema] = &[VersionedSchema {
    version: 0,
    tables: &[ARTISTS_TABLE, ALBUMS_TABLE],
}];
