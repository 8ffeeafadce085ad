//! Wire models for the iTunes Search API.
//!
//! Field names follow the upstream JSON (camelCase). Unknown upstream fields
//! are ignored on deserialization; responses we emit carry only the fields
//! listed here.

use serde::{Deserialize, Serialize};

/// An artist record as returned by the upstream catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub artist_id: i64,
    pub artist_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_genre_name: Option<String>,
}

/// An album record as returned by the upstream lookup endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub collection_id: i64,
    pub artist_id: i64,
    pub collection_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_genre_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

/// Result of an artist search: upstream-reported count plus artists in
/// upstream relevance order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub result_count: i64,
    pub results: Vec<Artist>,
}

/// Result of an album lookup after splitting out the leading artist record.
///
/// `result_count` is the count reported by upstream, which may diverge from
/// `results.len() + 1` when upstream paginates; it is never recomputed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResponse {
    pub result_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<Artist>,
    pub results: Vec<Album>,
}
