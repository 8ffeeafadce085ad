//! Decoding of upstream response bodies.
//!
//! The lookup endpoint returns a heterogeneous list: its first element is an
//! artist record sitting among album records, and nothing in the payload
//! tags it as such. Decoding therefore happens in two steps: the envelope is
//! parsed with the elements kept as raw JSON objects, then each element is
//! independently coerced into the shape its position dictates.

use serde::Deserialize;
use serde_json::Value;

use super::models::{Album, Artist, SearchResponse};

/// A decoded lookup envelope with its elements still untyped.
#[derive(Debug)]
pub struct RawLookup {
    pub result_count: i64,
    pub results: Vec<Value>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEnvelope {
    result_count: i64,
    results: Vec<Value>,
}

/// Decode a search response body.
///
/// Unknown fields are ignored; a body missing `resultCount` or `results` at
/// the top level is a decode failure.
pub fn decode_search(body: &str) -> Result<SearchResponse, serde_json::Error> {
    serde_json::from_str(body)
}

/// Decode a lookup response body, keeping the result elements untyped so
/// [`split_lookup_results`] can assign them their positional roles.
pub fn decode_lookup_raw(body: &str) -> Result<RawLookup, serde_json::Error> {
    let envelope: RawEnvelope = serde_json::from_str(body)?;
    Ok(RawLookup {
        result_count: envelope.result_count,
        results: envelope.results,
    })
}

/// Split a decoded lookup list into the leading artist record and the
/// trailing album records.
///
/// The role of each element is positional: element 0 is the artist, the rest
/// are albums in their original order. The elements are structurally
/// compatible with both shapes (upstream emits a superset of fields), so
/// each is re-interpreted independently rather than matched on field
/// presence. An empty list yields `(None, [])` and a single-element list
/// yields the artist with no albums; neither is an error.
pub fn split_lookup_results(
    records: Vec<Value>,
) -> Result<(Option<Artist>, Vec<Album>), serde_json::Error> {
    let mut records = records.into_iter();

    let artist: Artist = match records.next() {
        None => return Ok((None, Vec::new())),
        Some(first) => serde_json::from_value(first)?,
    };

    let albums = records
        .map(serde_json::from_value)
        .collect::<Result<Vec<Album>, _>>()?;

    Ok((Some(artist), albums))
}
