//! Upstream iTunes Search API boundary: client, wire models and decoding.

mod client;
mod decode;
mod error;
mod models;

pub use client::{CatalogClient, ItunesClient};
pub use decode::{decode_lookup_raw, decode_search, split_lookup_results, RawLookup};
pub use error::FetchError;
pub use models::{Album, Artist, LookupResponse, SearchResponse};
