//! HTTP client for end-to-end tests
//!
//! Thin wrapper around reqwest with a method per server endpoint.
//! When routes or request formats change, update only this file.
#![allow(dead_code)] // Not every test binary uses every endpoint method.

use reqwest::Response;
use std::time::Duration;

use super::constants::REQUEST_TIMEOUT_SECS;

pub struct TestClient {
    pub client: reqwest::Client,
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    /// GET / - server stats.
    pub async fn home(&self) -> Response {
        self.client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .expect("home request failed")
    }

    /// GET /artist?term=... - artist search.
    pub async fn search(&self, term: &str) -> Response {
        self.client
            .get(format!("{}/artist", self.base_url))
            .query(&[("term", term)])
            .send()
            .await
            .expect("search request failed")
    }

    /// GET /artist - artist search without a term parameter.
    pub async fn search_without_term(&self) -> Response {
        self.client
            .get(format!("{}/artist", self.base_url))
            .send()
            .await
            .expect("search request failed")
    }

    /// GET /artist/{id}/albums - album lookup.
    pub async fn albums(&self, artist_id: &str) -> Response {
        self.client
            .get(format!("{}/artist/{}/albums", self.base_url, artist_id))
            .send()
            .await
            .expect("albums request failed")
    }
}
