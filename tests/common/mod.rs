//! Common test infrastructure
//!
//! This module provides everything the end-to-end tests need: an isolated
//! app instance wired to a canned mock upstream, and a thin HTTP client.
//! Tests should only import from this module, not from internal submodules.

mod client;
mod constants;
mod mock_itunes;
mod server;

// Public API - this is what tests import
#[allow(unused_imports)]
pub use client::TestClient;
#[allow(unused_imports)]
pub use constants::*;
#[allow(unused_imports)]
pub use server::TestServer;
