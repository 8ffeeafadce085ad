//! Shared constants for end-to-end tests.
#![allow(dead_code)] // Not every test binary uses every constant.

/// Timeout for test client requests; generous so a slow CI machine does not
/// flake, while the app's own upstream timeout stays much shorter.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Upstream timeout configured on the app under test.
pub const UPSTREAM_TIMEOUT_SECS: u64 = 1;

/// Artist id the mock upstream answers with a full lookup body.
pub const KNOWN_ARTIST_ID: &str = "3249567";
pub const KNOWN_ARTIST_NAME: &str = "A.R. Rahman";

/// Artist id the mock upstream answers with an empty results list.
pub const UNKNOWN_ARTIST_ID: &str = "0";

/// Term/id the mock upstream answers with a single-element lookup list.
pub const SOLO_ARTIST_ID: &str = "5550001";

/// Term/id the mock upstream answers with syntactically invalid JSON.
pub const GARBAGE_TERM: &str = "garbage";

/// Term/id the mock upstream answers with a 404.
pub const MISSING_TERM: &str = "boom";

/// Term/id the mock upstream stalls on until past the app's upstream timeout.
pub const SLEEPY_TERM: &str = "sleepy";

/// Term the mock upstream answers with three artists.
pub const SEARCH_TERM: &str = "Daft Punk";
