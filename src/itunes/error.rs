use thiserror::Error;

/// Failure of a single outbound request to the upstream catalog.
///
/// One request, one attempt: the client never retries on its own.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request exceeded the configured timeout.
    #[error("upstream catalog request timed out")]
    Timeout,

    /// Upstream answered with a non-2xx status.
    #[error("upstream catalog returned status {status}: {message}")]
    Upstream { status: u16, message: String },

    /// Connection or protocol level failure, no upstream status known.
    #[error("upstream catalog transport error: {0}")]
    Transport(String),
}

impl FetchError {
    /// The upstream HTTP status, when one was received.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            FetchError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}
