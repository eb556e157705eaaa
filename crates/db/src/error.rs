/// Errors from the data-access layer.
///
/// Only the remote backend produces these; the in-memory store never fails.
/// They are passed to the caller unchanged, without retry or classification.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// The HTTP request itself failed (network, DNS, TLS, body decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote service returned a non-2xx status code.
    #[error("Remote API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },
}

pub type DbResult<T> = Result<T, DbError>;
