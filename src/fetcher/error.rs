// Fri Oct 16 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("non-200 response code: {0}")]
    Status(u16),
    #[error("Malformed response body: {0}")]
    Payload(#[from] serde_json::Error),
}
