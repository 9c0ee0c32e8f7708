// Fri Oct 16 2026 - Alex

pub mod client;
pub mod error;
pub mod response;

pub use client::HttpFetcher;
pub use error::FetchError;
pub use response::SubdomainResponse;

use crate::config::Credential;

/// One remote lookup for one domain. Implementations are shared across
/// scan threads.
pub trait SubdomainFetcher: Send + Sync {
    fn fetch(&self, domain: &str, credential: &Credential) -> Result<Vec<String>, FetchError>;
}
