// Fri Oct 16 2026 - Alex

use super::error::FetchError;
use super::response::SubdomainResponse;
use super::SubdomainFetcher;
use crate::config::{Config, Credential};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    base_url: String,
}

impl HttpFetcher {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = Client::builder().user_agent(concat!("subrecon/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(FetchError::Client)?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        Self::new(&config.base_url, config.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl SubdomainFetcher for HttpFetcher {
    fn fetch(&self, domain: &str, credential: &Credential) -> Result<Vec<String>, FetchError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("apiKey", credential.expose()), ("url", domain)])
            .send()
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().map_err(FetchError::Transport)?;
        let parsed: SubdomainResponse = serde_json::from_str(&body)?;
        log::debug!("{} answered for {} ({} bytes)", self.base_url, domain, body.len());

        Ok(parsed.into_subdomains())
    }
}
