// Fri Oct 16 2026 - Alex

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubdomainResponse {
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub subdomains: Option<Vec<String>>,
}

impl SubdomainResponse {
    pub fn into_subdomains(self) -> Vec<String> {
        self.subdomains.unwrap_or_default()
    }
}
