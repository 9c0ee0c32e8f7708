// Fri Oct 16 2026 - Alex

use super::aggregator::OutputChunk;
use super::report::{ScanStatus, StatusReporter};
use crate::config::Credential;
use crate::fetcher::SubdomainFetcher;
use std::sync::mpsc::SyncSender;
use std::sync::Arc;

pub struct ScanTask {
    domain: String,
    credential: Credential,
    fetcher: Arc<dyn SubdomainFetcher>,
    reporter: Arc<dyn StatusReporter>,
    output: SyncSender<OutputChunk>,
}

impl ScanTask {
    pub fn new(
        domain: String,
        credential: Credential,
        fetcher: Arc<dyn SubdomainFetcher>,
        reporter: Arc<dyn StatusReporter>,
        output: SyncSender<OutputChunk>,
    ) -> Self {
        Self {
            domain,
            credential,
            fetcher,
            reporter,
            output,
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// One fetch, one status. Errors end here as `ScanStatus::Failed`.
    pub fn run(self) -> ScanStatus {
        self.reporter.report(&self.domain, &ScanStatus::Scanning);

        let status = match self.fetcher.fetch(&self.domain, &self.credential) {
            Ok(subdomains) => match OutputChunk::from_subdomains(&subdomains) {
                Some(chunk) => {
                    let count = chunk.lines();
                    if self.output.send(chunk).is_err() {
                        log::warn!(
                            "Output closed, dropping {} subdomains for {}",
                            count,
                            self.domain
                        );
                    }
                    ScanStatus::Found(count)
                }
                None => ScanStatus::NotFound,
            },
            Err(e) => {
                log::debug!("Fetch for {} failed: {:?}", self.domain, e);
                ScanStatus::Failed(e.to_string())
            }
        };

        self.reporter.report(&self.domain, &status);
        status
    }
}
