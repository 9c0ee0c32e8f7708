// Fri Oct 16 2026 - Alex

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanStatus {
    Scanning,
    Found(usize),
    NotFound,
    Failed(String),
}

impl ScanStatus {
    pub fn is_finished(&self) -> bool {
        !matches!(self, ScanStatus::Scanning)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ScanStatus::Failed(_))
    }
}

impl fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanStatus::Scanning => write!(f, "scanning"),
            ScanStatus::Found(count) => write!(f, "found {}", count),
            ScanStatus::NotFound => write!(f, "not found"),
            ScanStatus::Failed(cause) => write!(f, "failed: {}", cause),
        }
    }
}

/// Receives the status lines emitted by scan tasks. Called concurrently
/// from every scan thread.
pub trait StatusReporter: Send + Sync {
    fn report(&self, domain: &str, status: &ScanStatus);

    fn finish(&self) {}
}

/// Discards every status. Used when the caller only cares about the sink.
pub struct SilentReporter;

impl StatusReporter for SilentReporter {
    fn report(&self, _domain: &str, _status: &ScanStatus) {}
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub domains: usize,
    pub found: usize,
    pub not_found: usize,
    pub failed: usize,
    pub subdomains: usize,
}

impl ScanSummary {
    pub fn record(&mut self, status: &ScanStatus) {
        match status {
            ScanStatus::Scanning => return,
            ScanStatus::Found(count) => {
                self.found += 1;
                self.subdomains += count;
            }
            ScanStatus::NotFound => self.not_found += 1,
            ScanStatus::Failed(_) => self.failed += 1,
        }
        self.domains += 1;
    }
}
