// Fri Oct 16 2026 - Alex

use super::report::{ScanStatus, StatusReporter};
use crate::config::Credential;
use crate::fetcher::{FetchError, SubdomainFetcher};
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

/// Fetcher answering from a fixed table. Unknown domains return no results.
pub struct ScriptedFetcher {
    answers: HashMap<String, Result<Vec<String>, u16>>,
    panics: HashSet<String>,
    delay: Duration,
    current: AtomicUsize,
    peak: AtomicUsize,
    calls: AtomicUsize,
    seen_keys: Mutex<Vec<String>>,
    intervals: Mutex<Vec<(usize, usize)>>,
    clock: AtomicUsize,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self {
            answers: HashMap::new(),
            panics: HashSet::new(),
            delay: Duration::ZERO,
            current: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
            calls: AtomicUsize::new(0),
            seen_keys: Mutex::new(Vec::new()),
            intervals: Mutex::new(Vec::new()),
            clock: AtomicUsize::new(0),
        }
    }

    pub fn with_found(mut self, domain: &str, subdomains: &[&str]) -> Self {
        let subdomains = subdomains.iter().map(|s| s.to_string()).collect();
        self.answers.insert(domain.to_string(), Ok(subdomains));
        self
    }

    /// The domain's lookup answers with a non-200 status.
    pub fn with_failure(mut self, domain: &str, status: u16) -> Self {
        self.answers.insert(domain.to_string(), Err(status));
        self
    }

    pub fn with_panic(mut self, domain: &str) -> Self {
        self.panics.insert(domain.to_string());
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn peak_concurrency(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen_keys(&self) -> Vec<String> {
        self.seen_keys.lock().clone()
    }

    /// Logical (start, end) ticks of every call, in completion order.
    pub fn intervals(&self) -> Vec<(usize, usize)> {
        self.intervals.lock().clone()
    }
}

impl SubdomainFetcher for ScriptedFetcher {
    fn fetch(&self, domain: &str, credential: &Credential) -> Result<Vec<String>, FetchError> {
        let start = self.clock.fetch_add(1, Ordering::SeqCst);
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.panics.contains(domain) {
            panic!("lookup for {} blew up", domain);
        }
        self.seen_keys.lock().push(credential.expose().to_string());

        let now = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);

        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }

        let answer = match self.answers.get(domain) {
            Some(Ok(subdomains)) => Ok(subdomains.clone()),
            Some(Err(status)) => Err(FetchError::Status(*status)),
            None => Ok(Vec::new()),
        };

        self.current.fetch_sub(1, Ordering::SeqCst);
        let end = self.clock.fetch_add(1, Ordering::SeqCst);
        self.intervals.lock().push((start, end));

        answer
    }
}

#[derive(Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<(String, ScanStatus)>>,
    finished: AtomicUsize,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn statuses_for(&self, domain: &str) -> Vec<ScanStatus> {
        self.events
            .lock()
            .iter()
            .filter(|(d, _)| d == domain)
            .map(|(_, s)| s.clone())
            .collect()
    }

    pub fn finish_calls(&self) -> usize {
        self.finished.load(Ordering::SeqCst)
    }
}

impl StatusReporter for RecordingReporter {
    fn report(&self, domain: &str, status: &ScanStatus) {
        self.events.lock().push((domain.to_string(), status.clone()));
    }

    fn finish(&self) {
        self.finished.fetch_add(1, Ordering::SeqCst);
    }
}
