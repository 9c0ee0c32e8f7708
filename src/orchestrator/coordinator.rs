// Fri Oct 16 2026 - Alex

use super::aggregator::{OutputAggregator, SinkError, SinkReport};
use super::limiter::ConcurrencyLimiter;
use super::report::{ScanStatus, ScanSummary, SilentReporter, StatusReporter};
use super::task::ScanTask;
use crate::config::Credential;
use crate::fetcher::SubdomainFetcher;
use std::collections::HashMap;
use std::path::Path;
use std::sync::mpsc::{channel, sync_channel, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

pub const DEFAULT_THREADS: usize = 5;

#[derive(Debug)]
pub struct RunResult {
    pub success: bool,
    pub elapsed: Duration,
    pub summary: ScanSummary,
    pub sink: SinkReport,
    /// Most scan threads alive but not yet joined at any point of the run.
    pub peak_in_flight: usize,
}

/// Runs one scan: a writer thread for the output file plus one thread per
/// domain, at most `threads` of them fetching at a time.
pub struct ScanCoordinator {
    fetcher: Arc<dyn SubdomainFetcher>,
    reporter: Arc<dyn StatusReporter>,
    credential: Credential,
    threads: usize,
}

impl ScanCoordinator {
    pub fn new(fetcher: Arc<dyn SubdomainFetcher>, credential: Credential) -> Self {
        Self {
            fetcher,
            reporter: Arc::new(SilentReporter),
            credential,
            threads: DEFAULT_THREADS,
        }
    }

    pub fn with_reporter(mut self, reporter: Arc<dyn StatusReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    pub fn run(&self, domains: Vec<String>, output: &Path) -> RunResult {
        let (sender, receiver) = sync_channel(domains.len().max(1));
        let aggregator = OutputAggregator::new(output).spawn(receiver);
        let limiter = ConcurrencyLimiter::new(self.threads);

        log::info!(
            "Scanning {} domains with {} threads into {}",
            domains.len(),
            self.threads,
            output.display()
        );

        let start = Instant::now();
        let mut in_flight = InFlight::new();
        let mut summary = ScanSummary::default();

        for (id, domain) in domains.into_iter().enumerate() {
            let slot = limiter.acquire();
            in_flight.reap(&mut summary);

            let task = ScanTask::new(
                domain,
                self.credential.clone(),
                Arc::clone(&self.fetcher),
                Arc::clone(&self.reporter),
                sender.clone(),
            );
            let name = task.domain().to_string();
            let done = in_flight.done_sender();

            // The status goes out before the slot is released, so once a
            // slot is reacquired every task that gave one up can be joined.
            let handle = thread::spawn(move || {
                let status = task.run();
                let _ = done.send((id, status));
                drop(slot);
            });
            in_flight.push(id, name, handle);
        }

        in_flight.join_all(&mut summary);
        self.reporter.finish();

        drop(sender);
        let sink = aggregator.join().unwrap_or_else(|_| {
            log::error!("Output writer thread panicked");
            SinkReport::failed(SinkError::Panicked)
        });

        let elapsed = start.elapsed();
        log::debug!(
            "Run finished in {:?}: {} written, {} discarded",
            elapsed,
            sink.chunks_written,
            sink.chunks_discarded
        );

        RunResult {
            success: sink.is_success(),
            elapsed,
            summary,
            sink,
            peak_in_flight: in_flight.peak,
        }
    }
}

/// Scan threads that have been spawned but not joined yet.
struct InFlight {
    handles: HashMap<usize, (String, JoinHandle<()>)>,
    done_tx: Sender<(usize, ScanStatus)>,
    done_rx: Receiver<(usize, ScanStatus)>,
    peak: usize,
}

impl InFlight {
    fn new() -> Self {
        let (done_tx, done_rx) = channel();
        Self {
            handles: HashMap::new(),
            done_tx,
            done_rx,
            peak: 0,
        }
    }

    fn done_sender(&self) -> Sender<(usize, ScanStatus)> {
        self.done_tx.clone()
    }

    fn push(&mut self, id: usize, domain: String, handle: JoinHandle<()>) {
        self.handles.insert(id, (domain, handle));
        self.peak = self.peak.max(self.handles.len());
    }

    /// Records every reported status and joins the threads behind them,
    /// plus any thread that died without reporting.
    fn reap(&mut self, summary: &mut ScanSummary) {
        while let Ok((id, status)) = self.done_rx.try_recv() {
            summary.record(&status);
            if let Some((domain, handle)) = self.handles.remove(&id) {
                Self::join(domain, handle, summary);
            }
        }

        let finished: Vec<usize> = self
            .handles
            .iter()
            .filter(|(_, (_, handle))| handle.is_finished())
            .map(|(id, _)| *id)
            .collect();
        for id in finished {
            if let Some((domain, handle)) = self.handles.remove(&id) {
                Self::join(domain, handle, summary);
            }
        }
    }

    fn join_all(&mut self, summary: &mut ScanSummary) {
        for (_, (domain, handle)) in self.handles.drain() {
            Self::join(domain, handle, summary);
        }
        while let Ok((_, status)) = self.done_rx.try_recv() {
            summary.record(&status);
        }
    }

    /// A thread that panicked never sent a status, so it is counted here.
    fn join(domain: String, handle: JoinHandle<()>, summary: &mut ScanSummary) {
        if handle.join().is_err() {
            log::error!("Scan task for {} panicked", domain);
            summary.record(&ScanStatus::Failed("scan task panicked".to_string()));
        }
    }
}
