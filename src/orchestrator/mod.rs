// Fri Oct 16 2026 - Alex

pub mod aggregator;
pub mod coordinator;
pub mod limiter;
pub mod report;
pub mod task;

#[cfg(test)]
pub(crate) mod testing;

pub use aggregator::{OutputAggregator, OutputChunk, SinkError, SinkReport};
pub use coordinator::{RunResult, ScanCoordinator, DEFAULT_THREADS};
pub use limiter::{ConcurrencyLimiter, SlotGuard};
pub use report::{ScanStatus, ScanSummary, SilentReporter, StatusReporter};
pub use task::ScanTask;
