// Fri Oct 16 2026 - Alex

pub mod config;
pub mod fetcher;
pub mod input;
pub mod orchestrator;
pub mod ui;
pub mod utils;

pub use config::{Config, Credential};
pub use fetcher::{HttpFetcher, SubdomainFetcher};
pub use orchestrator::{RunResult, ScanCoordinator};
