// Fri Oct 16 2026 - Alex

use super::args::Args;
use crate::config::Config;
use crate::fetcher::HttpFetcher;
use crate::input::collect_domains;
use crate::orchestrator::{RunResult, ScanCoordinator, StatusReporter};
use crate::ui::banner::Banner;
use crate::ui::terminal::{print_run_result, TerminalReporter};
use crate::utils::LoggingUtils;
use anyhow::Context;
use std::sync::Arc;

/// Everything a scan needs, resolved before any thread is started.
#[derive(Debug)]
pub struct ScanPlan {
    pub config: Config,
    pub domains: Vec<String>,
}

pub struct CommandHandler;

impl CommandHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, args: Args) -> anyhow::Result<RunResult> {
        LoggingUtils::init_logger(LoggingUtils::level_from_verbosity(args.verbose as usize));
        if args.no_color {
            colored::control::set_override(false);
        }
        if !args.no_banner {
            Banner::print();
            println!();
        }

        let plan = self.prepare(&args)?;
        let result = self.scan(&args, plan)?;
        print_run_result(&result, &args.output);

        Ok(result)
    }

    /// Loads the credential first, then the domain list. Either failing
    /// aborts the run before the output file is touched.
    pub fn prepare(&self, args: &Args) -> anyhow::Result<ScanPlan> {
        let config = Config::load(&args.config).context("Error loading config")?;
        let domains = collect_domains(args.file.as_deref(), args.domain.as_deref())?;

        Ok(ScanPlan { config, domains })
    }

    fn scan(&self, args: &Args, plan: ScanPlan) -> anyhow::Result<RunResult> {
        let fetcher = HttpFetcher::from_config(&plan.config)?;

        let mut reporter = TerminalReporter::new();
        if args.progress {
            reporter = reporter.with_progress(plan.domains.len());
        }
        let reporter: Arc<dyn StatusReporter> = Arc::new(reporter);

        let coordinator = ScanCoordinator::new(Arc::new(fetcher), plan.config.credential())
            .with_threads(args.threads)
            .with_reporter(reporter);

        Ok(coordinator.run(plan.domains, &args.output))
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
