// Fri Oct 16 2026 - Alex

use crate::orchestrator::{RunResult, ScanStatus, StatusReporter};
use crate::utils::{format_duration, pluralize};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Prints per-domain status lines, optionally above a progress bar.
pub struct TerminalReporter {
    progress: Option<ProgressBar>,
}

impl TerminalReporter {
    pub fn new() -> Self {
        Self { progress: None }
    }

    pub fn with_progress(mut self, total: usize) -> Self {
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let bar = ProgressBar::new(total as u64);
        bar.set_style(style);
        self.progress = Some(bar);
        self
    }

    pub fn format_line(domain: &str, status: &ScanStatus) -> String {
        match status {
            ScanStatus::Scanning => {
                format!("{} Scanning domain: {}", "[*]".cyan(), domain.bright_blue())
            }
            ScanStatus::Found(count) => format!(
                "{} Found {} for {}",
                "[+]".green(),
                pluralize(*count, "subdomain", "subdomains"),
                domain.bright_blue()
            ),
            ScanStatus::NotFound => {
                format!("{} No subdomains found for {}", "[-]".red(), domain.bright_blue())
            }
            ScanStatus::Failed(cause) => format!(
                "{} Error fetching subdomains for {}: {}",
                "[!]".red().bold(),
                domain.bright_blue(),
                cause
            ),
        }
    }

    fn print(&self, line: &str) {
        match &self.progress {
            Some(bar) => bar.println(line),
            None => println!("{}", line),
        }
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusReporter for TerminalReporter {
    fn report(&self, domain: &str, status: &ScanStatus) {
        self.print(&Self::format_line(domain, status));

        if let Some(bar) = &self.progress {
            if status.is_finished() {
                bar.inc(1);
                bar.set_message(domain.to_string());
            }
        }
    }

    fn finish(&self) {
        if let Some(bar) = &self.progress {
            bar.finish_and_clear();
        }
    }
}

pub fn divider() -> String {
    let width = terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(50);
    "=".repeat(width.min(50))
}

pub fn print_run_result(result: &RunResult, output: &Path) {
    let summary = &result.summary;

    println!();
    println!("{}", divider().cyan());
    println!(
        "{} {} scanned: {} with results, {} empty, {} failed",
        "[*]".cyan(),
        pluralize(summary.domains, "domain", "domains"),
        summary.found.to_string().green(),
        summary.not_found.to_string().yellow(),
        summary.failed.to_string().red()
    );

    if result.success {
        println!(
            "{} Results saved to {} in {}",
            "[+]".green(),
            output.display().to_string().bright_green(),
            format_duration(result.elapsed).bright_yellow()
        );
    } else {
        if let Some(error) = &result.sink.error {
            eprintln!("{} {}", "[!]".red(), error);
        }
        println!("{}", "Failed to save results.".red());
    }
}

pub fn print_error(error: &anyhow::Error) {
    eprintln!("{} {:#}", "[!]".red(), error);
}
