// Fri Oct 16 2026 - Alex

use crate::config::DEFAULT_CONFIG_FILE;
use crate::orchestrator::DEFAULT_THREADS;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

const EXAMPLES: &str = "\
Examples:
  subrecon -f list_domain.txt -t 10 -o output.txt
  subrecon -d xreverselabs.my.id -o output.txt

Credits : https://github.com/xReverselabs/SubRecon";

#[derive(Parser, Debug, Clone)]
#[command(name = "subrecon")]
#[command(author = "Alex")]
#[command(version)]
#[command(about = "Subdomain Scanner", long_about = None)]
#[command(after_help = EXAMPLES)]
pub struct Args {
    #[arg(short = 'f', long, help = "File containing list of domains to scan")]
    pub file: Option<PathBuf>,

    #[arg(short, long, help = "Single domain to scan")]
    pub domain: Option<String>,

    #[arg(short, long, default_value = "output.txt", help = "Output file")]
    pub output: PathBuf,

    #[arg(short, long, default_value_t = DEFAULT_THREADS, value_parser = parse_threads, help = "Number of concurrent threads")]
    pub threads: usize,

    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE, help = "Config file holding the apiKey")]
    pub config: PathBuf,

    #[arg(short, long, action = ArgAction::Count, help = "Increase log verbosity (-v, -vv)")]
    pub verbose: u8,

    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,

    #[arg(long, help = "Do not print the banner")]
    pub no_banner: bool,

    #[arg(long, help = "Show a progress bar while scanning")]
    pub progress: bool,
}

fn parse_threads(s: &str) -> Result<usize, String> {
    let threads: usize = s.parse().map_err(|_| format!("`{}` is not a number", s))?;
    if threads == 0 {
        return Err("thread count must be at least 1".to_string());
    }
    Ok(threads)
}
