// Fri Oct 16 2026 - Alex

use env_logger::Builder;
use log::LevelFilter;

pub struct LoggingUtils;

impl LoggingUtils {
    /// `RUST_LOG` directives, when set, are layered over `level`.
    /// Safe to call more than once; later calls keep the first logger.
    pub fn init_logger(level: LevelFilter) {
        let directives = std::env::var("RUST_LOG").ok();
        let _ = Self::builder(level, directives.as_deref()).try_init();
    }

    pub fn builder(level: LevelFilter, directives: Option<&str>) -> Builder {
        let mut builder = Builder::new();
        builder
            .filter_level(level)
            .format_timestamp(None)
            .format_target(false);

        if let Some(directives) = directives {
            builder.parse_filters(directives);
        }
        builder
    }

    pub fn level_from_verbosity(verbosity: usize) -> LevelFilter {
        match verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
