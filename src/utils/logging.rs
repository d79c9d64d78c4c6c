// Tue Jan 13 2026 - Alex

use colored::*;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

pub struct LoggingUtils;

impl LoggingUtils {
    pub fn init_logger(level: LevelFilter) {
        let logger = Box::new(ColoredLogger::new(level));
        log::set_boxed_logger(logger).ok();
        log::set_max_level(level);
    }

    pub fn level_from_verbosity(verbosity: u8) -> LevelFilter {
        match verbosity {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

struct ColoredLogger {
    level: LevelFilter,
    use_color: AtomicBool,
}

impl ColoredLogger {
    fn new(level: LevelFilter) -> Self {
        Self {
            level,
            use_color: AtomicBool::new(atty::is(atty::Stream::Stderr)),
        }
    }

    fn format_level(&self, level: Level) -> String {
        let label = format!("[{}]", level);
        if !self.use_color.load(Ordering::Relaxed) {
            return label;
        }

        match level {
            Level::Error => label.red().bold().to_string(),
            Level::Warn => label.yellow().bold().to_string(),
            Level::Info => label.green().bold().to_string(),
            Level::Debug => label.blue().bold().to_string(),
            Level::Trace => label.magenta().bold().to_string(),
        }
    }

    fn format_line(&self, record: &Record) -> String {
        if self.level >= LevelFilter::Debug {
            format!("{} [{}] {}", self.format_level(record.level()), record.target(), record.args())
        } else {
            format!("{} {}", self.format_level(record.level()), record.args())
        }
    }
}

impl Log for ColoredLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        // A closed or broken stderr must never take a task down with it.
        let _ = writeln!(io::stderr().lock(), "{}", self.format_line(record));
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

/// Colored logger by default; `RUST_LOG` hands control to `env_logger`.
pub fn init_logger(verbosity: u8) {
    if std::env::var_os("RUST_LOG").is_some() {
        init_from_env();
    } else {
        LoggingUtils::init_logger(LoggingUtils::level_from_verbosity(verbosity));
    }
}

pub fn init_from_env() {
    let _ = env_logger::Builder::from_default_env().try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_verbosity() {
        assert_eq!(LoggingUtils::level_from_verbosity(0), LevelFilter::Info);
        assert_eq!(LoggingUtils::level_from_verbosity(1), LevelFilter::Debug);
        assert_eq!(LoggingUtils::level_from_verbosity(5), LevelFilter::Trace);
    }

    #[test]
    fn test_plain_level_labels() {
        let logger = ColoredLogger::new(LevelFilter::Info);
        logger.use_color.store(false, Ordering::Relaxed);

        assert_eq!(logger.format_level(Level::Warn), "[WARN]");
        assert_eq!(logger.format_level(Level::Error), "[ERROR]");
    }

    #[test]
    fn test_line_format_by_verbosity() {
        let quiet = ColoredLogger::new(LevelFilter::Info);
        quiet.use_color.store(false, Ordering::Relaxed);
        let verbose = ColoredLogger::new(LevelFilter::Debug);
        verbose.use_color.store(false, Ordering::Relaxed);

        let line = |logger: &ColoredLogger| {
            logger.format_line(
                &Record::builder()
                    .level(Level::Warn)
                    .target("subdomain_enumerator::engine::runner")
                    .args(format_args!("amass not found. Skipping..."))
                    .build(),
            )
        };

        assert_eq!(line(&quiet), "[WARN] amass not found. Skipping...");
        assert_eq!(
            line(&verbose),
            "[WARN] [subdomain_enumerator::engine::runner] amass not found. Skipping..."
        );
    }
}
