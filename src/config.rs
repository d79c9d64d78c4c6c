// Tue Jan 13 2026 - Alex

use crate::engine::runner::DEFAULT_COMMAND_TIMEOUT;
use crate::registry::Phase;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Target domain must not be empty")]
    EmptyDomain,

    #[error("Target domain must not contain whitespace: {0:?}")]
    InvalidDomain(String),

    #[error("Output path must not be empty")]
    EmptyOutput,

    #[error("Command timeout must be greater than 0")]
    ZeroTimeout,

    #[error("{0} phase needs at least one worker")]
    ZeroWorkers(Phase),
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub domain: String,
    pub output_file: PathBuf,
    pub command_timeout: Duration,
    pub fast_workers: usize,
    pub slow_workers: usize,
    pub show_progress: bool,
    pub show_banner: bool,
    pub report_file: Option<PathBuf>,
}

impl RunConfig {
    pub fn new(domain: &str, output_file: PathBuf) -> Self {
        Self {
            domain: domain.to_string(),
            output_file,
            command_timeout: DEFAULT_COMMAND_TIMEOUT,
            fast_workers: Phase::Fast.default_workers(),
            slow_workers: Phase::Slow.default_workers(),
            show_progress: true,
            show_banner: true,
            report_file: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.command_timeout = timeout;
        self
    }

    pub fn with_workers(mut self, phase: Phase, workers: usize) -> Self {
        match phase {
            Phase::Fast => self.fast_workers = workers,
            Phase::Slow => self.slow_workers = workers,
        }
        self
    }

    pub fn with_progress(mut self, enabled: bool) -> Self {
        self.show_progress = enabled;
        self
    }

    pub fn with_banner(mut self, enabled: bool) -> Self {
        self.show_banner = enabled;
        self
    }

    pub fn with_report_file(mut self, path: Option<PathBuf>) -> Self {
        self.report_file = path;
        self
    }

    pub fn workers_for(&self, phase: Phase) -> usize {
        match phase {
            Phase::Fast => self.fast_workers,
            Phase::Slow => self.slow_workers,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.domain.is_empty() {
            return Err(ConfigError::EmptyDomain);
        }
        if self.domain.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidDomain(self.domain.clone()));
        }
        if self.output_file.as_os_str().is_empty() {
            return Err(ConfigError::EmptyOutput);
        }
        if self.command_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        for phase in Phase::ALL {
            if self.workers_for(phase) == 0 {
                return Err(ConfigError::ZeroWorkers(phase));
            }
        }
        Ok(())
    }
}
