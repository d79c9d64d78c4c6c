// Tue Jan 13 2026 - Alex

use crate::config::RunConfig;
use crate::engine::result::{PhaseReport, TaskStatus};
use crate::engine::scheduler::PhaseScheduler;
use crate::engine::task::TaskExecutor;
use crate::orchestration::collector::{ResultCollector, SortedResults};
use crate::output::writer::ResultWriter;
use crate::registry::{Phase, ToolRegistry};
use crate::ui::progress::ProgressManager;
use anyhow::{Context, Result};
use log::info;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Drives both phases in order and persists the merged results.
pub struct EnumerationCoordinator {
    config: Arc<RunConfig>,
    registry: Arc<ToolRegistry>,
    scheduler: PhaseScheduler,
}

impl EnumerationCoordinator {
    pub fn new(config: Arc<RunConfig>, registry: Arc<ToolRegistry>, executor: Arc<dyn TaskExecutor>) -> Self {
        Self {
            config,
            registry,
            scheduler: PhaseScheduler::new(executor),
        }
    }

    pub fn with_progress(mut self, progress: ProgressManager) -> Self {
        self.scheduler = self.scheduler.with_progress(progress);
        self
    }

    /// Runs the fast phase to completion, then the slow phase.
    pub fn run(&self) -> Result<RunSummary> {
        let start = Instant::now();
        let domain = self.config.domain.as_str();
        let collector = ResultCollector::new(domain);
        let mut phases = Vec::with_capacity(Phase::ALL.len());

        for phase in Phase::ALL {
            let tools = self.registry.phase(phase);
            let report = self
                .scheduler
                .run_phase(phase, &tools, domain, self.config.workers_for(phase), &collector)?;
            phases.push(report);
        }

        Ok(RunSummary {
            domain: domain.to_string(),
            phases,
            results: collector.finalize(),
            elapsed: start.elapsed(),
        })
    }

    /// `run` followed by writing the output file. Tool failures never make
    /// this fail; only the write can.
    pub fn run_to_file(&self) -> Result<RunSummary> {
        let summary = self.run()?;
        let path = &self.config.output_file;

        let written = ResultWriter::new(path)
            .write(&summary.results)
            .with_context(|| format!("Failed to save results to {}", path.display()))?;

        info!("Unique subdomains saved to {} (Total: {})", path.display(), written);
        Ok(summary)
    }
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub domain: String,
    pub phases: Vec<PhaseReport>,
    pub results: SortedResults,
    pub elapsed: Duration,
}

impl RunSummary {
    pub fn total_tasks(&self) -> usize {
        self.phases.iter().map(PhaseReport::len).sum()
    }

    pub fn count(&self, status: TaskStatus) -> usize {
        self.phases.iter().map(|p| p.count(status)).sum()
    }

    pub fn unique_count(&self) -> usize {
        self.results.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::result::TaskOutcome;
    use crate::engine::task::ToolTask;
    use crate::registry::ToolSpec;
    use parking_lot::Mutex;
    use std::collections::HashMap;
    use std::fs;
    use std::path::Path;

    struct CannedExecutor {
        outputs: HashMap<&'static str, &'static str>,
        started: Mutex<Vec<String>>,
    }

    impl CannedExecutor {
        fn new(outputs: &[(&'static str, &'static str)]) -> Self {
            Self {
                outputs: outputs.iter().copied().collect(),
                started: Mutex::new(Vec::new()),
            }
        }
    }

    impl TaskExecutor for CannedExecutor {
        fn execute(&self, task: &ToolTask) -> TaskOutcome {
            self.started.lock().push(task.name.clone());
            match self.outputs.get(task.name.as_str()) {
                Some(output) => TaskOutcome::ok(&task.name, output.to_string(), Duration::from_millis(1)),
                None => TaskOutcome::not_found(&task.name),
            }
        }
    }

    fn registry() -> Arc<ToolRegistry> {
        Arc::new(
            ToolRegistry::new(vec![
                ToolSpec::new("one", "one {domain}", 5, Phase::Fast),
                ToolSpec::new("two", "two {domain}", 7, Phase::Fast),
                ToolSpec::new("three", "three {domain}", 30, Phase::Slow),
            ])
            .unwrap(),
        )
    }

    fn config(output: &Path) -> Arc<RunConfig> {
        Arc::new(RunConfig::new("example.com", output.to_path_buf()))
    }

    #[test]
    fn test_duplicate_line_from_two_fast_tools_written_once() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.txt");
        let executor = Arc::new(CannedExecutor::new(&[
            ("one", "www.example.com\n"),
            ("two", "www.example.com\n"),
        ]));

        let coordinator = EnumerationCoordinator::new(config(&output), registry(), executor);
        let summary = coordinator.run_to_file().unwrap();

        assert_eq!(summary.unique_count(), 1);
        assert_eq!(fs::read_to_string(&output).unwrap(), "www.example.com\n");
    }

    #[test]
    fn test_missing_tool_still_creates_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("results").join("deep").join("out.txt");
        let executor = Arc::new(CannedExecutor::new(&[]));

        let coordinator = EnumerationCoordinator::new(config(&output), registry(), executor);
        let summary = coordinator.run_to_file().unwrap();

        assert_eq!(summary.count(TaskStatus::NotFound), 3);
        assert_eq!(fs::read_to_string(&output).unwrap(), "");
    }

    #[test]
    fn test_fast_phase_runs_before_slow_phase() {
        let dir = tempfile::tempdir().unwrap();
        let executor = Arc::new(CannedExecutor::new(&[("three", "c.example.com\n")]));

        let coordinator = EnumerationCoordinator::new(
            config(&dir.path().join("out.txt")),
            registry(),
            executor.clone(),
        );
        let summary = coordinator.run().unwrap();

        let started = executor.started.lock().clone();
        assert_eq!(started.last().map(String::as_str), Some("three"));
        assert_eq!(summary.phases[0].phase, Phase::Fast);
        assert_eq!(summary.phases[0].estimated_total_seconds, 12);
        assert_eq!(summary.phases[1].estimated_total_seconds, 30);
        assert_eq!(summary.total_tasks(), 3);
    }

    #[test]
    fn test_results_span_both_phases_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.txt");
        let executor = Arc::new(CannedExecutor::new(&[
            ("one", "zeta.example.com\nnoise line\n"),
            ("three", "alpha.example.com\nzeta.example.com\n"),
        ]));

        let coordinator = EnumerationCoordinator::new(config(&output), registry(), executor);
        coordinator.run_to_file().unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "alpha.example.com\nzeta.example.com\n"
        );
    }
}
