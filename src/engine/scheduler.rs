// Tue Jan 13 2026 - Alex

use crate::engine::eta;
use crate::engine::result::{PhaseReport, TaskOutcome};
use crate::engine::task::{TaskExecutor, ToolTask};
use crate::orchestration::collector::ResultCollector;
use crate::registry::{Phase, ToolSpec};
use crate::ui::progress::ProgressManager;
use log::{error, info};
use rayon::ThreadPoolBuilder;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::channel;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("Failed to build worker pool for {phase} phase: {source}")]
    PoolBuild {
        phase: Phase,
        #[source]
        source: rayon::ThreadPoolBuildError,
    },
}

/// Runs one phase at a time on a fixed-size worker pool and returns only
/// once every task in the phase has a terminal outcome.
pub struct PhaseScheduler {
    executor: Arc<dyn TaskExecutor>,
    progress: ProgressManager,
}

impl PhaseScheduler {
    pub fn new(executor: Arc<dyn TaskExecutor>) -> Self {
        Self {
            executor,
            progress: ProgressManager::hidden(),
        }
    }

    pub fn with_progress(mut self, progress: ProgressManager) -> Self {
        self.progress = progress;
        self
    }

    pub fn run_phase(
        &self,
        phase: Phase,
        tools: &[ToolSpec],
        domain: &str,
        workers: usize,
        collector: &ResultCollector,
    ) -> Result<PhaseReport, SchedulerError> {
        let estimated = eta::estimate_total_seconds(tools);
        info!(
            "Phase {}: {} ({})",
            phase.number(),
            phase.label(),
            eta::format_eta(estimated)
        );

        let mut report = PhaseReport::new(phase, estimated);
        if tools.is_empty() {
            info!("Phase {} has no tools, skipping", phase.number());
            return Ok(report);
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(workers.max(1))
            .thread_name(move |i| format!("{}-worker-{}", phase, i))
            .build()
            .map_err(|source| SchedulerError::PoolBuild { phase, source })?;

        let (tx, rx) = channel::<TaskOutcome>();

        for spec in tools {
            let tx = tx.clone();
            let executor = Arc::clone(&self.executor);
            let task = ToolTask::from_spec(spec, domain);
            let name = spec.name.clone();

            pool.spawn(move || {
                let outcome = match task {
                    Some(task) => execute_isolated(executor.as_ref(), &task),
                    None => TaskOutcome::failed(&name, "empty command".to_string(), Duration::ZERO),
                };
                let _ = tx.send(outcome);
            });
        }

        // Every sender lives in a task closure; the loop below ends only
        // after the last one finished.
        drop(tx);

        let bar = self.progress.phase_bar(phase, tools.len());
        for outcome in rx {
            let added = collector.collect(&outcome);
            bar.set_message(outcome.name.clone());
            bar.inc(1);
            report.record(outcome, added);
        }
        bar.finish_and_clear();

        info!("Phase {} complete ({})", phase.number(), report.summary());
        Ok(report)
    }
}

fn execute_isolated(executor: &dyn TaskExecutor, task: &ToolTask) -> TaskOutcome {
    let start = Instant::now();

    match panic::catch_unwind(AssertUnwindSafe(|| executor.execute(task))) {
        Ok(outcome) => outcome,
        Err(_) => {
            error!("{} failed: executor panicked", task.name);
            TaskOutcome::failed(&task.name, "executor panicked".to_string(), start.elapsed())
        }
    }
}
