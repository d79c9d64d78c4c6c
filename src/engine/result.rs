// Tue Jan 13 2026 - Alex

use crate::registry::Phase;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Ok,
    NotFound,
    TimedOut,
    Failed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Ok,
        TaskStatus::NotFound,
        TaskStatus::TimedOut,
        TaskStatus::Failed,
    ];
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TaskStatus::Ok => "ok",
            TaskStatus::NotFound => "not found",
            TaskStatus::TimedOut => "timed out",
            TaskStatus::Failed => "failed",
        };
        write!(f, "{}", s)
    }
}

/// Terminal result of one attempt at one tool. Never mutated once built.
#[derive(Debug, Clone, Serialize)]
pub struct TaskOutcome {
    pub name: String,
    pub status: TaskStatus,
    #[serde(skip)]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<String>,
    pub elapsed_seconds: f64,
}

impl TaskOutcome {
    pub fn ok(name: &str, output: String, elapsed: Duration) -> Self {
        Self {
            name: name.to_string(),
            status: TaskStatus::Ok,
            output: Some(output),
            error_detail: None,
            elapsed_seconds: elapsed.as_secs_f64(),
        }
    }

    pub fn not_found(name: &str) -> Self {
        Self {
            name: name.to_string(),
            status: TaskStatus::NotFound,
            output: None,
            error_detail: None,
            elapsed_seconds: 0.0,
        }
    }

    pub fn timed_out(name: &str, elapsed: Duration) -> Self {
        Self {
            name: name.to_string(),
            status: TaskStatus::TimedOut,
            output: None,
            error_detail: None,
            elapsed_seconds: elapsed.as_secs_f64(),
        }
    }

    pub fn failed(name: &str, detail: String, elapsed: Duration) -> Self {
        Self {
            name: name.to_string(),
            status: TaskStatus::Failed,
            output: None,
            error_detail: Some(detail),
            elapsed_seconds: elapsed.as_secs_f64(),
        }
    }

    pub fn output(&self) -> Option<&str> {
        match self.status {
            TaskStatus::Ok => self.output.as_deref(),
            _ => None,
        }
    }
}

/// One phase's estimate and the outcomes of its tasks, in completion order.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseReport {
    pub phase: Phase,
    pub phase_name: String,
    pub estimated_total_seconds: u64,
    pub outcomes: Vec<TaskOutcome>,
    #[serde(skip)]
    contributions: HashMap<String, usize>,
}

impl PhaseReport {
    pub fn new(phase: Phase, estimated_total_seconds: u64) -> Self {
        Self {
            phase,
            phase_name: phase.label().to_string(),
            estimated_total_seconds,
            outcomes: Vec::new(),
            contributions: HashMap::new(),
        }
    }

    pub fn record(&mut self, outcome: TaskOutcome, new_lines: usize) {
        self.contributions.insert(outcome.name.clone(), new_lines);
        self.outcomes.push(outcome);
    }

    /// Unique lines this tool added that no earlier tool had produced.
    pub fn contributed(&self, name: &str) -> usize {
        self.contributions.get(name).copied().unwrap_or(0)
    }

    pub fn count(&self, status: TaskStatus) -> usize {
        self.outcomes.iter().filter(|o| o.status == status).count()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn summary(&self) -> String {
        format!(
            "ok: {}, not found: {}, timed out: {}, failed: {}",
            self.count(TaskStatus::Ok),
            self.count(TaskStatus::NotFound),
            self.count(TaskStatus::TimedOut),
            self.count(TaskStatus::Failed)
        )
    }
}
