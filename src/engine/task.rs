// Tue Jan 13 2026 - Alex

use crate::engine::result::TaskOutcome;
use crate::registry::{Phase, ToolCommand, ToolSpec};

/// A tool bound to a concrete target: the registry entry with its
/// argument vector already built.
#[derive(Debug, Clone)]
pub struct ToolTask {
    pub name: String,
    pub phase: Phase,
    pub command: ToolCommand,
}

impl ToolTask {
    pub fn from_spec(spec: &ToolSpec, domain: &str) -> Option<Self> {
        let command = spec.command_for(domain)?;

        Some(Self {
            name: spec.name.clone(),
            phase: spec.phase,
            command,
        })
    }
}

/// Runs one task to a terminal outcome. Implementations must turn every
/// failure into a `TaskOutcome` instead of returning or panicking.
pub trait TaskExecutor: Send + Sync {
    fn execute(&self, task: &ToolTask) -> TaskOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_from_spec() {
        let spec = ToolSpec::new("findomain", "findomain -t {domain} -u -", 5, Phase::Fast);
        let task = ToolTask::from_spec(&spec, "kali.org").unwrap();

        assert_eq!(task.name, "findomain");
        assert_eq!(task.phase, Phase::Fast);
        assert_eq!(task.command.to_string(), "findomain -t kali.org -u -");
    }
}
