// Fri Jan 16 2026 - Alex

pub mod defaults;
pub mod error;
pub mod loader;

pub use error::RegistryError;
pub use loader::{load_registry, RegistryFile};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Placeholder substituted with the target domain in command templates.
pub const DOMAIN_PLACEHOLDER: &str = "{domain}";

/// Estimate used for a tool that carries no duration of its own.
pub const DEFAULT_ESTIMATE_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Fast,
    Slow,
}

impl Phase {
    pub const ALL: [Phase; 2] = [Phase::Fast, Phase::Slow];

    pub fn number(&self) -> usize {
        match self {
            Phase::Fast => 1,
            Phase::Slow => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Phase::Fast => "Fast tools",
            Phase::Slow => "Slow tools",
        }
    }

    /// Slow tools lean harder on bandwidth and resolvers, so they get fewer slots.
    pub fn default_workers(&self) -> usize {
        match self {
            Phase::Fast => 5,
            Phase::Slow => 4,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Fast => write!(f, "fast"),
            Phase::Slow => write!(f, "slow"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSpec {
    pub name: String,
    #[serde(rename = "command")]
    pub command_template: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_seconds: Option<u64>,
    pub phase: Phase,
}

impl ToolSpec {
    pub fn new(name: &str, command_template: &str, estimated_seconds: u64, phase: Phase) -> Self {
        Self {
            name: name.to_string(),
            command_template: command_template.to_string(),
            estimated_seconds: Some(estimated_seconds),
            phase,
        }
    }

    pub fn without_estimate(mut self) -> Self {
        self.estimated_seconds = None;
        self
    }

    pub fn estimate(&self) -> u64 {
        self.estimated_seconds.unwrap_or(DEFAULT_ESTIMATE_SECS)
    }

    /// First whitespace-delimited token of the template: the executable.
    pub fn program(&self) -> Option<&str> {
        self.command_template.split_whitespace().next()
    }

    /// Builds the argument vector for `domain`. Each template token is
    /// substituted on its own, so the domain can never introduce new arguments.
    pub fn command_for(&self, domain: &str) -> Option<ToolCommand> {
        let mut tokens = self
            .command_template
            .split_whitespace()
            .map(|token| token.replace(DOMAIN_PLACEHOLDER, domain));

        let program = tokens.next()?;
        let args = tokens.collect();

        Some(ToolCommand { program, args })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Immutable, validated set of tools. Built once at startup and shared
/// read-only with the scheduler.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    tools: Vec<ToolSpec>,
}

impl ToolRegistry {
    pub fn new(tools: Vec<ToolSpec>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();

        for tool in &tools {
            if tool.name.trim().is_empty() {
                return Err(RegistryError::EmptyName);
            }
            if tool.program().is_none() {
                return Err(RegistryError::EmptyCommand(tool.name.clone()));
            }
            if tool.estimated_seconds == Some(0) {
                return Err(RegistryError::ZeroEstimate(tool.name.clone()));
            }
            if !seen.insert(tool.name.as_str()) {
                return Err(RegistryError::DuplicateTool(tool.name.clone()));
            }
        }

        Ok(Self { tools })
    }

    pub fn builtin() -> Self {
        Self {
            tools: defaults::builtin_tools(),
        }
    }

    pub fn tools(&self) -> &[ToolSpec] {
        &self.tools
    }

    pub fn get(&self, name: &str) -> Option<&ToolSpec> {
        self.tools.iter().find(|t| t.name == name)
    }

    /// Tools of one phase, in registry order.
    pub fn phase(&self, phase: Phase) -> Vec<ToolSpec> {
        self.tools
            .iter()
            .filter(|t| t.phase == phase)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
