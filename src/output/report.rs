// Fri Jan 16 2026 - Alex

use crate::engine::result::{PhaseReport, TaskStatus};
use crate::orchestration::coordinator::RunSummary;
use crate::output::error::{OutputError, OutputResult};
use crate::output::writer::ensure_parent_dir;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Machine-readable account of a run. Raw tool output is left out.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub domain: String,
    pub output_file: PathBuf,
    pub total_unique: usize,
    pub elapsed_seconds: f64,
    pub phases: Vec<PhaseEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PhaseEntry {
    pub phase_name: String,
    pub estimated_total_seconds: u64,
    pub tools: Vec<ToolEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolEntry {
    pub name: String,
    pub status: TaskStatus,
    pub elapsed_seconds: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<String>,
    pub lines_contributed: usize,
}

impl RunReport {
    pub fn from_summary(summary: &RunSummary, output_file: &Path) -> Self {
        Self {
            domain: summary.domain.clone(),
            output_file: output_file.to_path_buf(),
            total_unique: summary.unique_count(),
            elapsed_seconds: summary.elapsed.as_secs_f64(),
            phases: summary.phases.iter().map(PhaseEntry::from_report).collect(),
        }
    }

    pub fn to_json(&self) -> OutputResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> OutputResult<()> {
        let path = path.as_ref();
        let json = self.to_json()?;

        ensure_parent_dir(path)?;
        fs::write(path, json).map_err(|source| OutputError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl PhaseEntry {
    fn from_report(report: &PhaseReport) -> Self {
        Self {
            phase_name: report.phase_name.clone(),
            estimated_total_seconds: report.estimated_total_seconds,
            tools: report
                .outcomes
                .iter()
                .map(|o| ToolEntry {
                    name: o.name.clone(),
                    status: o.status,
                    elapsed_seconds: o.elapsed_seconds,
                    error_detail: o.error_detail.clone(),
                    lines_contributed: report.contributed(&o.name),
                })
                .collect(),
        }
    }
}
