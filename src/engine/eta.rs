// Fri Jan 16 2026 - Alex

use crate::registry::ToolSpec;

/// Static expected duration of a phase: the sum of its tools' estimates.
pub fn estimate_total_seconds(tools: &[ToolSpec]) -> u64 {
    tools.iter().map(ToolSpec::estimate).sum()
}

pub fn format_eta(seconds: u64) -> String {
    if seconds < 60 {
        format!("~{}s", seconds)
    } else {
        format!("~{}s ({}m {}s)", seconds, seconds / 60, seconds % 60)
    }
}
