// Tue Jan 13 2026 - Alex

use crate::engine::availability::AvailabilityGate;
use crate::engine::eta;
use crate::engine::result::{PhaseReport, TaskStatus};
use crate::orchestration::coordinator::RunSummary;
use crate::registry::{Phase, ToolRegistry};
use crate::utils::format_duration;
use colored::*;
use std::fmt::Write;
use std::path::Path;
use std::time::Duration;

fn status_cell(status: TaskStatus) -> ColoredString {
    let text = format!("{:<10}", status.to_string());
    match status {
        TaskStatus::Ok => text.green(),
        TaskStatus::NotFound => text.yellow(),
        TaskStatus::TimedOut => text.magenta(),
        TaskStatus::Failed => text.red(),
    }
}

pub fn print_phase_table(report: &PhaseReport) {
    print!("{}", render_phase_table(report));
}

/// Phase header, per-status counts, then one row per tool.
pub fn render_phase_table(report: &PhaseReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} (estimated {}, {} tools)",
        report.phase_name.yellow().bold(),
        eta::format_eta(report.estimated_total_seconds),
        report.len()
    );
    let _ = writeln!(out, "  {}", report.summary().dimmed());

    for outcome in &report.outcomes {
        let elapsed = match outcome.status {
            TaskStatus::NotFound => "-".to_string(),
            _ => format_duration(Duration::from_secs_f64(outcome.elapsed_seconds)),
        };

        let _ = writeln!(
            out,
            "  {:<14} {} {:>9}  +{}",
            outcome.name.cyan(),
            status_cell(outcome.status),
            elapsed,
            report.contributed(&outcome.name)
        );

        if let Some(detail) = &outcome.error_detail {
            let _ = writeln!(out, "  {:<14} {}", "", detail.dimmed());
        }
    }
    out
}

pub fn print_run_summary(summary: &RunSummary, output: &Path) {
    println!();
    println!("{}", "Results Summary".cyan().bold());
    println!("{}", "-".repeat(50).cyan());

    for report in &summary.phases {
        print_phase_table(report);
        println!();
    }

    let counts: Vec<String> = TaskStatus::ALL
        .iter()
        .map(|s| format!("{}: {}", s, summary.count(*s)))
        .collect();

    println!("{} Tools run: {} ({})", "[*]".blue(), summary.total_tasks(), counts.join(", "));
    println!("{} Completed in {}", "[+]".green(), format_duration(summary.elapsed));
    println!(
        "{} Unique subdomains saved to {} (Total: {})",
        "[+]".green(),
        output.display(),
        summary.unique_count().to_string().green()
    );
}

pub fn print_registry(registry: &ToolRegistry, gate: &AvailabilityGate) {
    for phase in Phase::ALL {
        let tools = registry.phase(phase);
        println!(
            "{} Phase {}: {} ({}, {} workers by default)",
            "[*]".blue(),
            phase.number(),
            phase.label(),
            eta::format_eta(eta::estimate_total_seconds(&tools)),
            phase.default_workers()
        );

        for tool in &tools {
            let available = if gate.is_available(&tool.command_template) {
                "installed".green()
            } else {
                "missing".red()
            };

            println!(
                "  {:<14} {:>4}s  {:<10} {}",
                tool.name.cyan(),
                tool.estimate(),
                available,
                tool.command_template.dimmed()
            );
        }
        println!();
    }
}
