// Tue Jan 13 2026 - Alex

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use log::{info, warn};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use subdomain_enumerator::{
    registry::{load_registry, Phase, ToolRegistry},
    ui::{display, Banner, ProgressManager},
    utils::logging,
    AvailabilityGate, EnumerationCoordinator, RunConfig, RunReport, TaskRunner,
};

#[derive(Parser, Debug)]
#[command(author = "Alex")]
#[command(version)]
#[command(about = "Run subdomain tools in fast-then-slow queue with ETA", long_about = None)]
struct Args {
    /// Target domain
    #[arg(short, long, required_unless_present = "list_tools")]
    domain: Option<String>,

    /// Output file to save unique results
    #[arg(short, long, required_unless_present = "list_tools")]
    output: Option<PathBuf>,

    /// JSON tool registry replacing the built-in tool list
    #[arg(long)]
    tools: Option<PathBuf>,

    /// Per-tool timeout in seconds
    #[arg(long, default_value_t = 180)]
    timeout: u64,

    #[arg(long, default_value_t = Phase::Fast.default_workers())]
    fast_workers: usize,

    #[arg(long, default_value_t = Phase::Slow.default_workers())]
    slow_workers: usize,

    /// Write a JSON run report here
    #[arg(long)]
    report: Option<PathBuf>,

    /// Print the tool registry with availability and exit
    #[arg(long)]
    list_tools: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[arg(long)]
    no_progress: bool,

    #[arg(long)]
    no_banner: bool,
}

fn main() {
    let args = Args::parse();
    logging::init_logger(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("{} {:#}", "[!]".red(), e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let registry = match &args.tools {
        Some(path) => load_registry(path)
            .with_context(|| format!("Failed to load tool registry {}", path.display()))?,
        None => ToolRegistry::builtin(),
    };

    if args.list_tools {
        display::print_registry(&registry, &AvailabilityGate::new());
        return Ok(());
    }

    // clap enforces both when --list-tools is absent
    let domain = args.domain.unwrap_or_default();
    let output = args.output.unwrap_or_default();

    let config = RunConfig::new(&domain, output)
        .with_timeout(Duration::from_secs(args.timeout))
        .with_workers(Phase::Fast, args.fast_workers)
        .with_workers(Phase::Slow, args.slow_workers)
        .with_progress(!args.no_progress && atty::is(atty::Stream::Stderr))
        .with_banner(!args.no_banner)
        .with_report_file(args.report);
    config.validate()?;

    if config.show_banner {
        Banner::print_default();
    }

    info!(
        "Target: {} ({} tools, timeout {}s per tool)",
        config.domain,
        registry.len(),
        config.command_timeout.as_secs()
    );

    let executor = Arc::new(TaskRunner::new(config.command_timeout));
    let progress = ProgressManager::new().with_enabled(config.show_progress);
    let config = Arc::new(config);

    let coordinator = EnumerationCoordinator::new(config.clone(), Arc::new(registry), executor)
        .with_progress(progress);
    let summary = coordinator.run_to_file()?;

    display::print_run_summary(&summary, &config.output_file);

    if let Some(report_path) = &config.report_file {
        // The subdomain file is already written; a report failure only warns.
        match RunReport::from_summary(&summary, &config.output_file).save(report_path) {
            Ok(()) => println!("{} Run report saved to: {}", "[+]".green(), report_path.display()),
            Err(e) => warn!("Failed to save run report: {}", e),
        }
    }

    Ok(())
}
