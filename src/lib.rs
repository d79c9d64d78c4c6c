// Tue Jan 15 2026 - Alex

pub mod config;
pub mod engine;
pub mod orchestration;
pub mod output;
pub mod registry;
pub mod ui;
pub mod utils;

pub use config::RunConfig;
pub use engine::{AvailabilityGate, PhaseScheduler, TaskOutcome, TaskRunner, TaskStatus};
pub use orchestration::{EnumerationCoordinator, ResultCollector, RunSummary};
pub use output::{ResultWriter, RunReport};
pub use registry::{Phase, ToolRegistry, ToolSpec};
