// Tue Jan 13 2026 - Alex

pub mod availability;
pub mod eta;
pub mod result;
pub mod runner;
pub mod scheduler;
pub mod task;

pub use availability::AvailabilityGate;
pub use result::{PhaseReport, TaskOutcome, TaskStatus};
pub use runner::TaskRunner;
pub use scheduler::{PhaseScheduler, SchedulerError};
pub use task::{TaskExecutor, ToolTask};
