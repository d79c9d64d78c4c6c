// Tue Jan 13 2026 - Alex

pub mod collector;
pub mod coordinator;

pub use collector::{ResultCollector, SortedResults};
pub use coordinator::{EnumerationCoordinator, RunSummary};
