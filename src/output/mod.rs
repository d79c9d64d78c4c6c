// Tue Jan 13 2026 - Alex

pub mod error;
pub mod report;
pub mod writer;

pub use error::OutputError;
pub use report::RunReport;
pub use writer::ResultWriter;
