pub mod log;
pub mod rule;

pub use log::LogEntry;
pub use rule::Rule;
