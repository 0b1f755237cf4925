//! Process-level initialization shared by both binaries.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
