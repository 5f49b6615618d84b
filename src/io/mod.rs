/// Command-line interface and batch file processing
pub mod cli;
/// Shape constants and runtime defaults
pub mod configuration;
/// Error types for shape operations
pub mod error;
/// Batch progress display
pub mod progress;
