//! Input/output operations and error handling
//!
//! Everything that talks to the outside world lives here: the error
//! taxonomy, configuration constants and validation, PNG export, progress
//! reporting, and the CLI session runner.

/// Command-line interface and session orchestration
pub mod cli;
/// Configuration constants and validated session options
pub mod configuration;
/// Error types for all operations
pub mod error;
/// PNG export of board states
pub mod export;
/// Progress display for the turn loop
pub mod progress;
