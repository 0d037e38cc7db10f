//! Input/output operations and error handling
//!
//! This module contains:
//! - Command-line parsing and the solve pipeline runner
//! - Puzzle constants and presentation defaults
//! - Error types
//! - Text reports, PNG rendering and the progress spinner

/// Command-line interface and pipeline orchestration
pub mod cli;
/// Puzzle constants and presentation defaults
pub mod configuration;
/// Error types for all solver operations
pub mod error;
/// PNG rendering of solved boards
pub mod image;
/// Search progress spinner
pub mod progress;
/// Solution block, candidate tables and summaries
pub mod report;
