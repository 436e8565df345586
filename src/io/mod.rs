//! Input/output concerns around the layout engine
//!
//! This module contains:
//! - Error types shared by the whole crate
//! - Configuration constants and parameter structs
//! - Named preset layouts
//! - PNG rendering, progress display and the command-line interface

/// Command-line parsing and batch rendering
pub mod cli;
/// Constants and typed configuration with defaults
pub mod configuration;
/// Error types and constructors
pub mod error;
/// Raster rendering and PNG export
pub mod image;
/// Named preset layouts
pub mod presets;
/// Batch progress display
pub mod progress;
