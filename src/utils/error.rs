//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a cost CSV
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("The file '{}' was not found", .0.display())]
    FileNotFound(PathBuf),

    #[error("Required column '{0}' is missing from the CSV header")]
    MissingColumn(String),

    #[error("CSV read failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by aggregate queries
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AggregateError {
    /// An aggregate was requested over zero valid rows
    #[error("no data: aggregation over an empty group ({0})")]
    EmptyGroup(String),
}

/// Errors raised by the cross-baseline comparator
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompareError {
    #[error("baseline '{0}' has no rows in the dataset")]
    BaselineNotFound(String),
}

/// Errors that can occur during chart rendering
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Empty chart data: {0}")]
    EmptyData(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),

    #[error("Failed to rasterise chart to PNG: {0}")]
    RasterFailed(String),
}

/// Errors that can occur while loading a report configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config TOML parse error: {0}")]
    ParseFailed(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
