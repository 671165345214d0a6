//! Error handling for the widgetdoc application.
//! Defines custom error types and results used throughout the generator.

use std::io;
use thiserror::Error;

/// Custom error types for widgetdoc operations.
///
/// Parse and write errors carry the offending path so that a failure in a
/// batch run can be attributed to a single input or output file.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system reads and discovery
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// Represents a malformed YAML definition file
    #[error("cannot parse '{path}': {source}")]
    ParseError { path: String, source: serde_yaml::Error },

    /// Represents a definition file whose name is not a known flavor
    #[error("unknown flavor '{flavor}' in '{path}'")]
    UnknownFlavorError { flavor: String, path: String },

    /// Represents errors raised by the template engine.
    /// A malformed template body is a programming error and aborts the run.
    #[error("template error: {0}")]
    TemplateError(#[from] minijinja::Error),

    /// Represents errors serializing a record into a render context
    #[error("cannot build render context: {0}")]
    ContextError(#[from] serde_json::Error),

    /// Represents a failed output write; other records keep processing
    #[error("cannot write '{path}': {source}")]
    WriteError { path: String, source: io::Error },
}

/// Convenience type alias for Results with widgetdoc's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
