//! Error handling for vitae.
//! Defines the error type and result alias used by loading, library
//! discovery and document rendering. The assembly engine itself never fails.

use std::io;
use thiserror::Error;

/// Errors that can occur outside the (infallible) assembly engine.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// A template or data document could not be parsed as JSON or YAML
    #[error("Failed to parse {origin}: {message}")]
    ParseError { origin: String, message: String },

    /// Errors serializing JSON output
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The requested template file or library entry does not exist
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// Output file exists and `--force` was not given
    #[error("Output file '{output}' already exists. Use --force to overwrite it.")]
    OutputExistsError { output: String },

    /// Problems scanning a template library directory
    #[error("Library error: {0}")]
    LibraryError(String),

    /// Errors raised by the document shell renderer
    #[error("Document rendering error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    /// Invalid user supplied values (bad category names, glob patterns, ...)
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
