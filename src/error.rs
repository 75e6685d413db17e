//! Error handling for notefill.
//! The directive engine itself never fails; these errors cover the edges
//! around it: catalog files, answer documents, prompts and output.

use std::io;
use thiserror::Error;

/// Custom error types for notefill operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors that occur while parsing a template catalog
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// The requested template key is not present in the catalog
    #[error("Template '{key}' was not found in the catalog.")]
    TemplateNotFound { key: String },

    /// Represents malformed answer documents
    #[error("Answers error: {0}.")]
    AnswersError(String),

    /// Represents failures during interactive input
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// Represents failures writing the rendered output
    #[error("Output error: {0}.")]
    OutputError(String),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
