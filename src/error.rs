//! Error handling for the web2apk application.
//! Defines custom error types and results used throughout the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for generation operations.
///
/// This enum represents all possible errors that can occur while generating
/// a wrapper project. It implements the standard Error trait through
/// thiserror's derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// An IO failure carrying the path it happened on
    #[error("IO error on '{}': {source}.", path.display())]
    PathIoError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Represents validation failures in user input
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// Represents errors during configuration file loading or parsing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents errors during template processing
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// A placeholder token survived substitution
    #[error("Unresolved token '{{{{{token}}}}}' in '{}'.", path.display())]
    UnresolvedToken { token: String, path: PathBuf },

    /// Represents errors in icon decoding or resizing
    #[error("Icon error: {0}.")]
    IconError(String),

    /// Represents errors in processing .wrapignore files
    #[error("Ignore pattern error: {0}.")]
    IgnoreError(String),

    /// The output directory already exists and --force was not given
    #[error("Output directory '{output_dir}' already exists. Use --force to overwrite it.")]
    OutputDirectoryExistsError { output_dir: String },
}

/// Convenience type alias for Results with the crate error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(1);
}
