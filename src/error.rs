//! Error types for the envoy-template CLI.
//!
//! Uses thiserror for derive macros. Every variant is terminal and maps to
//! one of the codes in [`crate::exit_codes`].

use crate::exit_codes;
use crate::template::TemplateError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for bootstrap rendering.
#[derive(Error, Debug)]
pub enum BootstrapError {
    /// Invalid arguments, config file, or option values.
    #[error("{0}")]
    UserError(String),

    /// The template could not be rendered with the given context.
    #[error("failed to render bootstrap template: {0}")]
    Template(#[from] TemplateError),

    /// The output path could not be determined.
    #[error("cannot determine output path: {0}")]
    OutputPath(String),

    /// Writing the rendered artifact failed.
    #[error("failed to write '{}': {message}", .path.display())]
    Io { path: PathBuf, message: String },
}

impl BootstrapError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            BootstrapError::UserError(_) => exit_codes::USER_ERROR,
            BootstrapError::Template(_) => exit_codes::TEMPLATE_FAILURE,
            BootstrapError::OutputPath(_) | BootstrapError::Io { .. } => {
                exit_codes::OUTPUT_FAILURE
            }
        }
    }
}

/// Result type alias for bootstrap operations.
pub type Result<T> = std::result::Result<T, BootstrapError>;
