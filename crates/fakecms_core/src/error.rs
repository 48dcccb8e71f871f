//! Error types for the fixture core.
//!
//! Every error is raised synchronously at the point of violation.
//! There is no recovery, retry or suppression anywhere in the core;
//! these errors are diagnostic aids for the test author, not runtime
//! faults to guard against.

use fakecms_model::{ModelError, TemplateId};
use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while building or querying a fixture.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A required argument was empty or otherwise unusable.
    #[error("invalid argument `{param}`: {message}")]
    InvalidArgument {
        /// Name of the offending parameter.
        param: String,
        /// What was wrong with it.
        message: String,
    },

    /// A template with the same explicit identity has already been added.
    #[error("a template with id {id} has already been added")]
    DuplicateTemplate {
        /// The colliding identity.
        id: TemplateId,
    },

    /// A declaration mutation failed.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// The operation is deliberately unsupported.
    #[error("unsupported operation: {operation}")]
    Unsupported {
        /// The operation that was attempted.
        operation: String,
    },
}

impl CoreError {
    /// Creates an invalid-argument error.
    pub fn invalid_argument(param: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            param: param.into(),
            message: message.into(),
        }
    }

    /// Creates an unsupported-operation error.
    pub fn unsupported(operation: impl Into<String>) -> Self {
        Self::Unsupported {
            operation: operation.into(),
        }
    }
}
