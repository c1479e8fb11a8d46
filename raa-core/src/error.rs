//! Error types shared across the assistant crates.

use thiserror::Error;

/// Errors that can occur while answering a query.
#[derive(Debug, Error)]
pub enum Error {
    /// An external provider (embeddings, text generation) failed.
    #[error("External service error ({provider}): {message}")]
    ExternalService {
        /// The provider that produced the error.
        provider: String,
        /// A description of the failure.
        message: String,
    },

    /// A backing store (structured or vector) could not be reached.
    #[error("Storage unavailable ({store}): {message}")]
    StorageUnavailable {
        /// The store that produced the error.
        store: String,
        /// A description of the failure.
        message: String,
    },

    /// A malformed request, rejected before reaching the core pipeline.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A configuration or construction-parameter error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Shorthand for an [`Error::ExternalService`] with owned context.
    pub fn external(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Error::ExternalService { provider: provider.into(), message: message.into() }
    }

    /// Shorthand for an [`Error::StorageUnavailable`] with owned context.
    pub fn storage(store: impl Into<String>, message: impl Into<String>) -> Self {
        Error::StorageUnavailable { store: store.into(), message: message.into() }
    }
}

/// A convenience result type for assistant operations.
pub type Result<T> = std::result::Result<T, Error>;
