//! Error types exposed by the catalog client layer.

use thiserror::Error;

/// Errors surfaced while configuring the client or talking to the catalog
/// backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The configured backend base URL could not be used.
    #[error("catalog base URL is invalid: {message}")]
    InvalidBaseUrl {
        /// Why the URL was rejected.
        message: String,
    },

    /// Networking failed while calling the backend.
    #[error("network error talking to the catalog: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The backend answered with a non-success status.
    #[error("catalog returned status {status}: {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Message extracted from the response body.
        message: String,
    },

    /// The backend response could not be decoded.
    #[error("catalog response could not be decoded: {message}")]
    Decode {
        /// Decoder error detail.
        message: String,
    },

    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}
