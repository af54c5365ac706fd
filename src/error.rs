//! Error handling for the Sunder library.
//!
//! This module provides centralized error handling for every failure a
//! transfer can run into. All errors implement the standard Error trait
//! and chain to their underlying cause where one exists.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can happen when using Sunder.
#[derive(Error, Debug)]
pub enum Error {
    /// Error from an underlying system.
    ///
    /// Captures internal failures that don't fit into any other
    /// category.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Error from the underlying URL parser or the expected URL format.
    ///
    /// Returned when a provided URL cannot be parsed or does not carry a
    /// usable filename in its path.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// I/O error.
    ///
    /// Wraps filesystem errors raised while creating, writing, merging,
    /// or removing files during a transfer.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },

    /// Error from the Reqwest library.
    ///
    /// Wraps HTTP errors surfaced by reqwest itself, including
    /// non-success statuses and failures while streaming a body.
    #[error("Reqwest Error")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },

    /// Error from the request middleware stack.
    ///
    /// Wraps transport-level failures (connection, DNS, proxy) raised
    /// while sending a request through the middleware client.
    #[error("Request Error")]
    Request {
        #[from]
        source: reqwest_middleware::Error,
    },

    /// A part file expected by the merger does not exist.
    ///
    /// Every part fetcher creates its file, even for an empty range, so
    /// a missing part is a fatal inconsistency rather than a gap to
    /// skip over.
    #[error("Missing part file {index} at {path}")]
    MissingPart { index: usize, path: PathBuf },
}

/// Result type alias for operations that can fail with a Sunder error.
pub type Result<T> = std::result::Result<T, Error>;
