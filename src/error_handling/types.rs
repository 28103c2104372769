//! Error type definitions.
//!
//! This module defines the error types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors returned by an Overpass API request.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request could not be sent or the body could not be read.
    #[error("Overpass request failed: {0}")]
    Request(#[from] ReqwestError),

    /// The endpoint answered with a non-success status code.
    #[error("Overpass API returned HTTP {0}")]
    Status(u16),

    /// The body was not a valid Overpass JSON document.
    #[error("Malformed Overpass response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors starting the local web server.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Every port in the probed range was already in use.
    #[error("Could not find available port after trying {first}-{last}")]
    NoAvailablePort {
        /// First port tried
        first: u16,
        /// Last port tried
        last: u16,
    },

    /// Binding failed for a reason other than the port being taken.
    #[error("Failed to bind web server to port {port}")]
    Bind {
        /// Port that could not be bound
        port: u16,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("Web server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Coarse category of an Overpass fetch failure, used in log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FetchFailureKind {
    Timeout,
    Connect,
    HttpStatus,
    Decode,
    Other,
}

impl FetchFailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchFailureKind::Timeout => "timeout",
            FetchFailureKind::Connect => "connection error",
            FetchFailureKind::HttpStatus => "HTTP status error",
            FetchFailureKind::Decode => "malformed response",
            FetchFailureKind::Other => "request error",
        }
    }
}

impl std::fmt::Display for FetchFailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FetchError {
    /// Categorizes the error for logging.
    pub fn kind(&self) -> FetchFailureKind {
        match self {
            FetchError::Request(e) if e.is_timeout() => FetchFailureKind::Timeout,
            FetchError::Request(e) if e.is_connect() => FetchFailureKind::Connect,
            FetchError::Request(e) if e.is_decode() => FetchFailureKind::Decode,
            FetchError::Request(_) => FetchFailureKind::Other,
            FetchError::Status(_) => FetchFailureKind::HttpStatus,
            FetchError::Decode(_) => FetchFailureKind::Decode,
        }
    }
}
