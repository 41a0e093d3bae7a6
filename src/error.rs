//! Error types for the venue API client.
//!
//! This module provides a single error type covering every failure mode of
//! the client: transport failures, malformed JSON, and failure statuses
//! reported by the venue itself.

use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for venue operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all venue API operations.
///
/// The venue is authoritative on order validation, so a rejected order is
/// not a transport problem: it arrives as [`Error::Venue`] carrying the
/// verbatim JSON error body so callers can render it exactly as the venue
/// produced it.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed (network unreachable, connection reset, decode)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// The venue returned a non-success HTTP status.
    ///
    /// The response body is kept verbatim; the status code is the sole
    /// signal that the request failed.
    #[error("venue error: status={status}")]
    Venue {
        /// HTTP status code
        status: u16,
        /// Raw JSON error body as returned by the venue
        body: Value,
    },

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns `true` if this error is a failure status reported by the
    /// venue rather than a transport problem.
    pub fn is_venue_error(&self) -> bool {
        matches!(self, Error::Venue { .. })
    }

    /// The HTTP status code, if the venue reported one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Venue { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The JSON error body, if the venue reported one.
    pub fn venue_body(&self) -> Option<&Value> {
        match self {
            Error::Venue { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Returns `true` if this error indicates a client-side issue
    /// (bad request, invalid input, etc.).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Venue { status, .. } => *status >= 400 && *status < 500,
            Error::InvalidInput(_) | Error::Config(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a venue-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Venue { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
