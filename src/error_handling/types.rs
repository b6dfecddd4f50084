//! Error type definitions.
//!
//! This module defines the typed errors returned by each stage of an expansion
//! and the coarse `ErrorType` categories used for statistics.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::config::INVALID_URL_MESSAGE;

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

/// Why a redirect probe failed.
///
/// Transport errors are flattened to strings so the outcome stays `Clone` and
/// comparable in tests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The URL could not be turned into a request.
    #[error("Invalid request URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The request did not complete within the configured timeout.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// DNS failure, refused connection or TLS handshake failure.
    #[error("Connection failed: {0}")]
    Connect(String),

    /// Any other transport failure (malformed response, reset, ...).
    #[error("HTTP transport error: {0}")]
    Transport(String),

    /// A redirect status arrived without a `Location` header.
    #[error("Redirect status {status} without Location header")]
    MissingLocation { status: u16 },

    /// The `Location` header was present but not usable.
    #[error("Redirect status {status} with unusable Location header: {reason}")]
    InvalidLocation { status: u16, reason: String },
}

/// Why a URL could not be reduced to `scheme://host/path`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// The string is not a URL at all.
    #[error("{msg} ({0})", msg = INVALID_URL_MESSAGE)]
    Parse(#[from] url::ParseError),

    /// Only http and https targets are cleaned.
    #[error("Unsupported scheme '{0}'")]
    UnsupportedScheme(String),

    /// The URL parsed but carries no host.
    #[error("URL has no host")]
    MissingHost,
}

/// Why an expansion produced no result text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpandError {
    /// The input contains no URL-shaped substring.
    #[error("No URL found in input")]
    NoUrlFound,

    /// The URL answered, but not with a redirect.
    #[error("No redirect found (status {status})")]
    NoRedirect { status: u16 },

    /// The redirect probe failed.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// The redirect target could not be cleaned.
    #[error("Redirect target {location} is not a valid URL: {source}")]
    Normalize {
        location: String,
        source: NormalizeError,
    },
}

impl ExpandError {
    /// The statistics category this failure is counted under.
    pub fn error_type(&self) -> ErrorType {
        match self {
            ExpandError::NoUrlFound => ErrorType::ExtractionMiss,
            ExpandError::NoRedirect { .. } => ErrorType::NoRedirect,
            ExpandError::Resolve(ResolveError::MissingLocation { .. }) => {
                ErrorType::MissingLocationHeader
            }
            ExpandError::Resolve(ResolveError::InvalidLocation { .. })
            | ExpandError::Resolve(ResolveError::InvalidUrl { .. })
            | ExpandError::Normalize { .. } => ErrorType::MalformedUrl,
            ExpandError::Resolve(_) => ErrorType::NetworkFailure,
        }
    }
}

/// Categories of failed expansions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    ExtractionMiss,        // No URL-shaped substring in the input
    NetworkFailure,        // DNS, connect, timeout or other transport failure
    MissingLocationHeader, // 301/302/307 without a Location header
    MalformedUrl,          // Unusable request URL or redirect target
    NoRedirect,            // Reachable, but answered without redirecting
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::ExtractionMiss => "No URL in input",
            ErrorType::NetworkFailure => "Network failure",
            ErrorType::MissingLocationHeader => "Redirect without Location header",
            ErrorType::MalformedUrl => "Malformed URL",
            ErrorType::NoRedirect => "No redirect",
        }
    }
}
