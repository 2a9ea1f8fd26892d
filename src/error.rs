//! Error types for apiquery
//!
//! Two layers of errors live here:
//! - [`Error`] for operations that can fail before any fetch starts
//!   (e.g. building the HTTP client from an invalid configuration)
//! - [`FetchError`] for per-endpoint fetch failures, carried as data inside
//!   the aggregated result set rather than propagated across task boundaries

use thiserror::Error;

/// Result type alias for apiquery operations
pub type Result<T> = std::result::Result<T, Error>;

/// Crate-level error for operations outside the per-endpoint fetch path
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "request_timeout")
        key: Option<String>,
    },
}

/// Failure of one endpoint's fetch attempt
///
/// Each variant is scoped to a single endpoint and never aborts sibling
/// fetches. The aggregator records these inside the result set; they are
/// first-class outcomes the caller can inspect, not log lines.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The endpoint string is not a well-formed http(s) URL
    #[error("invalid URL {url}: {reason}")]
    InvalidUrl {
        /// The endpoint string that failed to parse
        url: String,
        /// Why the URL was rejected
        reason: String,
    },

    /// Connection-level failure (DNS, refused, TLS, timeout)
    #[error("transport failure for {url}: {reason}")]
    Transport {
        /// The endpoint that could not be reached
        url: String,
        /// The underlying transport error
        reason: String,
    },

    /// The endpoint answered with a non-2xx status
    #[error("{url} returned HTTP {status}")]
    HttpStatus {
        /// The endpoint that returned the error status
        url: String,
        /// The HTTP status code received
        status: u16,
    },

    /// The response body is not valid JSON
    #[error("response from {url} is not valid JSON: {reason}")]
    Decode {
        /// The endpoint whose body failed to decode
        url: String,
        /// The decoder's error message
        reason: String,
    },

    /// The fetch was cancelled before the endpoint answered
    #[error("fetch of {url} was cancelled")]
    Cancelled {
        /// The endpoint whose fetch was cancelled
        url: String,
    },

    /// The fetch task itself died before producing an outcome
    #[error("fetch task for {url} did not complete: {reason}")]
    Task {
        /// The endpoint whose task failed
        url: String,
        /// Why the task did not complete (panic or runtime abort)
        reason: String,
    },
}

impl FetchError {
    /// The endpoint this failure is scoped to
    pub fn endpoint(&self) -> &str {
        match self {
            Self::InvalidUrl { url, .. }
            | Self::Transport { url, .. }
            | Self::HttpStatus { url, .. }
            | Self::Decode { url, .. }
            | Self::Cancelled { url }
            | Self::Task { url, .. } => url,
        }
    }

    /// Machine-inspectable classification of this failure
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            Self::InvalidUrl { .. } => FetchErrorKind::InvalidUrl,
            Self::Transport { .. } => FetchErrorKind::Transport,
            Self::HttpStatus { .. } => FetchErrorKind::HttpStatus,
            Self::Decode { .. } => FetchErrorKind::Decode,
            Self::Cancelled { .. } => FetchErrorKind::Cancelled,
            Self::Task { .. } => FetchErrorKind::Task,
        }
    }

    /// Classify a reqwest error against an endpoint as a transport failure
    pub(crate) fn transport(url: &str, err: &reqwest::Error) -> Self {
        Self::Transport {
            url: url.to_string(),
            reason: err.to_string(),
        }
    }
}

/// Classification of a [`FetchError`], without the per-endpoint payload
///
/// Useful for matching on failure categories without destructuring the
/// full error (e.g. counting how many endpoints timed out).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchErrorKind {
    /// Malformed or non-http(s) endpoint URL
    InvalidUrl,
    /// Connection-level failure
    Transport,
    /// Non-2xx HTTP status
    HttpStatus,
    /// Body not decodable as JSON
    Decode,
    /// Fetch cancelled by the caller's token
    Cancelled,
    /// Fetch task panicked or was aborted by the runtime
    Task,
}
