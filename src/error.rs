// src/error.rs
//! Application error types with structured error handling.
//!
//! Error types form the vocabulary for failure modes in the system.
//! Every fetch failure degrades to a user-visible state (unchanged
//! listing, not-found page, indefinite pending); nothing here is a
//! crash path.

use std::fmt;
use thiserror::Error;

/// CMS API error codes as a typed vocabulary.
///
/// Instead of matching against raw HTTP status codes at every call
/// site, the failure reason is classified once, when the error body is
/// read, and carried as a variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CmsErrorCode {
    /// The requested document or endpoint does not exist
    NotFound,
    /// The repository requires an access token, or the token is wrong
    AccessForbidden,
    /// The search predicate or query parameters failed validation
    InvalidQuery,
    /// The content ref used for the query has expired
    ExpiredRef,
    /// API rate limit exceeded
    RateLimited,
    /// HTTP status fallback when the error body carries no detail
    HttpStatus(u16),
}

impl CmsErrorCode {
    /// Classifies an HTTP failure from its status and error message.
    pub fn classify(status: u16, message: &str) -> Self {
        match status {
            400 if message.contains("expired") => Self::ExpiredRef,
            400 => Self::InvalidQuery,
            401 | 403 => Self::AccessForbidden,
            404 => Self::NotFound,
            429 => Self::RateLimited,
            other => Self::HttpStatus(other),
        }
    }

    /// Whether this error means the resource simply doesn't exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Whether this error is transient and worth retrying.
    ///
    /// The core has no retry policy; callers decide what to do with
    /// retryable failures.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited | Self::HttpStatus(500..=599))
    }
}

impl fmt::Display for CmsErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not_found"),
            Self::AccessForbidden => write!(f, "access_forbidden"),
            Self::InvalidQuery => write!(f, "invalid_query"),
            Self::ExpiredRef => write!(f, "expired_ref"),
            Self::RateLimited => write!(f, "rate_limited"),
            Self::HttpStatus(code) => write!(f, "http_{}", code),
        }
    }
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("CMS API returned an error ({code}, HTTP {status}): {message}")]
    CmsService {
        code: CmsErrorCode,
        message: String,
        status: u16,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("No further pages: the listing cursor is exhausted")]
    NoMorePages,

    #[error(transparent)]
    Validation(#[from] crate::types::ValidationError),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::MalformedResponse(format!("invalid URL in response: {}", err))
    }
}

/// Result type alias for convenience
pub type Result<T, E = AppError> = std::result::Result<T, E>;
