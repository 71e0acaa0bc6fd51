// src/types.rs
//! Validated domain newtypes.
//!
//! Raw strings from the command line or the wire are parsed into these
//! types once, at the boundary; everything past the boundary works with
//! values that are known to be well-formed.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Validation failures for domain newtypes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid slug {input:?}: {reason}")]
    InvalidSlug { input: String, reason: String },

    #[error("Invalid access token: {reason}")]
    InvalidAccessToken { reason: String },

    #[error("Invalid repository endpoint {url}: {reason}")]
    InvalidEndpoint { url: String, reason: String },
}

/// Unique, opaque document identifier.
///
/// Slugs come from the backend's `uid` field and from page URLs. They
/// are never interpreted, only compared and passed back to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Parses a raw string into a slug.
    ///
    /// Slugs must be non-empty after trimming and must not contain
    /// whitespace; anything else is passed through untouched.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::InvalidSlug {
                input: input.to_string(),
                reason: "slug is empty".to_string(),
            });
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(ValidationError::InvalidSlug {
                input: input.to_string(),
                reason: "slug contains whitespace".to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for Slug {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Slug::parse(&value).map_err(serde::de::Error::custom)
    }
}

/// Access token for a private CMS repository.
///
/// Debug output redacts the value so tokens never land in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::InvalidAccessToken {
                reason: "token is empty".to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccessToken(****)")
    }
}
