// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for authgate
//!
//! Transport failures keep their HTTP status (when one exists) so the
//! session classifier can decide whether the session was rejected.

use thiserror::Error;

/// Result type alias for authgate operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for authgate
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP transport failed (connection refused, DNS, TLS, body decode...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Server answered with a non-success status
    #[error("Request to {url} failed with status {status}")]
    Status {
        status: u16,
        url: String,
        body: Option<String>,
    },

    /// Request was aborted by an interceptor before reaching the transport
    #[error("Request to {url} aborted: {reason}")]
    Aborted { url: String, reason: String },

    /// Domain service call failed
    #[error("{message}")]
    Api {
        message: String,
        #[source]
        source: Box<Error>,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a status error
    pub fn status(status: u16, url: impl Into<String>) -> Self {
        Error::Status {
            status,
            url: url.into(),
            body: None,
        }
    }

    /// Create an abort error
    pub fn aborted(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Aborted {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Wrap an error with a user-facing service message
    pub fn api(message: impl Into<String>, source: Error) -> Self {
        Error::Api {
            message: message.into(),
            source: Box::new(source),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// Get HTTP status code if available
    ///
    /// Pure network failures have no status.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            Error::Api { source, .. } => source.status_code(),
            _ => None,
        }
    }

    /// Get URL if available
    pub fn url(&self) -> Option<&str> {
        match self {
            Error::Status { url, .. } => Some(url),
            Error::Aborted { url, .. } => Some(url),
            Error::Http(e) => e.url().map(|u| u.as_str()),
            Error::Api { source, .. } => source.url(),
            _ => None,
        }
    }

    /// Check if this is a network error (no response was received)
    pub fn is_network(&self) -> bool {
        match self {
            Error::Http(_) => self.status_code().is_none(),
            Error::Api { source, .. } => source.is_network(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error() {
        let err = Error::status(403, "http://service/p/apps");

        assert!(!err.is_network());
        assert_eq!(err.status_code(), Some(403));
        assert_eq!(err.url(), Some("http://service/p/apps"));
    }

    #[test]
    fn test_api_error_forwards_status() {
        let err = Error::api(
            "Failed to load clients. Please reload.",
            Error::status(500, "http://service/p/api/apps/my-app/clients"),
        );

        assert_eq!(err.to_string(), "Failed to load clients. Please reload.");
        assert_eq!(err.status_code(), Some(500));
        assert_eq!(err.url(), Some("http://service/p/api/apps/my-app/clients"));
    }

    #[test]
    fn test_aborted_has_no_status() {
        let err = Error::aborted("http://service/p/apps", "blocked");

        assert_eq!(err.status_code(), None);
        assert!(!err.is_network());
        assert_eq!(err.url(), Some("http://service/p/apps"));
    }
}
