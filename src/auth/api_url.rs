// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! API base URL configuration

use url::Url;

/// Decides whether a request target belongs to the protected API surface
pub trait BaseUrlResolver: Send + Sync {
    /// True if `url` is part of the protected API
    fn is_protected(&self, url: &str) -> bool;
}

/// Base URL of the protected API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiUrlConfig {
    value: String,
}

impl ApiUrlConfig {
    /// Create a config; the base always ends with `/`
    ///
    /// Parseable bases are stored in normalized URL form (default port
    /// dropped, host lowercased, path percent-encoded), the same form
    /// request URLs take.
    pub fn new(value: impl Into<String>) -> Self {
        let mut value = value.into();
        if !value.ends_with('/') {
            value.push('/');
        }
        if let Ok(url) = Url::parse(&value) {
            value = url.to_string();
        }
        Self { value }
    }

    /// The configured base URL
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Build an absolute URL below the base
    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.value, path.trim_start_matches('/'))
    }
}

impl BaseUrlResolver for ApiUrlConfig {
    fn is_protected(&self, url: &str) -> bool {
        match Url::parse(url) {
            Ok(url) => url.as_str().starts_with(&self.value),
            Err(_) => url.starts_with(&self.value),
        }
    }
}
