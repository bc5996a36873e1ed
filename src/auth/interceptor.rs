// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Session interceptor
//!
//! Attaches the session token to protected API calls and logs the user
//! out when the server rejects the session.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::HeaderValue;
use reqwest::StatusCode;

use super::api_url::BaseUrlResolver;
use super::session::{AuthProvider, Session};
use crate::error::Error;
use crate::http::{headers, Request};
use crate::network::{InterceptAction, RequestInterceptor};

/// Outcome of classifying a failed response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionVerdict {
    /// Session is still considered valid
    Keep,
    /// Session is gone; the user must be logged out
    Logout,
}

/// Classify a failure status against a session snapshot
///
/// 401 and 403 always end the session. 404 only does so when the client
/// already believes the session expired. A missing status (no response)
/// never does.
pub fn classify(status: Option<u16>, session: &Session) -> SessionVerdict {
    let Some(status) = status.and_then(|s| StatusCode::from_u16(s).ok()) else {
        return SessionVerdict::Keep;
    };

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => SessionVerdict::Logout,
        StatusCode::NOT_FOUND if session.is_expired() => SessionVerdict::Logout,
        _ => SessionVerdict::Keep,
    }
}

/// Interceptor that augments protected requests and watches for rejected sessions
pub struct AuthInterceptor {
    provider: Arc<dyn AuthProvider>,
    resolver: Arc<dyn BaseUrlResolver>,
}

impl AuthInterceptor {
    /// Create an interceptor bound to a provider and a base-URL resolver
    pub fn new(provider: Arc<dyn AuthProvider>, resolver: Arc<dyn BaseUrlResolver>) -> Self {
        Self { provider, resolver }
    }

    /// Add session headers when the request qualifies
    ///
    /// Returns whether the request was augmented.
    pub fn augment(&self, request: &mut Request) -> bool {
        if !self.resolver.is_protected(request.url.as_str()) {
            return false;
        }

        if request.has_header(headers::NO_AUTH) {
            tracing::trace!(url = %request.url, "Opt-out marker set, skipping credentials");
            return false;
        }

        let session = self.provider.current_session();
        let Some(token) = session.credential() else {
            return false;
        };

        let Ok(authorization) = HeaderValue::from_str(token) else {
            tracing::warn!(url = %request.url, "Session token is not a valid header value");
            return false;
        };

        request.headers.insert(headers::AUTHORIZATION, authorization);
        request
            .headers
            .insert(headers::ACCEPT_LANGUAGE, HeaderValue::from_static("*"));
        request
            .headers
            .insert(headers::PRAGMA, HeaderValue::from_static("no-cache"));

        true
    }

    /// Classify a failure and trigger logout when the session was rejected
    pub fn observe_failure(&self, request: &Request, status: Option<u16>) -> SessionVerdict {
        let session = self.provider.current_session();
        let verdict = classify(status, &session);

        if verdict == SessionVerdict::Logout {
            tracing::warn!(
                url = %request.url,
                status = ?status,
                expired = session.is_expired(),
                "Session rejected by server, logging out"
            );
            self.provider.logout_redirect();
        }

        verdict
    }
}

#[async_trait]
impl RequestInterceptor for AuthInterceptor {
    async fn before_request(&self, request: &mut Request) -> InterceptAction {
        if self.augment(request) {
            tracing::debug!(url = %request.url, "Attached session credentials");
        }
        InterceptAction::Continue
    }

    async fn on_error(&self, request: &Request, error: &Error) {
        self.observe_failure(request, error.status_code());
    }

    fn priority(&self) -> i32 {
        100 // High priority - run auth injection early
    }
}
