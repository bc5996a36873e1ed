// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request/Response interceptor trait
//!
//! Interceptors are ordered pipeline stages around the transport call.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::http::{Request, Response};

/// Request interceptor trait
///
/// # Example
///
/// ```rust,no_run
/// use authgate::network::{RequestInterceptor, InterceptAction};
/// use authgate::http::Request;
/// use async_trait::async_trait;
///
/// struct TraceId(String);
///
/// #[async_trait]
/// impl RequestInterceptor for TraceId {
///     async fn before_request(&self, req: &mut Request) -> InterceptAction {
///         req.headers.insert("x-trace-id", self.0.parse().unwrap());
///         InterceptAction::Continue
///     }
/// }
/// ```
#[async_trait]
pub trait RequestInterceptor: Send + Sync {
    /// Called before a request is sent
    ///
    /// Can modify the request or abort it entirely.
    async fn before_request(&self, _request: &mut Request) -> InterceptAction {
        InterceptAction::Continue
    }

    /// Called after a successful response is received
    ///
    /// Errors are logged by the chain; the response still reaches the caller.
    async fn after_response(&self, _request: &Request, _response: &mut Response) -> Result<()> {
        Ok(())
    }

    /// Called when the request fails, including non-success statuses
    async fn on_error(&self, _request: &Request, _error: &Error) {}

    /// Filter - return true if this interceptor should handle the request
    fn should_intercept(&self, _request: &Request) -> bool {
        true
    }

    /// Priority - higher priority interceptors run first
    fn priority(&self) -> i32 {
        0
    }
}

/// Action to take after interception
#[derive(Debug, Clone)]
pub enum InterceptAction {
    /// Continue with the (possibly modified) request
    Continue,
    /// Abort the request with an error
    Abort(String),
    /// Return a mock response instead of making the actual request
    MockResponse(Response),
}

/// Request logger interceptor
#[derive(Default)]
pub struct RequestLogger {
    /// Log request bodies
    pub log_bodies: bool,
    /// Log response bodies
    pub log_responses: bool,
    /// Filter by URL pattern
    pub url_filter: Option<String>,
}

#[async_trait]
impl RequestInterceptor for RequestLogger {
    fn should_intercept(&self, request: &Request) -> bool {
        if let Some(ref filter) = self.url_filter {
            request.url.as_str().contains(filter)
        } else {
            true
        }
    }

    async fn before_request(&self, request: &mut Request) -> InterceptAction {
        tracing::info!(
            method = %request.method,
            url = %request.url,
            "Request"
        );

        if self.log_bodies {
            if let Some(ref body) = request.body {
                tracing::debug!(body = ?String::from_utf8_lossy(body), "Request body");
            }
        }

        InterceptAction::Continue
    }

    async fn after_response(&self, request: &Request, response: &mut Response) -> Result<()> {
        tracing::info!(
            url = %request.url,
            status = %response.status,
            time_ms = response.response_time_ms,
            "Response"
        );

        if self.log_responses {
            tracing::debug!(body = %response.text_lossy(), "Response body");
        }

        Ok(())
    }

    async fn on_error(&self, request: &Request, error: &Error) {
        tracing::warn!(
            method = %request.method,
            url = %request.url,
            status = ?error.status_code(),
            error = %error,
            "Request failed"
        );
    }

    fn priority(&self) -> i32 {
        -100 // Low priority - run logging last
    }
}

/// Interceptor chain - manages multiple interceptors
#[derive(Clone, Default)]
pub struct InterceptorChain {
    interceptors: Vec<Arc<dyn RequestInterceptor>>,
}

impl InterceptorChain {
    /// Create a new empty chain
    pub fn new() -> Self {
        Self {
            interceptors: Vec::new(),
        }
    }

    /// Add an interceptor
    pub fn add<I: RequestInterceptor + 'static>(&mut self, interceptor: I) {
        self.interceptors.push(Arc::new(interceptor));
        // Stable sort: equal priorities keep insertion order
        self.interceptors.sort_by(|a, b| b.priority().cmp(&a.priority()));
    }

    /// Process request through all interceptors
    pub async fn process_request(&self, request: &mut Request) -> InterceptAction {
        for interceptor in &self.interceptors {
            if !interceptor.should_intercept(request) {
                continue;
            }

            match interceptor.before_request(request).await {
                InterceptAction::Continue => continue,
                action => return action,
            }
        }
        InterceptAction::Continue
    }

    /// Process response through all interceptors
    ///
    /// Every interceptor sees the response. A failing stage is logged and
    /// never replaces the transport outcome.
    pub async fn process_response(&self, request: &Request, response: &mut Response) {
        for interceptor in &self.interceptors {
            if !interceptor.should_intercept(request) {
                continue;
            }
            if let Err(error) = interceptor.after_response(request, response).await {
                tracing::warn!(
                    url = %request.url,
                    status = %response.status,
                    error = %error,
                    "Response interceptor failed"
                );
            }
        }
    }

    /// Notify interceptors of an error
    pub async fn notify_error(&self, request: &Request, error: &Error) {
        for interceptor in &self.interceptors {
            if interceptor.should_intercept(request) {
                interceptor.on_error(request, error).await;
            }
        }
    }
}
