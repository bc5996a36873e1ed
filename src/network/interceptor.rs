// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Intercepted API client
//!
//! Runs every request through the interceptor chain, the transport, and
//! back through the chain. The outcome handed to the caller is exactly the
//! one the transport produced.

use std::sync::Arc;

use serde::Serialize;

use super::interceptor_trait::{InterceptAction, InterceptorChain, RequestInterceptor};
use crate::error::{Error, Result};
use crate::http::{headers, HttpClient, Request, Response, Transport};

/// API client with an interceptor pipeline around its transport
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    chain: InterceptorChain,
}

impl ApiClient {
    /// Create a client over any transport
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            chain: InterceptorChain::new(),
        }
    }

    /// Create a client over the default reqwest transport
    pub fn with_http() -> Result<Self> {
        Ok(Self::new(Arc::new(HttpClient::new()?)))
    }

    /// Add an interceptor
    pub fn with_interceptor<I: RequestInterceptor + 'static>(mut self, interceptor: I) -> Self {
        self.chain.add(interceptor);
        self
    }

    /// Execute a request through the pipeline
    pub async fn execute(&self, mut request: Request) -> Result<Response> {
        match self.chain.process_request(&mut request).await {
            InterceptAction::Continue => {}
            InterceptAction::Abort(reason) => {
                let error = Error::aborted(request.url.as_str(), reason);
                self.chain.notify_error(&request, &error).await;
                return Err(error);
            }
            InterceptAction::MockResponse(mut response) => {
                self.chain.process_response(&request, &mut response).await;
                return Ok(response);
            }
        }

        // The opt-out marker is an internal signal only
        request.remove_header(headers::NO_AUTH);

        match self.transport.send(&request).await {
            Ok(mut response) => {
                self.chain.process_response(&request, &mut response).await;
                Ok(response)
            }
            Err(error) => {
                self.chain.notify_error(&request, &error).await;
                Err(error)
            }
        }
    }

    /// Execute a GET request
    pub async fn get(&self, url: impl AsRef<str>) -> Result<Response> {
        self.execute(Request::get(url)?).await
    }

    /// Execute a POST request with a JSON body
    pub async fn post<T: Serialize>(&self, url: impl AsRef<str>, body: &T) -> Result<Response> {
        self.execute(Request::post(url)?.json(body)?).await
    }

    /// Execute a PUT request with a JSON body
    pub async fn put<T: Serialize>(&self, url: impl AsRef<str>, body: &T) -> Result<Response> {
        self.execute(Request::put(url)?.json(body)?).await
    }

    /// Execute a DELETE request
    pub async fn delete(&self, url: impl AsRef<str>) -> Result<Response> {
        self.execute(Request::delete(url)?).await
    }

    /// Execute multiple requests concurrently
    ///
    /// Each outcome is intercepted as it completes; results keep input order.
    pub async fn execute_all(&self, requests: Vec<Request>) -> Vec<Result<Response>> {
        let futures: Vec<_> = requests.into_iter().map(|r| self.execute(r)).collect();
        futures::future::join_all(futures).await
    }
}
