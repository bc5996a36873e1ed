// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # authgate - Session-aware API client
//!
//! An HTTP interceptor pipeline that attaches session credentials to calls
//! against a protected API and logs the user out when the server rejects
//! the session.
//!
//! ## Behavior
//!
//! - Requests below the API base URL get `Authorization` (token verbatim),
//!   `Accept-Language: *` and `Pragma: no-cache`
//! - Requests carrying the `NoAuth` marker header are left alone
//! - 401/403 responses log the user out; 404 does too once the session
//!   is known to be expired
//! - Every outcome reaches the caller unchanged
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use authgate::{ApiClient, ApiUrlConfig, AuthInterceptor, SessionStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let sessions = SessionStore::new();
//!     sessions.sign_in("letmein");
//!
//!     let api_url = ApiUrlConfig::new("https://cms.example.com/");
//!     let client = ApiClient::with_http()?
//!         .with_interceptor(AuthInterceptor::new(
//!             Arc::new(sessions.clone()),
//!             Arc::new(api_url.clone()),
//!         ));
//!
//!     let response = client.get(api_url.build_url("api/apps")).await?;
//!     println!("{}", response.text_lossy());
//!
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod http;
pub mod network;
pub mod services;

// Re-exports for convenience

// Auth
pub use auth::{
    classify, ApiUrlConfig, AuthInterceptor, AuthProvider, BaseUrlResolver, Session,
    SessionStore, SessionVerdict,
};

// Errors
pub use error::{Error, Result};

// HTTP
pub use http::{HttpClient, HttpClientConfig, Request, Response, Transport};

// Network
pub use network::{ApiClient, InterceptAction, InterceptorChain, RequestInterceptor, RequestLogger};

// Services
pub use services::{AccessTokenDto, AppClientDto, AppClientsService};

/// authgate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
