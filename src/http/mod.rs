// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP layer for authgate
//!
//! Request/response types plus a reqwest-backed transport. Interceptors
//! operate on these types, never on reqwest's directly.

mod client;
mod request;
mod response;

pub use client::{HttpClient, HttpClientConfig, Transport};
pub use request::Request;
pub use response::Response;

/// Default user agent string
pub const DEFAULT_USER_AGENT: &str = concat!("authgate/", env!("CARGO_PKG_VERSION"));

/// Common HTTP headers
pub mod headers {
    pub const ACCEPT: &str = "accept";
    pub const ACCEPT_LANGUAGE: &str = "accept-language";
    pub const AUTHORIZATION: &str = "authorization";
    pub const CONTENT_TYPE: &str = "content-type";
    pub const PRAGMA: &str = "pragma";

    /// Opt-out marker: a request carrying this header is never augmented
    /// with session credentials. Its value is ignored.
    pub const NO_AUTH: &str = "noauth";
}
