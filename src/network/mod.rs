// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Network interception pipeline
//!
//! Ordered request/response stages around a transport call.

mod interceptor;
mod interceptor_trait;

pub use interceptor::ApiClient;
pub use interceptor_trait::{InterceptAction, InterceptorChain, RequestInterceptor, RequestLogger};
