// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Session handling for API calls
//!
//! - Session snapshots and the authentication provider seam
//! - Protected API base URL
//! - Interceptor attaching credentials and detecting rejected sessions

mod api_url;
mod interceptor;
mod session;

pub use api_url::{ApiUrlConfig, BaseUrlResolver};
pub use interceptor::{classify, AuthInterceptor, SessionVerdict};
pub use session::{AuthProvider, LogoutHook, Session, SessionStore};
