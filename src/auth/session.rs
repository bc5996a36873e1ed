// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Session snapshot and authentication provider
//!
//! The provider owns the session; interceptors only read snapshots and
//! ask for a logout.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Session snapshot as seen at decision time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Credential token, attached verbatim as `Authorization`
    #[serde(alias = "authToken")]
    pub token: Option<String>,
    /// Expiration flag; absent means not expired
    pub is_expired: Option<bool>,
}

impl Session {
    /// Create a session holding a token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            is_expired: None,
        }
    }

    /// Mark the session as expired
    pub fn expired(mut self) -> Self {
        self.is_expired = Some(true);
        self
    }

    /// Token, if present and non-empty
    pub fn credential(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    /// Whether the client believes the session has expired
    pub fn is_expired(&self) -> bool {
        self.is_expired.unwrap_or(false)
    }
}

/// Authentication provider consumed by the auth interceptor
///
/// `logout_redirect` may be called several times for one failure burst
/// (concurrent 401s, for instance) and must tolerate that.
pub trait AuthProvider: Send + Sync {
    /// Current session snapshot
    fn current_session(&self) -> Session;

    /// Terminate the session and redirect the user
    fn logout_redirect(&self);
}

/// Logout hook type
pub type LogoutHook = Arc<dyn Fn() + Send + Sync>;

/// In-memory authentication provider
#[derive(Clone, Default)]
pub struct SessionStore {
    session: Arc<RwLock<Session>>,
    logouts: Arc<AtomicU64>,
    on_logout: Option<LogoutHook>,
}

impl SessionStore {
    /// Create an empty store (no token)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from an existing session
    pub fn with_session(session: Session) -> Self {
        Self {
            session: Arc::new(RwLock::new(session)),
            ..Default::default()
        }
    }

    /// Set the logout hook, run on every `logout_redirect`
    pub fn on_logout(mut self, hook: LogoutHook) -> Self {
        self.on_logout = Some(hook);
        self
    }

    /// Replace the session with a fresh signed-in one
    pub fn sign_in(&self, token: impl Into<String>) {
        *self.session.write() = Session::with_token(token);
    }

    /// Replace the whole session
    pub fn set_session(&self, session: Session) {
        *self.session.write() = session;
    }

    /// Flag the current session as expired
    pub fn mark_expired(&self) {
        self.session.write().is_expired = Some(true);
    }

    /// Drop the current session
    pub fn clear(&self) {
        *self.session.write() = Session::default();
    }

    /// Number of logout requests received
    pub fn logout_count(&self) -> u64 {
        self.logouts.load(Ordering::SeqCst)
    }
}

impl AuthProvider for SessionStore {
    fn current_session(&self) -> Session {
        self.session.read().clone()
    }

    fn logout_redirect(&self) {
        let count = self.logouts.fetch_add(1, Ordering::SeqCst) + 1;
        self.clear();
        tracing::info!(logouts = count, "Session terminated, redirecting to logout");

        if let Some(ref hook) = self.on_logout {
            hook();
        }
    }
}
