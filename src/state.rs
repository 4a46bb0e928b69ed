// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Process-wide session stores.
//!
//! `SessionContext` bundles the access store (token, expiry flag, access
//! codes) and the user store (normalized identity). The composition root
//! owns one context behind an `Arc`; the session controller is the only
//! writer, everything else reads.

use crate::models::UserInfo;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

/// Access-side session state: token, expiry flag, granted access codes.
#[derive(Debug, Default)]
pub struct AccessState {
    access_token: RwLock<String>,
    login_expired: AtomicBool,
    access_codes: RwLock<Vec<String>>,
}

impl AccessState {
    /// Current access token; empty when no session is established.
    pub fn access_token(&self) -> String {
        self.access_token.read().clone()
    }

    pub fn set_access_token(&self, token: String) {
        *self.access_token.write() = token;
    }

    /// Whether a previously established session was force-expired.
    pub fn login_expired(&self) -> bool {
        self.login_expired.load(Ordering::Acquire)
    }

    pub fn set_login_expired(&self, expired: bool) {
        self.login_expired.store(expired, Ordering::Release);
    }

    /// Access codes (role identifiers) granted to the session.
    pub fn access_codes(&self) -> Vec<String> {
        self.access_codes.read().clone()
    }

    pub fn set_access_codes(&self, codes: Vec<String>) {
        *self.access_codes.write() = codes;
    }

    fn clear(&self) {
        self.access_token.write().clear();
        self.login_expired.store(false, Ordering::Release);
        self.access_codes.write().clear();
    }
}

/// User-side session state: the normalized identity, if any.
#[derive(Debug, Default)]
pub struct UserState {
    user_info: RwLock<Option<UserInfo>>,
}

impl UserState {
    pub fn user_info(&self) -> Option<UserInfo> {
        self.user_info.read().clone()
    }

    pub fn set_user_info(&self, info: UserInfo) {
        *self.user_info.write() = Some(info);
    }

    fn clear(&self) {
        *self.user_info.write() = None;
    }
}

/// The whole per-process session: access store + user store.
#[derive(Debug, Default)]
pub struct SessionContext {
    pub access: AccessState,
    pub user: UserState,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset every store to its initial empty state.
    pub fn reset(&self) {
        self.access.clear();
        self.user.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let session = SessionContext::new();
        assert_eq!(session.access.access_token(), "");
        assert!(!session.access.login_expired());
        assert!(session.access.access_codes().is_empty());
        assert!(session.user.user_info().is_none());
    }

    #[test]
    fn test_reset_clears_everything() {
        let session = SessionContext::new();
        session.access.set_access_token("t1".to_string());
        session.access.set_login_expired(true);
        session.access.set_access_codes(vec!["ADMIN".to_string()]);
        session.user.set_user_info(UserInfo::default());

        session.reset();

        assert_eq!(session.access.access_token(), "");
        assert!(!session.access.login_expired());
        assert!(session.access.access_codes().is_empty());
        assert!(session.user.user_info().is_none());
    }
}
