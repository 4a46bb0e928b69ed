// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session lifecycle controller.
//!
//! Owns the login → session → logout state machine: credential exchange,
//! token normalization, profile adaptation into the session stores, and
//! post-auth navigation and feedback. The controller is the single writer
//! of the session context.

use crate::error::AppError;
use crate::models::{Credentials, SessionDefaults, UserInfo};
use crate::navigation::Navigator;
use crate::notify::Notifier;
use crate::routes::LOGIN_ROUTE;
use crate::services::auth::{AuthBackend, LoginRequest};
use crate::state::SessionContext;
use crate::token;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Callback that replaces the default post-login navigation.
pub type LoginCallback = Box<dyn FnOnce() + Send>;

/// What a login attempt produced. `user_info` is `None` only when the
/// backend answered successfully but issued no usable token.
#[derive(Debug)]
pub struct LoginOutcome {
    pub user_info: Option<UserInfo>,
}

/// Drives the session lifecycle against an [`AuthBackend`].
pub struct SessionController {
    backend: Arc<dyn AuthBackend>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    session: Arc<SessionContext>,
    defaults: SessionDefaults,
    login_busy: Arc<AtomicBool>,
}

impl SessionController {
    pub fn new(
        backend: Arc<dyn AuthBackend>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
        session: Arc<SessionContext>,
        defaults: SessionDefaults,
    ) -> Self {
        Self {
            backend,
            navigator,
            notifier,
            session,
            defaults,
            login_busy: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether a login call is currently in flight.
    ///
    /// Advisory only: UI layers poll this to disable re-submission, but a
    /// caller that ignores it can still issue concurrent logins, in which
    /// case the stores end up last-write-wins.
    pub fn login_in_progress(&self) -> bool {
        self.login_busy.load(Ordering::Acquire)
    }

    /// Exchange credentials for a session and establish it.
    ///
    /// On a usable token: commits it, populates the session stores via
    /// [`Self::fetch_user_info`], then navigates to the identity's home
    /// route (skipped when the expired-session flag intercepts, replaced
    /// by `on_success` when supplied) and emits a welcome notification.
    ///
    /// A successful response without a usable token is a no-op, not an
    /// error. Backend failures propagate untouched; the busy flag is
    /// released on every exit path.
    pub async fn login(
        &self,
        credentials: Credentials,
        on_success: Option<LoginCallback>,
    ) -> Result<LoginOutcome, AppError> {
        let _busy = BusyGuard::acquire(self.login_busy.clone());

        let request = LoginRequest::from(credentials);
        let response = self.backend.authenticate(&request).await?;
        let access_token = token::normalize(response.token.as_deref());

        if access_token.is_empty() {
            tracing::debug!(username = %request.username, "Backend issued no session token");
            return Ok(LoginOutcome { user_info: None });
        }

        // The transport layer reads the token from the access store, so it
        // must be committed before the profile fetch goes out.
        self.session.access.set_access_token(access_token);

        let user_info = self.fetch_user_info().await?;

        if self.session.access.login_expired() {
            // A force-expired session is being re-established in place;
            // stay on the current route.
            self.session.access.set_login_expired(false);
        } else if let Some(callback) = on_success {
            callback();
        } else {
            let home = if user_info.home_path.is_empty() {
                self.defaults.home_path.as_str()
            } else {
                user_info.home_path.as_str()
            };
            self.navigator.go_to(home, &[]);
        }

        if !user_info.real_name.is_empty() || !user_info.username.is_empty() {
            self.notifier.notify_success(
                "Login successful",
                &format!("Welcome back: {}", user_info.greeting_name()),
            );
        }

        tracing::info!(user_id = %user_info.user_id, "Session established");

        Ok(LoginOutcome {
            user_info: Some(user_info),
        })
    }

    /// Fetch the profile and commit identity + access codes to the stores.
    pub async fn fetch_user_info(&self) -> Result<UserInfo, AppError> {
        let profile = self.backend.get_profile().await?;
        let user_info = UserInfo::from_profile(&profile, &self.defaults);

        self.session.user.set_user_info(user_info.clone());
        self.session.access.set_access_codes(user_info.roles.clone());

        Ok(user_info)
    }

    /// Tear the session down and return to the login route.
    ///
    /// The backend sign-out is best-effort: an unreachable backend must
    /// never keep a user locked into a dead session. With `redirect`, the
    /// current full path rides along as a `redirect` query parameter so
    /// the shell can restore it after re-authentication.
    pub async fn logout(&self, redirect: bool) {
        if !self.session.access.access_token().is_empty() {
            if let Err(error) = self.backend.sign_out().await {
                tracing::warn!(error = %error, "Sign-out request failed, clearing local session anyway");
            }
        }

        self.session.reset();

        let query = if redirect {
            let return_to = urlencoding::encode(&self.navigator.current_full_path()).into_owned();
            vec![("redirect".to_string(), return_to)]
        } else {
            Vec::new()
        };

        self.navigator.replace(LOGIN_ROUTE, &query);
    }

    /// Clear the busy flag only. Used when the controller is torn down and
    /// rebuilt, so a stale flag cannot survive into the new instance. The
    /// session stores are cleared exclusively by [`Self::logout`].
    pub fn reset(&self) {
        self.login_busy.store(false, Ordering::Release);
    }
}

/// Scoped hold on the login busy flag; released on drop, so every exit
/// path of `login` (success, empty session, failure) clears it.
struct BusyGuard {
    flag: Arc<AtomicBool>,
}

impl BusyGuard {
    fn acquire(flag: Arc<AtomicBool>) -> Self {
        flag.store(true, Ordering::Release);
        Self { flag }
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
