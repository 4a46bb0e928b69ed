// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared fixtures: scripted auth backend plus recording collaborators.
//!
//! Backend, navigator, and notifier all append to one event log, so tests
//! can assert ordering across collaborators with a single comparison.

use async_trait::async_trait;
use campus_console::error::AppError;
use campus_console::models::{Credentials, RawUserProfile, Role, SessionDefaults};
use campus_console::navigation::Navigator;
use campus_console::notify::Notifier;
use campus_console::services::{AuthBackend, LoginRequest, LoginResponse, SessionController};
use campus_console::state::SessionContext;
use parking_lot::Mutex;
use serde_json::json;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

pub type EventLog = Arc<Mutex<Vec<String>>>;

/// Scripted [`AuthBackend`]. Responses are mutable through the `Arc` so
/// individual tests can flip failure modes after harness construction.
pub struct MockBackend {
    session: Arc<SessionContext>,
    events: EventLog,
    pub token: Mutex<Option<String>>,
    pub profile: Mutex<serde_json::Value>,
    pub authenticate_fails: AtomicBool,
    pub profile_fails: AtomicBool,
    pub sign_out_fails: AtomicBool,
    pub sign_out_calls: AtomicUsize,
}

#[async_trait]
impl AuthBackend for MockBackend {
    async fn authenticate(&self, request: &LoginRequest) -> Result<LoginResponse, AppError> {
        self.events
            .lock()
            .push(format!("authenticate:{}:{}", request.username, request.role));
        if self.authenticate_fails.load(Ordering::SeqCst) {
            return Err(AppError::Api("connection refused".to_string()));
        }
        Ok(LoginResponse {
            token: self.token.lock().clone(),
            user_id: 1,
            username: request.username.clone(),
            role: request.role.to_string(),
        })
    }

    async fn get_profile(&self) -> Result<RawUserProfile, AppError> {
        // Record the token visible to the transport at fetch time; the
        // controller must have committed it before this call.
        self.events.lock().push(format!(
            "get_profile:token={}",
            self.session.access.access_token()
        ));
        if self.profile_fails.load(Ordering::SeqCst) {
            return Err(AppError::Unauthorized);
        }
        Ok(serde_json::from_value(self.profile.lock().clone()).expect("profile fixture"))
    }

    async fn sign_out(&self) -> Result<(), AppError> {
        self.sign_out_calls.fetch_add(1, Ordering::SeqCst);
        self.events.lock().push("sign_out".to_string());
        if self.sign_out_fails.load(Ordering::SeqCst) {
            return Err(AppError::Api("connection refused".to_string()));
        }
        Ok(())
    }
}

/// Navigator that records calls and lets tests preset the current path.
/// Each navigation event notes whether the session identity was already
/// committed when it fired.
pub struct RecordingNavigator {
    session: Arc<SessionContext>,
    events: EventLog,
    pub current: Mutex<String>,
}

impl RecordingNavigator {
    fn record(&self, verb: &str, path: &str, query: &[(String, String)]) {
        let full = if query.is_empty() {
            path.to_string()
        } else {
            let joined = query
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join("&");
            format!("{path}?{joined}")
        };
        let identity = self.session.user.user_info().is_some();
        self.events
            .lock()
            .push(format!("{verb}:{full}[identity={identity}]"));
        *self.current.lock() = full;
    }
}

impl Navigator for RecordingNavigator {
    fn go_to(&self, path: &str, query: &[(String, String)]) {
        self.record("go_to", path, query);
    }

    fn replace(&self, path: &str, query: &[(String, String)]) {
        self.record("replace", path, query);
    }

    fn current_full_path(&self) -> String {
        self.current.lock().clone()
    }
}

pub struct RecordingNotifier {
    events: EventLog,
}

impl Notifier for RecordingNotifier {
    fn notify_success(&self, title: &str, description: &str) {
        self.events.lock().push(format!("notify:{title}:{description}"));
    }
}

pub struct Harness {
    pub session: Arc<SessionContext>,
    pub backend: Arc<MockBackend>,
    pub navigator: Arc<RecordingNavigator>,
    pub events: EventLog,
    pub controller: SessionController,
}

impl Harness {
    #[allow(dead_code)]
    pub fn events(&self) -> Vec<String> {
        self.events.lock().clone()
    }
}

/// Build a controller wired to scripted collaborators. The default script
/// is a clean student login: token `Bearer t1`, profile for Alice.
pub fn harness() -> Harness {
    let session = Arc::new(SessionContext::new());
    let events: EventLog = Arc::new(Mutex::new(Vec::new()));

    let backend = Arc::new(MockBackend {
        session: session.clone(),
        events: events.clone(),
        token: Mutex::new(Some("Bearer t1".to_string())),
        profile: Mutex::new(json!({
            "id": 1,
            "username": "alice",
            "role": "student",
            "token": "Bearer t1",
            "details": { "name": "Alice" },
        })),
        authenticate_fails: AtomicBool::new(false),
        profile_fails: AtomicBool::new(false),
        sign_out_fails: AtomicBool::new(false),
        sign_out_calls: AtomicUsize::new(0),
    });

    let navigator = Arc::new(RecordingNavigator {
        session: session.clone(),
        events: events.clone(),
        current: Mutex::new("/".to_string()),
    });

    let controller = SessionController::new(
        backend.clone(),
        navigator.clone(),
        Arc::new(RecordingNotifier {
            events: events.clone(),
        }),
        session.clone(),
        SessionDefaults {
            avatar: "/static/images/avatar-default.svg".to_string(),
            home_path: "/analytics".to_string(),
        },
    );

    Harness {
        session,
        backend,
        navigator,
        events,
        controller,
    }
}

/// Credentials for the default scripted login.
#[allow(dead_code)]
pub fn student_credentials() -> Credentials {
    Credentials {
        username: Some("alice".to_string()),
        password: Some("x".to_string()),
        role: Some(Role::Student),
    }
}
