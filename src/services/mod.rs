// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - API clients and the session controller.

pub mod api;
pub mod auth;
pub mod session;
pub mod system;

pub use api::ApiClient;
pub use auth::{AuthApi, AuthBackend, LoginRequest, LoginResponse};
pub use session::{LoginCallback, LoginOutcome, SessionController};
pub use system::SystemApi;
