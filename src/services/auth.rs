// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Authentication backend: credential exchange, profile fetch, sign-out.

use crate::error::AppError;
use crate::models::{Credentials, RawUserProfile, Role};
use crate::services::api::ApiClient;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Body for `POST /auth/login`. Every field is always present; blanks are
/// sent as empty strings so the backend never sees a missing-field error
/// for input the user simply left out.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    pub role: Role,
}

impl From<Credentials> for LoginRequest {
    fn from(credentials: Credentials) -> Self {
        Self {
            username: credentials.username.unwrap_or_default(),
            password: credentials.password.unwrap_or_default(),
            role: credentials.role.unwrap_or_default(),
        }
    }
}

/// Response of `POST /auth/login`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// May still carry the transport scheme marker; normalize before use.
    #[serde(default)]
    pub token: Option<String>,
    pub user_id: u64,
    pub username: String,
    pub role: String,
}

/// The authentication operations the session controller depends on.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Exchange credentials for a session token.
    async fn authenticate(&self, request: &LoginRequest) -> Result<LoginResponse, AppError>;

    /// Fetch the authenticated user's profile (token implicit).
    async fn get_profile(&self) -> Result<RawUserProfile, AppError>;

    /// Tell the backend to end the session.
    async fn sign_out(&self) -> Result<(), AppError>;
}

/// HTTP implementation of [`AuthBackend`] over the console API.
#[derive(Clone)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthBackend for AuthApi {
    async fn authenticate(&self, request: &LoginRequest) -> Result<LoginResponse, AppError> {
        self.client.post_json("/auth/login", request).await
    }

    async fn get_profile(&self) -> Result<RawUserProfile, AppError> {
        self.client.get_json("/auth/users/me").await
    }

    async fn sign_out(&self) -> Result<(), AppError> {
        self.client.post_empty("/auth/logout").await
    }
}
