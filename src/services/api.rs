// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP client for the console backend API.
//!
//! Handles:
//! - Request dispatch with JSON bodies and query strings
//! - Bearer token injection from the shared session context
//! - Mapping non-2xx responses to errors (401 is surfaced distinctly)

use crate::error::AppError;
use crate::state::SessionContext;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Console API client.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionContext>,
}

impl ApiClient {
    /// Create a new client against the given base URL.
    ///
    /// The session context is read for the access token on every request;
    /// committing a token there makes all subsequent calls authenticated.
    pub fn new(base_url: String, session: Arc<SessionContext>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            session,
        }
    }

    /// Generic GET request with JSON response.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let response = self
            .request(Method::GET, path)
            .send()
            .await
            .map_err(|e| AppError::Api(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// GET request with a serialized query string and JSON response.
    pub async fn get_json_with<T, Q>(&self, path: &str, query: &Q) -> Result<T, AppError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let response = self
            .request(Method::GET, path)
            .query(query)
            .send()
            .await
            .map_err(|e| AppError::Api(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// POST request with a JSON body and JSON response.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .request(Method::POST, path)
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::Api(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// POST request with a JSON body, response discarded.
    pub async fn post_json_discard<B>(&self, path: &str, body: &B) -> Result<(), AppError>
    where
        B: Serialize + ?Sized,
    {
        let response = self
            .request(Method::POST, path)
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::Api(e.to_string()))?;

        self.check_response(response).await
    }

    /// POST request with no body, response discarded.
    pub async fn post_empty(&self, path: &str) -> Result<(), AppError> {
        let response = self
            .request(Method::POST, path)
            .send()
            .await
            .map_err(|e| AppError::Api(e.to_string()))?;

        self.check_response(response).await
    }

    /// PUT request with a JSON body, response discarded.
    pub async fn put_json<B>(&self, path: &str, body: &B) -> Result<(), AppError>
    where
        B: Serialize + ?Sized,
    {
        let response = self
            .request(Method::PUT, path)
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::Api(e.to_string()))?;

        self.check_response(response).await
    }

    /// DELETE request, response discarded.
    pub async fn delete(&self, path: &str) -> Result<(), AppError> {
        let response = self
            .request(Method::DELETE, path)
            .send()
            .await
            .map_err(|e| AppError::Api(e.to_string()))?;

        self.check_response(response).await
    }

    /// Build a request with the session's bearer token attached, if any.
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self.http.request(method, url);

        let token = self.session.access.access_token();
        if token.is_empty() {
            builder
        } else {
            builder.bearer_auth(token)
        }
    }

    /// Check response status and return an error if not successful.
    async fn check_response(&self, response: reqwest::Response) -> Result<(), AppError> {
        if response.status().is_success() {
            return Ok(());
        }

        Err(Self::status_error(response).await)
    }

    /// Check response status and parse the JSON body.
    async fn check_response_json<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, AppError> {
        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Api(format!("JSON parse error: {}", e)))
    }

    async fn status_error(response: reqwest::Response) -> AppError {
        let status = response.status();

        // Token rejected or expired
        if status.as_u16() == 401 {
            return AppError::Unauthorized;
        }

        let body = response.text().await.unwrap_or_default();
        AppError::Api(format!("HTTP {}: {}", status, body))
    }
}
