// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Admin resource endpoints: typed, logic-free wrappers over [`ApiClient`].

use crate::error::AppError;
use crate::models::{
    AdminPayload, AdminQuery, AdminRecord, ClassQuery, ClassRecord, LoginLogQuery, LoginLogRecord,
    PageResult, StudentPayload, StudentQuery, StudentRecord, TeacherPayload, TeacherQuery,
    TeacherRecord,
};
use crate::services::api::ApiClient;

/// Client for the console's system-management endpoints.
#[derive(Clone)]
pub struct SystemApi {
    client: ApiClient,
}

impl SystemApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    // ─── Students ────────────────────────────────────────────────────────

    /// List students, paginated.
    pub async fn student_page(
        &self,
        query: &StudentQuery,
    ) -> Result<PageResult<StudentRecord>, AppError> {
        self.client.get_json_with("/students", query).await
    }

    pub async fn create_student(&self, payload: &StudentPayload) -> Result<(), AppError> {
        self.client.post_json_discard("/students", payload).await
    }

    pub async fn update_student(&self, id: u64, payload: &StudentPayload) -> Result<(), AppError> {
        self.client
            .put_json(&format!("/students/{}", id), payload)
            .await
    }

    pub async fn delete_student(&self, id: u64) -> Result<(), AppError> {
        self.client.delete(&format!("/students/{}", id)).await
    }

    // ─── Teachers ────────────────────────────────────────────────────────

    /// List teachers, paginated.
    pub async fn teacher_page(
        &self,
        query: &TeacherQuery,
    ) -> Result<PageResult<TeacherRecord>, AppError> {
        self.client.get_json_with("/teachers", query).await
    }

    pub async fn create_teacher(&self, payload: &TeacherPayload) -> Result<(), AppError> {
        self.client.post_json_discard("/teachers", payload).await
    }

    pub async fn update_teacher(&self, id: u64, payload: &TeacherPayload) -> Result<(), AppError> {
        self.client
            .put_json(&format!("/teachers/{}", id), payload)
            .await
    }

    pub async fn delete_teacher(&self, id: u64) -> Result<(), AppError> {
        self.client.delete(&format!("/teachers/{}", id)).await
    }

    // ─── Administrators ──────────────────────────────────────────────────

    /// List administrators, paginated.
    pub async fn admin_page(&self, query: &AdminQuery) -> Result<PageResult<AdminRecord>, AppError> {
        self.client.get_json_with("/admins", query).await
    }

    pub async fn create_admin(&self, payload: &AdminPayload) -> Result<(), AppError> {
        self.client.post_json_discard("/admins", payload).await
    }

    pub async fn update_admin(&self, id: u64, payload: &AdminPayload) -> Result<(), AppError> {
        self.client
            .put_json(&format!("/admins/{}", id), payload)
            .await
    }

    pub async fn delete_admin(&self, id: u64) -> Result<(), AppError> {
        self.client.delete(&format!("/admins/{}", id)).await
    }

    // ─── Classes / Login logs ────────────────────────────────────────────

    /// List classes, paginated.
    pub async fn class_page(&self, query: &ClassQuery) -> Result<PageResult<ClassRecord>, AppError> {
        self.client.get_json_with("/classes", query).await
    }

    /// List login audit entries, paginated.
    pub async fn login_logs(
        &self,
        query: &LoginLogQuery,
    ) -> Result<PageResult<LoginLogRecord>, AppError> {
        self.client.get_json_with("/login-logs", query).await
    }
}
