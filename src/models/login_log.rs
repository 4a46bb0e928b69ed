//! Login audit log records and query shapes.

use serde::{Deserialize, Serialize};

/// One login attempt as listed by `GET /login-logs`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginLogRecord {
    pub id: u64,
    pub user_id: u64,
    pub username: String,
    pub role: String,
    pub ip_address: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub device: Option<String>,
    pub success: bool,
    #[serde(default)]
    pub fail_reason: Option<String>,
    pub login_time: String,
    #[serde(default)]
    pub logout_time: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Filters for the login log listing.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginLogQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    /// Window start, RFC3339
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// Window end, RFC3339
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_audit_record() {
        let record: LoginLogRecord = serde_json::from_str(
            r#"{
                "id": 1,
                "userId": 7,
                "username": "alice",
                "role": "student",
                "ipAddress": "203.0.113.9",
                "success": false,
                "failReason": "bad password",
                "loginTime": "2026-03-01T08:30:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(record.user_id, 7);
        assert!(!record.success);
        assert_eq!(record.fail_reason.as_deref(), Some("bad password"));
    }
}
