//! Student account records and request shapes.

use serde::{Deserialize, Serialize};

/// Student account as listed by `GET /students`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub sex: Option<String>,
    #[serde(default)]
    pub birth: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub class_id: Option<u64>,
    #[serde(default)]
    pub school: Option<String>,
    /// Accepted-problem count
    #[serde(default)]
    pub ac: Option<u64>,
    /// Total submission count
    #[serde(default)]
    pub submit: Option<u64>,
    #[serde(default)]
    pub score: Option<i64>,
    #[serde(default)]
    pub daily_challenge: Option<String>,
    #[serde(default)]
    pub last_login_time: Option<String>,
    #[serde(default)]
    pub last_visit_time: Option<String>,
    #[serde(default)]
    pub last_login_ip: Option<String>,
    #[serde(default)]
    pub last_language: Option<String>,
    #[serde(default)]
    pub register_ip: Option<String>,
    #[serde(default)]
    pub is_verified: Option<bool>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Filters for the student listing.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_id: Option<u64>,
}

/// Body for creating or updating a student account.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPayload {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_id: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_tolerates_sparse_fields() {
        let record: StudentRecord =
            serde_json::from_str(r#"{"id":3,"username":"bob","classId":12}"#).unwrap();

        assert_eq!(record.id, 3);
        assert_eq!(record.class_id, Some(12));
        assert!(record.email.is_none());
    }

    #[test]
    fn test_query_skips_unset_filters() {
        let query = StudentQuery {
            page: Some(2),
            ..Default::default()
        };

        assert_eq!(serde_json::to_string(&query).unwrap(), r#"{"page":2}"#);
    }
}
