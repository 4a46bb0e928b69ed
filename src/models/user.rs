//! Account roles, login credentials, and the session identity.

use crate::token;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Console account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    #[default]
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "teacher" => Ok(Role::Teacher),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// Login form input. Fields a user left blank stay `None` here; the login
/// request applies the defaults (empty strings, admin role) so the backend
/// never sees a missing field.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub username: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
}

/// User profile as returned by `GET /auth/users/me`.
///
/// `details` is an open attribute map the backend extends freely; only the
/// `name` and `title` keys are ever read here.
#[derive(Debug, Clone, Deserialize)]
pub struct RawUserProfile {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub details: HashMap<String, Value>,
}

impl RawUserProfile {
    /// Look up a non-empty string attribute from the open `details` map.
    fn detail_str(&self, key: &str) -> Option<&str> {
        self.details
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }
}

/// Presentation defaults substituted for profile fields the backend omits.
#[derive(Debug, Clone)]
pub struct SessionDefaults {
    pub avatar: String,
    pub home_path: String,
}

/// Normalized session identity consumed by the rest of the console.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserInfo {
    pub user_id: String,
    pub username: String,
    pub real_name: String,
    /// At most one entry, upper-cased; empty when the profile carried no role.
    pub roles: Vec<String>,
    pub avatar: String,
    pub home_path: String,
    pub description: String,
    pub token: String,
}

impl UserInfo {
    /// Build the session identity from a raw profile.
    ///
    /// Display name falls back from `details.name` to the username, and the
    /// descriptor from `details.title` through the role forms.
    pub fn from_profile(raw: &RawUserProfile, defaults: &SessionDefaults) -> Self {
        let role_upper = if raw.role.is_empty() {
            String::new()
        } else {
            raw.role.to_uppercase()
        };
        let roles = if role_upper.is_empty() {
            Vec::new()
        } else {
            vec![role_upper.clone()]
        };

        let real_name = raw
            .detail_str("name")
            .map(str::to_string)
            .or_else(|| non_empty(&raw.username))
            .unwrap_or_default();

        // TODO: revisit the ADMIN fallback for role-less student/teacher
        // profiles; it mislabels them in the account dropdown.
        let description = raw
            .detail_str("title")
            .map(str::to_string)
            .or_else(|| non_empty(&role_upper))
            .or_else(|| non_empty(&raw.role))
            .unwrap_or_else(|| "ADMIN".to_string());

        Self {
            user_id: raw.id.to_string(),
            username: raw.username.clone(),
            real_name,
            roles,
            avatar: raw
                .avatar
                .clone()
                .unwrap_or_else(|| defaults.avatar.clone()),
            home_path: defaults.home_path.clone(),
            description,
            token: token::normalize(raw.token.as_deref()),
        }
    }

    /// Name used when greeting the user: display name, then username.
    pub fn greeting_name(&self) -> &str {
        if self.real_name.is_empty() {
            &self.username
        } else {
            &self.real_name
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
