//! User records and registration DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Stored role of a user.
///
/// Only [`UserRole::Admin`] passes the role gate. Stored values this enum does
/// not know decode as [`UserRole::User`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    User,
}

impl UserRole {
    pub const ADMIN: &'static str = "admin";

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => Self::ADMIN,
            UserRole::User => "user",
        }
    }

    /// Only the exact string `admin` is privileged.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some(Self::ADMIN) => UserRole::Admin,
            _ => UserRole::User,
        }
    }

    fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(Self::from_stored(raw.as_deref()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(default, deserialize_with = "UserRole::deserialize_lenient")]
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserDto {
    pub name: Option<String>,
    #[validate(email)]
    pub email: String,
    pub photo: Option<String>,
}

impl CreateUserDto {
    /// A fresh record with the default role.
    pub fn into_user(self, now: DateTime<Utc>) -> User {
        User {
            id: String::new(),
            name: self.name,
            email: self.email,
            photo: self.photo,
            role: UserRole::User,
            created_at: Some(now),
        }
    }
}

/// Outcome of `POST /users`.
///
/// A repeated registration carries a message and a null `insertedId`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub inserted_id: Option<String>,
}

impl RegisterUserResponse {
    pub const ALREADY_EXISTS: &'static str = "user already exists";

    pub fn created(inserted_id: impl Into<String>) -> Self {
        Self {
            message: None,
            inserted_id: Some(inserted_id.into()),
        }
    }

    pub fn already_exists() -> Self {
        Self {
            message: Some(Self::ALREADY_EXISTS.to_string()),
            inserted_id: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AdminStatusResponse {
    pub admin: bool,
}

/// Field set applied when promoting a user.
#[derive(Debug, Serialize, ToSchema)]
pub struct RoleUpdate {
    pub role: UserRole,
}
