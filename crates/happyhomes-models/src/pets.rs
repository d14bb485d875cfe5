//! Pet listings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    /// Email of the user who listed the pet
    pub email: String,
    #[serde(default)]
    pub adopted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePetDto {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub age: Option<u32>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    /// Lister email; defaults to the caller's identity
    #[validate(email)]
    pub email: Option<String>,
}

impl CreatePetDto {
    /// A new, unadopted listing owned by `email` unless the body names another owner.
    pub fn into_pet(self, email: &str, now: DateTime<Utc>) -> Pet {
        Pet {
            id: String::new(),
            name: self.name,
            age: self.age,
            image: self.image,
            category: self.category,
            location: self.location,
            short_description: self.short_description,
            long_description: self.long_description,
            email: self.email.unwrap_or_else(|| email.to_string()),
            adopted: false,
            created_at: Some(now),
        }
    }
}

/// Field set for `PATCH /pets/{id}`. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePetDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adopted: Option<bool>,
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
pub struct PetFilterParams {
    pub category: Option<String>,
    pub adopted: Option<bool>,
}

/// Field set applied by `PATCH /pets/adopt/{id}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct MarkAdopted {
    pub adopted: bool,
}
