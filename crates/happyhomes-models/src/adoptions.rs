//! Adoption requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AdoptionStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdoptionRequest {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub pet_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pet_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pet_image: Option<String>,
    /// Email of the user who listed the pet
    pub owner_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requester_name: Option<String>,
    pub requester_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default)]
    pub status: AdoptionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdoptionDto {
    #[validate(length(min = 1))]
    pub pet_id: String,
    pub pet_name: Option<String>,
    pub pet_image: Option<String>,
    #[validate(email)]
    pub owner_email: String,
    pub requester_name: Option<String>,
    /// Defaults to the caller's identity
    #[validate(email)]
    pub requester_email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl CreateAdoptionDto {
    pub fn into_request(self, caller_email: &str, now: DateTime<Utc>) -> AdoptionRequest {
        AdoptionRequest {
            id: String::new(),
            pet_id: self.pet_id,
            pet_name: self.pet_name,
            pet_image: self.pet_image,
            owner_email: self.owner_email,
            requester_name: self.requester_name,
            requester_email: self
                .requester_email
                .unwrap_or_else(|| caller_email.to_string()),
            phone: self.phone,
            address: self.address,
            status: AdoptionStatus::Pending,
            created_at: Some(now),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateAdoptionStatusDto {
    pub status: AdoptionStatus,
}
