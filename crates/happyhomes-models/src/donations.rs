//! Donation campaigns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DonationCampaign {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub pet_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pet_image: Option<String>,
    pub max_amount: f64,
    #[serde(default)]
    pub donated_amount: f64,
    /// Closing date as supplied by the creator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    /// Email of the campaign creator
    pub email: String,
    #[serde(default)]
    pub paused: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDonationDto {
    #[validate(length(min = 1, max = 100))]
    pub pet_name: String,
    pub pet_image: Option<String>,
    #[validate(range(exclusive_min = 0.0))]
    pub max_amount: f64,
    pub last_date: Option<String>,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    /// Defaults to the caller's identity
    #[validate(email)]
    pub email: Option<String>,
}

impl CreateDonationDto {
    /// A running campaign with nothing donated yet.
    pub fn into_campaign(self, caller_email: &str, now: DateTime<Utc>) -> DonationCampaign {
        DonationCampaign {
            id: String::new(),
            pet_name: self.pet_name,
            pet_image: self.pet_image,
            max_amount: self.max_amount,
            donated_amount: 0.0,
            last_date: self.last_date,
            short_description: self.short_description,
            long_description: self.long_description,
            email: self.email.unwrap_or_else(|| caller_email.to_string()),
            paused: false,
            created_at: Some(now),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDonationDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100))]
    pub pet_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(exclusive_min = 0.0))]
    pub max_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0))]
    pub donated_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paused: Option<bool>,
}
