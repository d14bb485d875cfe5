//! Payment records and payment intents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// A completed donation toward a campaign.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub campaign_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pet_name: Option<String>,
    /// Donor email
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentDto {
    #[validate(length(min = 1))]
    pub campaign_id: String,
    pub pet_name: Option<String>,
    /// Defaults to the caller's identity
    #[validate(email)]
    pub email: Option<String>,
    pub name: Option<String>,
    #[validate(range(exclusive_min = 0.0))]
    pub amount: f64,
    pub transaction_id: Option<String>,
}

impl CreatePaymentDto {
    pub fn into_record(self, caller_email: &str, now: DateTime<Utc>) -> PaymentRecord {
        PaymentRecord {
            id: String::new(),
            campaign_id: self.campaign_id,
            pet_name: self.pet_name,
            email: self.email.unwrap_or_else(|| caller_email.to_string()),
            name: self.name,
            amount: self.amount,
            transaction_id: self.transaction_id,
            created_at: Some(now),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePaymentDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(exclusive_min = 0.0))]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Largest intent amount accepted, in cents (999,999.99 in major units).
pub const MAX_INTENT_CENTS: i64 = 99_999_999;

fn price_to_cents(price: f64) -> f64 {
    (price * 100.0).round()
}

/// Rejects prices that round to less than one cent or more than [`MAX_INTENT_CENTS`].
fn validate_intent_price(price: f64) -> Result<(), ValidationError> {
    let cents = price_to_cents(price);
    if cents >= 1.0 && cents <= MAX_INTENT_CENTS as f64 {
        Ok(())
    } else {
        Err(ValidationError::new("price_out_of_range"))
    }
}

/// Body of `POST /create-payment-intent`. `price` is in major currency units.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct PaymentIntentRequest {
    #[validate(custom(function = "validate_intent_price"))]
    pub price: f64,
}

impl PaymentIntentRequest {
    /// The price in the smallest currency unit, rounded to the nearest cent.
    ///
    /// Exact for every price that passes validation.
    pub fn amount_cents(&self) -> i64 {
        price_to_cents(self.price) as i64
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResponse {
    pub client_secret: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn price_converts_to_rounded_cents() {
        let cases = [(10.0, 1000), (19.99, 1999), (0.1, 10), (2.5, 250)];
        for (price, cents) in cases {
            assert_eq!(PaymentIntentRequest { price }.amount_cents(), cents, "{price}");
        }
    }

    #[test]
    fn price_must_be_positive() {
        assert!(PaymentIntentRequest { price: 0.0 }.validate().is_err());
        assert!(PaymentIntentRequest { price: -5.0 }.validate().is_err());
        assert!(PaymentIntentRequest { price: 0.5 }.validate().is_ok());
    }

    #[test]
    fn price_below_one_cent_is_rejected() {
        assert!(PaymentIntentRequest { price: 0.001 }.validate().is_err());
        assert!(PaymentIntentRequest { price: 0.004 }.validate().is_err());

        let smallest = PaymentIntentRequest { price: 0.01 };
        assert!(smallest.validate().is_ok());
        assert_eq!(smallest.amount_cents(), 1);
    }

    #[test]
    fn price_above_maximum_is_rejected() {
        assert!(PaymentIntentRequest { price: 1e17 }.validate().is_err());
        assert!(PaymentIntentRequest { price: 1_000_000.0 }.validate().is_err());

        let largest = PaymentIntentRequest { price: 999_999.99 };
        assert!(largest.validate().is_ok());
        assert_eq!(largest.amount_cents(), MAX_INTENT_CENTS);
    }

    #[test]
    fn intent_response_is_camel_case() {
        let response = PaymentIntentResponse {
            client_secret: "pi_1_secret_2".to_string(),
        };
        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({"clientSecret": "pi_1_secret_2"})
        );
    }

    #[test]
    fn new_record_defaults_donor_to_caller() {
        let dto: CreatePaymentDto =
            serde_json::from_value(json!({"campaignId": "c1", "amount": 25.0})).unwrap();
        assert!(dto.validate().is_ok());

        let record = dto.into_record("donor@x.com", Utc::now());
        assert_eq!(record.email, "donor@x.com");
        assert_eq!(record.campaign_id, "c1");
    }
}
