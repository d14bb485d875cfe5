use async_trait::async_trait;
use happyhomes_config::PaymentConfig;
use serde::Deserialize;
use tracing::{info, instrument, warn};

use super::{PaymentError, PaymentGateway, PaymentIntent};

#[derive(Debug, Deserialize)]
struct IntentBody {
    id: Option<String>,
    client_secret: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}

/// Creates card payment intents through the Stripe REST API.
#[derive(Clone)]
pub struct StripeGateway {
    client: reqwest::Client,
    secret_key: String,
    api_base: String,
    currency: String,
}

impl std::fmt::Debug for StripeGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeGateway")
            .field("api_base", &self.api_base)
            .field("currency", &self.currency)
            .finish_non_exhaustive()
    }
}

impl StripeGateway {
    pub fn new(
        secret_key: impl Into<String>,
        api_base: impl Into<String>,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            secret_key: secret_key.into(),
            api_base: api_base.into(),
            currency: currency.into(),
        }
    }

    /// `None` when no secret key is configured.
    pub fn from_config(config: &PaymentConfig) -> Option<Self> {
        config
            .secret_key
            .as_ref()
            .map(|key| Self::new(key, &config.api_base, &config.currency))
    }

    fn intents_url(&self) -> String {
        format!("{}/v1/payment_intents", self.api_base.trim_end_matches('/'))
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    #[instrument(skip(self), fields(currency = %self.currency))]
    async fn create_payment_intent(
        &self,
        amount_cents: i64,
    ) -> Result<PaymentIntent, PaymentError> {
        let form = [
            ("amount", amount_cents.to_string()),
            ("currency", self.currency.clone()),
            ("payment_method_types[]", "card".to_string()),
        ];

        let response = self
            .client
            .post(self.intents_url())
            .bearer_auth(&self.secret_key)
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error.message)
                .unwrap_or_else(|| status.to_string());
            warn!(status = status.as_u16(), %message, "Payment intent rejected");
            return Err(PaymentError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let body: IntentBody = response
            .json()
            .await
            .map_err(|e| PaymentError::InvalidResponse(e.to_string()))?;

        let client_secret = body
            .client_secret
            .ok_or_else(|| PaymentError::InvalidResponse("missing client_secret".to_string()))?;

        info!(intent_id = ?body.id, "Payment intent created");

        Ok(PaymentIntent {
            id: body.id,
            client_secret,
        })
    }
}
