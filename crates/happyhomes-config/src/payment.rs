use std::env;

pub const DEFAULT_STRIPE_API_BASE: &str = "https://api.stripe.com";

#[derive(Clone, Debug)]
pub struct PaymentConfig {
    /// Processor secret key. Payment intents are refused while unset.
    pub secret_key: Option<String>,
    pub api_base: String,
    pub currency: String,
}

impl PaymentConfig {
    pub fn from_env() -> Self {
        Self {
            secret_key: env::var("STRIPE_SECRET_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            api_base: env::var("STRIPE_API_BASE")
                .unwrap_or_else(|_| DEFAULT_STRIPE_API_BASE.to_string()),
            currency: env::var("PAYMENT_CURRENCY").unwrap_or_else(|_| "usd".to_string()),
        }
    }
}
