//! Payment processor boundary.
//!
//! The API needs exactly one thing from the processor: a client secret for a
//! payment intent of a given amount. [`PaymentGateway`] is that seam;
//! [`StripeGateway`] talks to Stripe over HTTP and `MockPaymentGateway`
//! (feature `test-utils`) stands in for it in tests.

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use thiserror::Error;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod stripe;

#[cfg(any(test, feature = "test-utils"))]
pub use mock::MockPaymentGateway;
pub use stripe::StripeGateway;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentIntent {
    pub id: Option<String>,
    pub client_secret: String,
}

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("payment processor unreachable: {0}")]
    Request(#[from] reqwest::Error),
    #[error("payment processor rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("unexpected payment processor response: {0}")]
    InvalidResponse(String),
}

impl PaymentError {
    /// Status the API answers with when this error ends a request.
    pub fn status(&self) -> StatusCode {
        match self {
            PaymentError::Request(_) => StatusCode::INTERNAL_SERVER_ERROR,
            PaymentError::Rejected { .. } | PaymentError::InvalidResponse(_) => {
                StatusCode::BAD_GATEWAY
            }
        }
    }
}

#[async_trait]
pub trait PaymentGateway: Send + Sync + 'static {
    /// Creates an intent for `amount_cents` in the smallest currency unit.
    async fn create_payment_intent(&self, amount_cents: i64)
    -> Result<PaymentIntent, PaymentError>;
}

pub type SharedPaymentGateway = Arc<dyn PaymentGateway>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn processor_failures_are_bad_gateway() {
        let rejected = PaymentError::Rejected {
            status: 402,
            message: "card declined".to_string(),
        };
        assert_eq!(rejected.status(), StatusCode::BAD_GATEWAY);
        assert!(rejected.to_string().contains("card declined"));

        let invalid = PaymentError::InvalidResponse("no client_secret".to_string());
        assert_eq!(invalid.status(), StatusCode::BAD_GATEWAY);
    }
}
