use std::sync::Mutex;

use async_trait::async_trait;

use super::{PaymentError, PaymentGateway, PaymentIntent};

/// In-process gateway returning predictable secrets and recording every amount requested.
#[derive(Debug, Default)]
pub struct MockPaymentGateway {
    requested: Mutex<Vec<i64>>,
    reject: bool,
}

impl MockPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// A gateway that rejects every intent, like a processor declining the request.
    pub fn rejecting() -> Self {
        Self {
            requested: Mutex::default(),
            reject: true,
        }
    }

    pub fn requested_amounts(&self) -> Vec<i64> {
        self.requested
            .lock()
            .map(|amounts| amounts.clone())
            .unwrap_or_default()
    }

    pub fn secret_for(sequence: usize, amount_cents: i64) -> String {
        format!("pi_mock_{sequence}_secret_{amount_cents}")
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn create_payment_intent(
        &self,
        amount_cents: i64,
    ) -> Result<PaymentIntent, PaymentError> {
        let sequence = {
            let mut requested = self
                .requested
                .lock()
                .map_err(|_| PaymentError::InvalidResponse("mock poisoned".to_string()))?;
            requested.push(amount_cents);
            requested.len()
        };

        if self.reject {
            return Err(PaymentError::Rejected {
                status: 402,
                message: "Your card was declined.".to_string(),
            });
        }

        Ok(PaymentIntent {
            id: Some(format!("pi_mock_{sequence}")),
            client_secret: Self::secret_for(sequence, amount_cents),
        })
    }
}
