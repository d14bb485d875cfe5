use std::sync::Arc;

use happyhomes_config::{CorsConfig, JwtConfig, PaymentConfig, StoreConfig};
use happyhomes_db::{SharedStore, StoreError, init_store};
use happyhomes_observability::PrometheusHandle;
use tracing::{info, warn};

use crate::payments::{SharedPaymentGateway, StripeGateway};

/// Everything a handler may touch. Cloned per request; all fields are cheap handles.
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    /// `None` when no processor key is configured
    pub payments: Option<SharedPaymentGateway>,
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(store: SharedStore, jwt_config: JwtConfig, cors_config: CorsConfig) -> Self {
        Self {
            store,
            jwt_config,
            cors_config,
            payments: None,
            metrics: None,
        }
    }

    pub fn with_payments(mut self, gateway: SharedPaymentGateway) -> Self {
        self.payments = Some(gateway);
        self
    }

    pub fn with_metrics(mut self, handle: Option<PrometheusHandle>) -> Self {
        self.metrics = handle;
        self
    }
}

/// Builds the state from the environment, opening the store once for the whole process.
pub async fn init_app_state(metrics: Option<PrometheusHandle>) -> Result<AppState, StoreError> {
    let store = init_store(&StoreConfig::from_env()).await?;
    let mut state = AppState::new(store, JwtConfig::from_env(), CorsConfig::from_env())
        .with_metrics(metrics);

    match StripeGateway::from_config(&PaymentConfig::from_env()) {
        Some(gateway) => {
            info!("Stripe payment gateway configured");
            state = state.with_payments(Arc::new(gateway));
        }
        None => warn!("STRIPE_SECRET_KEY not set; payment intents are unavailable"),
    }

    Ok(state)
}
