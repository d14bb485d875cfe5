use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

use crate::middleware::auth::require_auth;
use crate::modules::payments::controller::{
    create_payment_intent, create_payment_record, get_payments_by_campaign, get_payments_by_donor,
    refund_payment, update_payment_record,
};
use crate::state::AppState;

/// `/paymentDonations/{key}` takes a donor email on `GET` and a record ID on `PATCH`.
pub fn init_payments_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/create-payment-intent", post(create_payment_intent))
        .route("/paymentDonations", post(create_payment_record))
        .route(
            "/paymentDonations/{key}",
            get(get_payments_by_donor).patch(update_payment_record),
        )
        .route(
            "/paymentDonations/campaign/{id}",
            get(get_payments_by_campaign),
        )
        .route("/donations_refund/{id}", delete(refund_payment))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}
