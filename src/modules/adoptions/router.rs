use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::middleware::auth::require_auth;
use crate::modules::adoptions::controller::{
    create_adoption_request, get_adoption_requests, update_adoption_status,
};
use crate::state::AppState;

/// `/adoptPets/{key}` takes an owner email on `GET` and a request ID on `PATCH`.
pub fn init_adoptions_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/adoptPets", post(create_adoption_request))
        .route(
            "/adoptPets/{key}",
            get(get_adoption_requests).patch(update_adoption_status),
        )
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}
