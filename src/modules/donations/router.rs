use axum::{
    Router, middleware,
    routing::{get, patch, post},
};

use crate::middleware::auth::require_auth;
use crate::modules::donations::controller::{
    create_campaign, get_campaign, get_campaigns, get_campaigns_by_creator, update_campaign,
};
use crate::state::AppState;

pub fn init_donations_router(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/donations", get(get_campaigns))
        .route("/donations/{id}", get(get_campaign));

    let authenticated = Router::new()
        .route("/donations/{id}", patch(update_campaign))
        .route("/createDonation", post(create_campaign))
        .route("/createDonation/{email}", get(get_campaigns_by_creator))
        .route_layer(middleware::from_fn_with_state(state, require_auth));

    public.merge(authenticated)
}
