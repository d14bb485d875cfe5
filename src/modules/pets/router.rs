use axum::{
    Router, middleware,
    routing::{get, patch, post},
};

use crate::middleware::auth::require_auth;
use crate::modules::pets::controller::{
    adopt_pet, create_pet, delete_pet, get_pet, get_pets, get_pets_by_email, update_pet,
};
use crate::state::AppState;

pub fn init_pets_router(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/pets", get(get_pets))
        .route("/pets/{id}", get(get_pet));

    let authenticated = Router::new()
        .route("/pets", post(create_pet))
        .route("/pets/{id}", patch(update_pet).delete(delete_pet))
        .route("/pets/email/{email}", get(get_pets_by_email))
        .route("/pets/adopt/{id}", patch(adopt_pet))
        .route_layer(middleware::from_fn_with_state(state, require_auth));

    public.merge(authenticated)
}
