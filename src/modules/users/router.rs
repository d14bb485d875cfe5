use axum::{
    Router, middleware,
    routing::{get, patch, post},
};

use crate::middleware::auth::require_auth;
use crate::middleware::role::require_admin;
use crate::modules::users::controller::{check_admin, get_users, make_admin, register_user};
use crate::state::AppState;

/// `GET` and `PATCH` on `/users/admin/{key}` share one path pattern: the key
/// is an email for the first and a user ID for the second.
pub fn init_users_router(state: AppState) -> Router<AppState> {
    let public = Router::new().route("/users", post(register_user));

    let authenticated = Router::new()
        .route("/users/admin/{key}", get(check_admin))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let admin = Router::new()
        .route("/users", get(get_users))
        .route("/users/admin/{key}", patch(make_admin))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
        .route_layer(middleware::from_fn_with_state(state, require_auth));

    public.merge(authenticated).merge(admin)
}
