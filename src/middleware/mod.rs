//! Request gating.
//!
//! - [`auth`]: bearer token verification ([`auth::require_auth`]) and the
//!   [`auth::AuthUser`] extractor holding the decoded claims
//! - [`role`]: the role gate ([`role::require_admin`]), which looks up the
//!   caller's stored role on every request
//!
//! Gated routers stack both as route layers; the last layer added runs first:
//!
//! ```ignore
//! Router::new()
//!     .route("/users", get(get_users))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));
//! ```

pub mod auth;
pub mod role;
