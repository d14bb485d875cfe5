//! The role gate.
//!
//! Roles are never cached or carried in the token: every gated request reads
//! the caller's user record, so a role change applies to the next request.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use happyhomes_core::AppError;
use happyhomes_models::UserRole;
use happyhomes_observability::track_role_gate_denied;
use tracing::{instrument, warn};

use crate::middleware::auth::AuthUser;
use crate::modules::users::service::UserService;
use crate::state::AppState;

pub const FORBIDDEN_MESSAGE: &str = "forbidden access";

/// Fails with 403 unless the stored role for `auth_user` is exactly `admin`.
#[instrument(skip(state, auth_user), fields(email = %auth_user.email()))]
pub async fn ensure_admin(state: &AppState, auth_user: &AuthUser) -> Result<(), AppError> {
    let role = UserService::stored_role(&state.store, auth_user.email()).await?;

    if role != Some(UserRole::Admin) {
        track_role_gate_denied();
        warn!(?role, "Role gate denied request");
        return Err(AppError::forbidden(FORBIDDEN_MESSAGE));
    }

    Ok(())
}

/// Route layer admitting only administrators.
///
/// Runs after [`crate::middleware::auth::require_auth`]; on its own it still
/// verifies the bearer token first.
pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let (mut parts, body) = req.into_parts();

    let auth_user = match AuthUser::from_request_parts(&mut parts, &state).await {
        Ok(user) => user,
        Err(err) => return err.into_response(),
    };

    if let Err(err) = ensure_admin(&state, &auth_user).await {
        return err.into_response();
    }

    next.run(Request::from_parts(parts, body)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::http::StatusCode;
    use happyhomes_auth::{Claims, IdentityPayload};
    use happyhomes_config::{CorsConfig, JwtConfig};
    use happyhomes_db::{DocumentStore, MemoryStore, collections};
    use serde_json::json;

    async fn state_with_user(role: Option<&str>) -> AppState {
        let store = MemoryStore::new();
        let mut user = json!({"email": "a@x.com"});
        if let Some(role) = role {
            user["role"] = json!(role);
        }
        store
            .insert_one(collections::USERS, user.as_object().cloned().unwrap())
            .await
            .unwrap();

        AppState::new(
            Arc::new(store),
            JwtConfig {
                secret: "test-secret".to_string(),
                access_token_expiry: 3600,
            },
            CorsConfig {
                allowed_origins: vec![],
            },
        )
    }

    fn caller(email: &str) -> AuthUser {
        AuthUser(Claims::from_payload(&IdentityPayload::new(email), 0, 0))
    }

    #[tokio::test]
    async fn admin_passes() {
        let state = state_with_user(Some("admin")).await;
        assert!(ensure_admin(&state, &caller("a@x.com")).await.is_ok());
    }

    #[tokio::test]
    async fn non_admin_roles_are_forbidden() {
        for role in [Some("user"), Some("Admin"), Some("superadmin"), None] {
            let state = state_with_user(role).await;
            let err = ensure_admin(&state, &caller("a@x.com")).await.unwrap_err();
            assert_eq!(err.status, StatusCode::FORBIDDEN, "{role:?}");
            assert_eq!(err.error.to_string(), FORBIDDEN_MESSAGE);
        }
    }

    #[tokio::test]
    async fn unknown_user_is_forbidden() {
        let state = state_with_user(Some("admin")).await;
        let err = ensure_admin(&state, &caller("ghost@x.com")).await.unwrap_err();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
    }
}
